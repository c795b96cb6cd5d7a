use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::info;

mod colour;
mod encoder;
mod pixel;
mod render;
mod scheduler;
mod viewport;
mod worker;
mod writer;

use encoder::PngSink;
use render::Settings;
use viewport::{Size, Viewport};

const ESCAPE_RADIUS: f64 = 2.0;
const MAX_ITERATIONS: u32 = 1000;

const VIEWPORT: Viewport = Viewport {
    cx_min: -1.35,
    cx_max: 0.75,
    cy_min: -1.25,
    cy_max: 1.25,
};

const SIZE: Size = Size {
    width: 1920,
    height: 1080,
};

const WORKERS: usize = 20;

const OUTPUT_PATH: &str = "mandelbrot.png";

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();

    let settings = Settings {
        size: SIZE,
        viewport: VIEWPORT,
        max_iterations: MAX_ITERATIONS,
        escape_radius: ESCAPE_RADIUS,
    };

    info!(
        "rendering {}x{} with {} workers ({} cpus available)",
        SIZE.width,
        SIZE.height,
        WORKERS,
        num_cpus::get()
    );

    let sink = PngSink::create(Path::new(OUTPUT_PATH), SIZE)?;
    let sink = worker::render_image(&settings, WORKERS, sink)?;
    sink.finish()?;

    info!("wrote {}", OUTPUT_PATH);
    println!("{} seconds", start.elapsed().as_secs_f64());

    Ok(())
}
