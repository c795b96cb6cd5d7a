//! Colouring algorithms.

use crate::pixel::Pixel;

/// Linear colour map from an escape-time iteration count to an RGB pixel.
///
/// `p = iterations / max_iterations` scales green and blue to
/// `floor(p * 255)`; red stays 0. A point that never escapes
/// (`iterations == max_iterations`) is coloured `(0, 255, 255)`; one that
/// escapes immediately is coloured `(0, 0, 0)`.
pub fn colour_pixel(iterations: u32, max_iterations: u32) -> Pixel {
    let p = iterations as f64 / max_iterations as f64;
    let value = (p * 255.0).floor() as u8;

    Pixel {
        r: 0,
        g: value,
        b: value,
    }
}
