use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::pixel::{self, Pixel};
use crate::viewport::Size;
use crate::writer::RowSink;

/// Streams rows into a PNG file: 8-bit RGB, non-interlaced, top row first.
pub struct PngSink {
    stream: png::StreamWriter<'static, BufWriter<File>>,
}

impl PngSink {
    /// Create the output file and write the PNG header.
    ///
    /// Must be followed by exactly `size.height` calls to
    /// [`RowSink::write_row`] and then [`PngSink::finish`].
    pub fn create(path: &Path, size: Size) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;

        let mut encoder = png::Encoder::new(BufWriter::new(file), size.width, size.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let writer = encoder.write_header().context("writing PNG header")?;
        let stream = writer
            .into_stream_writer_with_size(size.width as usize * 3)
            .context("creating PNG row stream")?;

        debug!("PNG header written: {}x{} RGB8", size.width, size.height);

        Ok(Self { stream })
    }

    /// Write the IEND trailer and flush the file.
    pub fn finish(self) -> Result<()> {
        self.stream.finish().context("finalizing PNG")?;
        Ok(())
    }
}

impl RowSink for PngSink {
    fn write_row(&mut self, row: &[Pixel]) -> Result<()> {
        self.stream.write_all(pixel::row_bytes(row))?;
        Ok(())
    }
}
