//! Visualization surface: an opaque byte-per-pixel framebuffer (`spec.md`
//! §6). The original SDL-backed pixel surface is out of scope for this
//! headless port; `write_ppm` stands in as a file-based sink any viewer can
//! load, grounded on the same "fill a buffer, flush it on demand" shape.

use std::io::{self, Write};
use std::path::Path;

use pond_grid::CellStore;

use crate::color::{color_for_cell, ColorScheme};
use crate::snapshot::Snapshot;

/// A `width` x `height` grid of single-byte pixel values, refreshed each
/// `REFRESH_FREQUENCY` tick.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Allocates a zeroed framebuffer sized to `width` x `height`.
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            pixels: vec![0u8; width * height],
        }
    }

    /// Recomputes every pixel from the current grid state under `scheme`.
    pub fn redraw(&mut self, store: &CellStore, scheme: ColorScheme, snap: &Snapshot) {
        for (idx, cell) in store.iter().enumerate() {
            self.pixels[idx] = color_for_cell(
                cell,
                scheme,
                snap.max_living_cell_energy,
                snap.max_cell_energy,
            );
        }
    }

    /// Grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixel bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Writes `frame` as a grayscale binary PPM (P5) file.
pub fn write_ppm(frame: &FrameBuffer, path: &Path) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "P5\n{} {}\n255\n", frame.width(), frame.height())?;
    file.write_all(frame.pixels())?;
    Ok(())
}
