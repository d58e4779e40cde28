//! The core transform: block decomposition, average color, pattern fill
//!
//! The output canvas is allocated once up front as opaque white and every
//! block writes only its own disjoint rectangle. "Off" cells are never
//! drawn; the background shows through. Block order is row-major and only
//! observable through progress callbacks, never through pixel values.

use crate::io::configuration::{BACKGROUND, CELL_SUBDIVISIONS};
use crate::io::error::{BinpixError, Result};
use crate::pattern::PatternKind;
use crate::spatial::{Region, regions};
use image::{Rgb, RgbImage};

/// Stateless per-call transform from an image to its patterned rendition
///
/// Configuration is validated at construction, before any image is touched.
#[derive(Debug, Clone, Copy)]
pub struct PatternPixelator {
    block_size: u32,
    cell_size: u32,
    pattern: PatternKind,
}

impl PatternPixelator {
    /// Create a pixelator from a block size and a pattern name
    ///
    /// The pattern name is matched case-insensitively against the closed
    /// set of four recognized patterns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `block_size` is zero or the
    /// pattern name is unrecognized.
    pub fn new(block_size: u32, pattern: &str) -> Result<Self> {
        Self::with_pattern(block_size, PatternKind::from_name(pattern)?)
    }

    /// Create a pixelator from a block size and an already-resolved pattern
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `block_size` is zero.
    pub fn with_pattern(block_size: u32, pattern: PatternKind) -> Result<Self> {
        if block_size == 0 {
            return Err(BinpixError::InvalidConfiguration {
                parameter: "block_size",
                value: block_size.to_string(),
                reason: "block size must be at least 1".to_string(),
            });
        }

        Ok(Self {
            block_size,
            cell_size: (block_size / CELL_SUBDIVISIONS).max(1),
            pattern,
        })
    }

    /// Side length of a block in pixels
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Side length of a pattern cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// The configured pattern
    pub const fn pattern(&self) -> PatternKind {
        self.pattern
    }

    /// Number of blocks per axis for an image of the given dimensions
    pub const fn block_grid(&self, width: u32, height: u32) -> (u32, u32) {
        (
            width.div_ceil(self.block_size),
            height.div_ceil(self.block_size),
        )
    }

    /// Render the patterned version of an image
    ///
    /// The result has the same dimensions as the input; the input is never
    /// mutated. Every output pixel is either the owning block's average
    /// color or the white background.
    pub fn process(&self, image: &RgbImage) -> RgbImage {
        self.process_with_progress(image, |_| {})
    }

    /// Render the patterned version, reporting each completed block
    ///
    /// The callback receives the running count of completed blocks. It is
    /// advisory only; the pixel output is identical to [`Self::process`].
    pub fn process_with_progress(
        &self,
        image: &RgbImage,
        mut on_block: impl FnMut(u64),
    ) -> RgbImage {
        let (width, height) = image.dimensions();
        let mut canvas = RgbImage::from_pixel(width, height, Rgb(BACKGROUND));

        let mut completed = 0u64;
        for block in regions(width, height, self.block_size) {
            let color = average_color(image, &block);
            self.fill_block(&mut canvas, &block, color);
            completed += 1;
            on_block(completed);
        }

        canvas
    }

    // Paints the block's "on" cells; "off" cells stay background.
    fn fill_block(&self, canvas: &mut RgbImage, block: &Region, color: Rgb<u8>) {
        for ((cell_x, cell_y), cell) in block.cells(self.cell_size) {
            if self.pattern.is_on(cell_x, cell_y) {
                for (x, y) in cell.pixels() {
                    canvas.put_pixel(x, y, color);
                }
            }
        }
    }
}

/// Per-channel arithmetic mean over a region, floored to integers
///
/// Sums are exact (`u64` per channel), so the result is independent of
/// pixel enumeration order. The region must lie within the image and must
/// not be empty; the tiling iterators only produce such regions.
pub fn average_color(image: &RgbImage, region: &Region) -> Rgb<u8> {
    let mut sums = [0u64; 3];
    for (x, y) in region.pixels() {
        let pixel = image.get_pixel(x, y);
        for (sum, channel) in sums.iter_mut().zip(pixel.0) {
            *sum += u64::from(channel);
        }
    }

    let count = region.pixel_count().max(1);
    Rgb(sums.map(|sum| (sum / count) as u8))
}
