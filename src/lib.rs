//! Binary pattern pixelation filter for raster images
//!
//! The transform tiles a source image into fixed-size blocks, samples each
//! block's average color, and re-renders the block as an on/off sub-cell
//! pattern (checkerboard, diagonal, horizontal or vertical stripes) drawn
//! in that color over a white background.

#![forbid(unsafe_code)]

/// Core transform: average-color sampling and pattern fill
pub mod algorithm;
/// Input/output operations, CLI and error handling
pub mod io;
/// The closed set of on/off cell patterns
pub mod pattern;
/// Block and cell tiling geometry
pub mod spatial;

pub use algorithm::pixelator::PatternPixelator;
pub use io::error::{BinpixError, Result};
pub use io::image::{load_image, save_image};
pub use pattern::PatternKind;
