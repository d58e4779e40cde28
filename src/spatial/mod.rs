//! Block and cell tiling geometry
//!
//! Blocks tile the image and cells tile a block with the same rule:
//! row-major, fixed step, trailing regions clipped to the enclosing bounds.

/// Half-open pixel rectangles and row-major tiling iterators
pub mod blocks;

pub use blocks::{Region, regions};
