//! Defaults and named constants

/// Default side length of a block in pixels
pub const DEFAULT_BLOCK_SIZE: u32 = 10;

/// Default pattern name used by the CLI
pub const DEFAULT_PATTERN: &str = "checkerboard";

/// Number of cells a block is subdivided into per axis
///
/// The cell side is `block_size / CELL_SUBDIVISIONS`, floored, never below
/// one pixel.
pub const CELL_SUBDIVISIONS: u32 = 4;

/// Prefix for default output filenames (`output_<pattern>.png`)
pub const OUTPUT_PREFIX: &str = "output_";

/// Background color of the output canvas; "off" cells are left this color
pub const BACKGROUND: [u8; 3] = [255, 255, 255];
