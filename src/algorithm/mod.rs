/// Block decomposition, average-color sampling and pattern fill
pub mod pixelator;

pub use pixelator::PatternPixelator;
