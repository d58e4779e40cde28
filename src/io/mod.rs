//! Input/output operations, CLI and error handling

/// Command-line interface and job orchestration
pub mod cli;
/// Defaults and named constants
pub mod configuration;
/// Error types for configuration and image I/O
pub mod error;
/// Image decoding and encoding at the filesystem boundary
pub mod image;
/// Progress display for block processing
pub mod progress;
