//! Input/output, configuration and error reporting

/// Command-line interface and image file processing
pub mod cli;
/// Algorithm constants and solver configuration
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Loading and saving pixel grids as image files
pub mod image;
/// Terminal progress reporting
pub mod progress;
