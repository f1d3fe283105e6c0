/// Command-line interface and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
/// Plain-text analysis reports
pub mod report;
