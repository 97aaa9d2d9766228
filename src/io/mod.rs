//! Input/output operations and error handling

/// Command-line interface and generation orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and export operations
pub mod error;
/// Pattern rasterization and PNG export
pub mod image;
/// Progress display for long-running generations
pub mod progress;
