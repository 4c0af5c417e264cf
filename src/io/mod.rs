//! Console input/output, configuration and error handling

/// Command-line arguments and the interactive session
pub mod cli;
/// Console command parsing
pub mod command;
/// Defaults and tuning constants
pub mod configuration;
/// Error types
pub mod error;
/// Board rendering
pub mod render;
