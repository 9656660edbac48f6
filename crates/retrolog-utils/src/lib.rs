//! # retrolog Utilities
//!
//! Diagnostics logging shared by the retrolog crates.
//!
//! The tagged lines a frontend prints for its emulator cores are produced by
//! `retrolog-core`. This crate sets up the *diagnostics* channel next to it:
//! a `tracing` subscriber that reports what the tools themselves are doing,
//! on stderr and optionally in a log file.

pub mod format;
pub mod logging;

// Re-export commonly used logging functions for convenience
pub use format::TaggedFormat;
pub use logging::{
    LogFormat, LogLevel, LoggingConfig, LoggingError, LoggingGuard, init_logging, init_logging_with_config,
    init_logging_with_level,
};
pub use tracing::{debug, error, info, trace, warn};
