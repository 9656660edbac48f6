//! # retrolog-core
//!
//! Severity-tagged log lines for libretro frontends.
//!
//! Emulator cores report messages with an integer level and a printf-style
//! template. This crate renders those messages to standard output with a
//! short tag in front of them:
//!
//! | level | prefix |
//! |---|---|
//! | 0 | `[DBG]: ` |
//! | 1 | `[INF]: ` |
//! | 2 | `[WRN]: ` |
//! | 3 | `[ERR]: ` |
//! | other | `[042]: ` (the level, zero-filled to three digits) |
//!
//! Two template flavours are supported:
//! - printf templates rendered at runtime by [`Template`] with typed [`Arg`]s
//!   (see [`log_print`] and [`retro_logf!`])
//! - Rust format strings checked at compile time (see [`log_print_fmt`] and
//!   [`retro_log!`])
//!
//! No newline is ever added; a template that wants one must contain it.
//!
//! ```rust
//! use retrolog_core::{LevelPrinter, Severity};
//!
//! let mut printer = LevelPrinter::new(Vec::new());
//! printer.log(Severity::INFO, "value=%d\n", &[10.into()]);
//! assert_eq!(printer.into_inner(), b"[INF]: value=10\n");
//! ```

pub mod error;
mod macros;
pub mod prelude;
pub mod printer;
pub mod template;
pub mod types;

pub use error::{LogError, LogResult};
pub use printer::{log_print, log_print_fmt, try_log_print, LevelPrinter};
pub use template::{sprintf, Template};
pub use types::{Arg, ArgKind, Severity};
