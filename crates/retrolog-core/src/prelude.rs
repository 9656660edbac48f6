//! Common module for library exports

pub use crate::error::{LogError, LogResult};
pub use crate::printer::{log_print, log_print_fmt, try_log_print, LevelPrinter};
pub use crate::template::{sprintf, Template};
pub use crate::types::{Arg, ArgKind, Severity};
pub use crate::{retro_log, retro_logf};
