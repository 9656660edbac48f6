//! Logging macros.

/// Print a tagged line built from a Rust format string
///
/// The format string is checked at compile time. No newline is appended.
/// Output goes to stdout unless a [`LevelPrinter`](crate::LevelPrinter) is
/// named before `=>`.
///
/// ```rust
/// use retrolog_core::{retro_log, LevelPrinter, Severity};
///
/// retro_log!(Severity::WARN, "save state {} is stale\n", 3);
///
/// let mut printer = LevelPrinter::new(Vec::new());
/// retro_log!(printer => 42, "custom level\n");
/// assert_eq!(printer.into_inner(), b"[042]: custom level\n");
/// ```
#[macro_export]
macro_rules! retro_log {
    ($printer:expr => $level:expr, $($arg:tt)+) => {
        $printer.log_fmt($level, ::std::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log_print_fmt($level, ::std::format_args!($($arg)+))
    };
}

/// Print a tagged line built from a printf-style template
///
/// Each argument goes through [`Arg::from`](crate::Arg), so any primitive,
/// `&str` or `String` works. The template is checked at runtime; see
/// [`LevelPrinter::log`](crate::LevelPrinter::log) for what happens on a
/// mismatch. As with [`retro_log!`], `printer =>` redirects the line.
///
/// ```rust
/// use retrolog_core::{retro_logf, LevelPrinter};
///
/// retro_logf!(0, "no arguments\n");
///
/// let mut printer = LevelPrinter::new(Vec::new());
/// retro_logf!(printer => 1, "loaded %s (%u bytes)\n", "rom.sfc", 1_048_576u32);
/// assert_eq!(printer.into_inner(), b"[INF]: loaded rom.sfc (1048576 bytes)\n");
/// ```
#[macro_export]
macro_rules! retro_logf {
    ($printer:expr => $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $printer.log($level, $template, &[$($crate::Arg::from($arg)),*])
    };
    ($level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_print($level, $template, &[$($crate::Arg::from($arg)),*])
    };
}
