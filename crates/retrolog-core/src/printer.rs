//! # Level Printer
//!
//! Writes one tagged line per call: the severity prefix followed by the
//! rendered message, with nothing appended.
//!
//! The printer is stateless apart from its writer. Calling it twice with the
//! same input writes the same bytes twice.
//!
//! ## Concurrency
//!
//! Prefix and message are assembled first and handed to the writer in a
//! single `write_all`. Whether lines from several threads interleave is up to
//! the writer (for stdout, the standard library's lock). Callers that need
//! stricter ordering wrap their calls in their own lock.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use crate::error::LogResult;
use crate::template::Template;
use crate::types::{Arg, Severity};

/// Writes severity-tagged lines to `W`
///
/// ## Example
///
/// ```rust
/// use retrolog_core::LevelPrinter;
///
/// let mut printer = LevelPrinter::new(Vec::new());
/// printer.log(7, "hello %s", &["world".into()]);
/// printer.log(-5, "n=%d", &[9.into()]);
/// assert_eq!(printer.into_inner(), b"[007]: hello world[-5]: n=9");
/// ```
#[derive(Debug)]
pub struct LevelPrinter<W>
{
    writer: W,
}

impl LevelPrinter<io::Stdout>
{
    /// Printer writing to the process's standard output
    pub fn stdout() -> Self
    {
        LevelPrinter::new(io::stdout())
    }
}

impl<W: Write> LevelPrinter<W>
{
    /// Wrap a writer
    pub fn new(writer: W) -> Self
    {
        LevelPrinter { writer }
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W
    {
        &self.writer
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W
    {
        self.writer
    }

    /// Print `template` rendered with `args`, prefixed by the level's tag
    ///
    /// Nothing is reported back to the caller. If the template does not
    /// match its arguments the template is printed verbatim after the
    /// prefix and a `tracing` warning describes the mismatch. Write failures
    /// are dropped.
    pub fn log(&mut self, level: impl Into<Severity>, template: &str, args: &[Arg<'_>])
    {
        let level = level.into();
        let line = match render_line(level, template, args) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(level = level.raw(), template, error = %err, "Log template does not match its arguments");
                format!("{}{template}", level.prefix())
            }
        };
        self.emit(&line);
    }

    /// Like [`LevelPrinter::log`], but reports failures
    ///
    /// Nothing is written when the template does not match its arguments.
    ///
    /// ## Errors
    ///
    /// Returns an error if the template is malformed, an argument is missing
    /// or of the wrong kind, or the writer fails.
    pub fn try_log(&mut self, level: impl Into<Severity>, template: &str, args: &[Arg<'_>]) -> LogResult<()>
    {
        let line = render_line(level.into(), template, args)?;
        self.write_line(&line)?;
        Ok(())
    }

    /// Print a message built with [`format_args!`], prefixed by the level's tag
    ///
    /// ```rust
    /// use retrolog_core::{LevelPrinter, Severity};
    ///
    /// let mut printer = LevelPrinter::new(Vec::new());
    /// printer.log_fmt(Severity::ERROR, format_args!("core {} failed\n", "snes9x"));
    /// assert_eq!(printer.into_inner(), b"[ERR]: core snes9x failed\n");
    /// ```
    pub fn log_fmt(&mut self, level: impl Into<Severity>, args: fmt::Arguments<'_>)
    {
        let line = format_line(level.into(), args);
        self.emit(&line);
    }

    /// Like [`LevelPrinter::log_fmt`], but reports write failures
    ///
    /// ## Errors
    ///
    /// Returns an error if the writer fails.
    pub fn try_log_fmt(&mut self, level: impl Into<Severity>, args: fmt::Arguments<'_>) -> LogResult<()>
    {
        let line = format_line(level.into(), args);
        self.write_line(&line)?;
        Ok(())
    }

    fn emit(&mut self, line: &str)
    {
        if let Err(err) = self.write_line(line) {
            tracing::debug!(error = %err, "Dropped log line");
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()>
    {
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()
    }
}

fn render_line(level: Severity, template: &str, args: &[Arg<'_>]) -> LogResult<String>
{
    let template = Template::parse(template)?;
    let mut line = level.prefix().to_string();
    template.render_into(&mut line, args)?;
    Ok(line)
}

fn format_line(level: Severity, args: fmt::Arguments<'_>) -> String
{
    let mut line = level.prefix().to_string();
    // Writing into a String only fails if a Display impl inside `args` does
    let _ = line.write_fmt(args);
    line
}

/// Print a printf-style line to standard output
///
/// ```rust,no_run
/// use retrolog_core::log_print;
///
/// log_print(1, "value=%d\n", &[10.into()]); // [INF]: value=10
/// ```
pub fn log_print(level: impl Into<Severity>, template: &str, args: &[Arg<'_>])
{
    LevelPrinter::stdout().log(level, template, args);
}

/// Print a printf-style line to standard output, reporting failures
///
/// ## Errors
///
/// See [`LevelPrinter::try_log`].
pub fn try_log_print(level: impl Into<Severity>, template: &str, args: &[Arg<'_>]) -> LogResult<()>
{
    LevelPrinter::stdout().try_log(level, template, args)
}

/// Print a [`format_args!`] line to standard output
pub fn log_print_fmt(level: impl Into<Severity>, args: fmt::Arguments<'_>)
{
    LevelPrinter::stdout().log_fmt(level, args);
}
