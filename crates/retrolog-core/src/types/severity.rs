//! Severity levels and the prefix they render as.

use std::fmt;
use std::str::FromStr;

use tracing::Level;

/// Severity of a log line
///
/// Cores hand the frontend a plain integer. Levels `0..=3` are the libretro
/// levels (debug, info, warn, error); every other integer is accepted as-is
/// and printed numerically.
///
/// ## Why wrap it in a struct?
///
/// Using a newtype pattern (`struct Severity(i32)`) instead of a raw `i32`
/// keeps the level from being confused with the arguments of the message,
/// and gives the tag lookup a home.
///
/// ## Example
///
/// ```rust
/// use retrolog_core::Severity;
///
/// assert_eq!(Severity::WARN.prefix().to_string(), "[WRN]: ");
/// assert_eq!(Severity::from(42).prefix().to_string(), "[042]: ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(pub i32);

impl Severity
{
    /// Debug messages (`[DBG]`)
    pub const DEBUG: Severity = Severity(0);
    /// Informational messages (`[INF]`)
    pub const INFO: Severity = Severity(1);
    /// Warnings (`[WRN]`)
    pub const WARN: Severity = Severity(2);
    /// Errors (`[ERR]`)
    pub const ERROR: Severity = Severity(3);

    /// Get the raw integer level
    pub fn raw(self) -> i32
    {
        self.0
    }

    /// Three-letter tag for the named levels, `None` for any other integer
    ///
    /// ```rust
    /// use retrolog_core::Severity;
    ///
    /// assert_eq!(Severity::ERROR.tag(), Some("ERR"));
    /// assert_eq!(Severity::from(7).tag(), None);
    /// ```
    pub const fn tag(self) -> Option<&'static str>
    {
        match self.0 {
            0 => Some("DBG"),
            1 => Some("INF"),
            2 => Some("WRN"),
            3 => Some("ERR"),
            _ => None,
        }
    }

    /// The prefix printed in front of every message at this level
    pub fn prefix(self) -> Prefix
    {
        Prefix(self)
    }

    /// Matching `tracing` level, if this is one of the named levels
    pub fn as_tracing_level(self) -> Option<Level>
    {
        match self.0 {
            0 => Some(Level::DEBUG),
            1 => Some(Level::INFO),
            2 => Some(Level::WARN),
            3 => Some(Level::ERROR),
            _ => None,
        }
    }
}

impl From<i32> for Severity
{
    fn from(level: i32) -> Self
    {
        Severity(level)
    }
}

impl From<Severity> for i32
{
    fn from(level: Severity) -> Self
    {
        level.0
    }
}

impl From<Level> for Severity
{
    fn from(level: Level) -> Self
    {
        // libretro has no trace level; it folds into debug
        match level {
            Level::TRACE | Level::DEBUG => Severity::DEBUG,
            Level::INFO => Severity::INFO,
            Level::WARN => Severity::WARN,
            Level::ERROR => Severity::ERROR,
        }
    }
}

impl FromStr for Severity
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let s = s.trim();
        if let Ok(level) = s.parse::<i32>() {
            return Ok(Severity(level));
        }
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Ok(Severity::DEBUG),
            "info" | "inf" => Ok(Severity::INFO),
            "warn" | "warning" | "wrn" => Ok(Severity::WARN),
            "error" | "err" => Ok(Severity::ERROR),
            _ => Err(format!(
                "Unknown severity: {s}. Use an integer or 'debug', 'info', 'warn', or 'error'"
            )),
        }
    }
}

impl fmt::Display for Severity
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.tag() {
            Some(tag) => f.write_str(tag),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Rendered prefix of a log line, e.g. `[INF]: `
///
/// Unnamed levels are zero-filled to three digits (`[007]: `, `[042]: `)
/// and never truncated (`[12345]: `). Negative levels print their plain
/// decimal form (`[-5]: `).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix(Severity);

impl fmt::Display for Prefix
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let level = self.0.raw();
        match self.0.tag() {
            Some(tag) => write!(f, "[{tag}]: "),
            None if level < 0 => write!(f, "[{level}]: "),
            None => write!(f, "[{level:03}]: "),
        }
    }
}
