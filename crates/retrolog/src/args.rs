//! Turning command-line strings into typed template arguments.
//!
//! The shell only hands us strings, so each one is parsed according to the
//! conversion that will consume it, the way `printf(1)` does.

use retrolog_core::{Arg, ArgKind};
use thiserror::Error;

/// A command-line value that does not fit its conversion
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgError
{
    /// Expected an integer (decimal, `0x`, `0o`, `0b`, or `'c`)
    #[error("Argument {index} ('{value}') is not a valid integer")]
    InvalidInteger
    {
        /// Position among the template arguments
        index: usize,
        /// The text as given
        value: String,
    },

    /// Expected a number
    #[error("Argument {index} ('{value}') is not a valid number")]
    InvalidFloat
    {
        /// Position among the template arguments
        index: usize,
        /// The text as given
        value: String,
    },

    /// `%c` got an empty string
    #[error("Argument {index} is empty but '%c' needs a character")]
    EmptyChar
    {
        /// Position among the template arguments
        index: usize,
    },
}

/// Parse each value as the kind the template expects at its position
///
/// Values past the last expected kind are passed through as strings; the
/// template ignores them.
pub fn coerce<'a>(kinds: &[ArgKind], values: &'a [String]) -> Result<Vec<Arg<'a>>, ArgError>
{
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match kinds.get(index) {
            Some(&kind) => coerce_one(index, kind, value),
            None => Ok(Arg::from(value.as_str())),
        })
        .collect()
}

/// Like [`coerce`], but a value that does not parse stays a string
///
/// The printer then reports the mismatch itself.
pub fn coerce_lenient<'a>(kinds: &[ArgKind], values: &'a [String]) -> Vec<Arg<'a>>
{
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match kinds.get(index) {
            Some(&kind) => coerce_one(index, kind, value).unwrap_or_else(|_| Arg::from(value.as_str())),
            None => Arg::from(value.as_str()),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn coerce_one(index: usize, kind: ArgKind, value: &str) -> Result<Arg<'_>, ArgError>
{
    let invalid_integer = || ArgError::InvalidInteger {
        index,
        value: value.to_string(),
    };
    match kind {
        ArgKind::Int | ArgKind::Uint => parse_integer(value).ok_or_else(invalid_integer),
        ArgKind::Pointer => match parse_integer(value) {
            Some(Arg::Uint(v)) => usize::try_from(v).map(Arg::Pointer).map_err(|_| invalid_integer()),
            Some(Arg::Int(v)) => usize::try_from(v).map(Arg::Pointer).map_err(|_| invalid_integer()),
            _ => Err(invalid_integer()),
        },
        ArgKind::Float => {
            if let Ok(v) = value.trim().parse::<f64>() {
                return Ok(Arg::Float(v));
            }
            match parse_integer(value) {
                Some(Arg::Int(v)) => Ok(Arg::Float(v as f64)),
                Some(Arg::Uint(v)) => Ok(Arg::Float(v as f64)),
                _ => Err(ArgError::InvalidFloat {
                    index,
                    value: value.to_string(),
                }),
            }
        }
        ArgKind::Char => value.chars().next().map(Arg::Char).ok_or(ArgError::EmptyChar { index }),
        ArgKind::Str => Ok(Arg::from(value)),
    }
}

/// Integers as `printf(1)` accepts them
///
/// Negative values come back as [`Arg::Int`], non-negative ones as
/// [`Arg::Uint`] so the full `u64` range survives. A leading quote yields the
/// code point of the next character (`'A` is 65).
fn parse_integer(value: &str) -> Option<Arg<'static>>
{
    let value = value.trim();
    if let Some(quoted) = value.strip_prefix(['\'', '"']) {
        return quoted.chars().next().map(|c| Arg::Uint(u64::from(u32::from(c))));
    }

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let (radix, digits) = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (16, hex)
    } else if let Some(octal) = digits.strip_prefix("0o") {
        (8, octal)
    } else if let Some(binary) = digits.strip_prefix("0b") {
        (2, binary)
    } else {
        (10, digits)
    };
    // from_str_radix would accept a second sign
    if digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    if negative {
        if magnitude == 1 << 63 {
            Some(Arg::Int(i64::MIN))
        } else {
            i64::try_from(magnitude).ok().map(|m| Arg::Int(-m))
        }
    } else {
        Some(Arg::Uint(magnitude))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn strings(values: &[&str]) -> Vec<String>
    {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_integer_forms()
    {
        assert_eq!(parse_integer("42"), Some(Arg::Uint(42)));
        assert_eq!(parse_integer("+42"), Some(Arg::Uint(42)));
        assert_eq!(parse_integer("-42"), Some(Arg::Int(-42)));
        assert_eq!(parse_integer("0xff"), Some(Arg::Uint(255)));
        assert_eq!(parse_integer("-0x10"), Some(Arg::Int(-16)));
        assert_eq!(parse_integer("0o17"), Some(Arg::Uint(15)));
        assert_eq!(parse_integer("0b101"), Some(Arg::Uint(5)));
        assert_eq!(parse_integer("'A"), Some(Arg::Uint(65)));
        assert_eq!(parse_integer("18446744073709551615"), Some(Arg::Uint(u64::MAX)));
        assert_eq!(parse_integer("-9223372036854775808"), Some(Arg::Int(i64::MIN)));
        assert_eq!(parse_integer("--1"), None);
        assert_eq!(parse_integer("0x"), None);
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn test_coerce_by_kind()
    {
        let values = strings(&["7", "2.5", "x", "name", "0x10", "extra"]);
        let kinds = [ArgKind::Int, ArgKind::Float, ArgKind::Char, ArgKind::Str, ArgKind::Pointer];
        let args = coerce(&kinds, &values).unwrap();
        assert_eq!(
            args,
            vec![
                Arg::Uint(7),
                Arg::Float(2.5),
                Arg::Char('x'),
                Arg::from("name"),
                Arg::Pointer(16),
                Arg::from("extra"),
            ]
        );
    }

    #[test]
    fn test_coerce_float_accepts_integers()
    {
        let values = strings(&["0x10", "3"]);
        let args = coerce(&[ArgKind::Float, ArgKind::Float], &values).unwrap();
        assert_eq!(args, vec![Arg::Float(16.0), Arg::Float(3.0)]);
    }

    #[test]
    fn test_coerce_errors()
    {
        let values = strings(&["abc"]);
        assert_eq!(
            coerce(&[ArgKind::Int], &values),
            Err(ArgError::InvalidInteger {
                index: 0,
                value: "abc".to_string()
            })
        );
        assert_eq!(
            coerce(&[ArgKind::Float], &values),
            Err(ArgError::InvalidFloat {
                index: 0,
                value: "abc".to_string()
            })
        );
        assert_eq!(coerce(&[ArgKind::Char], &strings(&[""])), Err(ArgError::EmptyChar { index: 0 }));
    }

    #[test]
    fn test_coerce_lenient_keeps_strings()
    {
        let values = strings(&["abc", "5"]);
        let args = coerce_lenient(&[ArgKind::Int, ArgKind::Int], &values);
        assert_eq!(args, vec![Arg::from("abc"), Arg::Uint(5)]);
    }
}
