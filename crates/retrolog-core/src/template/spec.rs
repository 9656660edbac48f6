//! Conversion specifier parsing.
//!
//! A specifier has the shape `%[flags][width][.precision][length]conversion`.

use crate::error::{LogError, LogResult};
use crate::types::ArgKind;

/// Largest width or precision accepted, `i32::MAX` as in C
pub const MAX_COUNT: usize = 0x7fff_ffff;

/// Flag characters that precede the width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags
{
    /// `-`: pad on the right
    pub left: bool,
    /// `+`: always print a sign for signed conversions
    pub plus: bool,
    /// ` `: print a space where a `+` would go
    pub space: bool,
    /// `#`: alternate form
    pub alternate: bool,
    /// `0`: pad numbers with zeros
    pub zero: bool,
}

/// Width or precision: absent, literal, or taken from the argument list (`*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count
{
    /// Written in the template
    Fixed(usize),
    /// Read from the next argument
    FromArg,
}

/// Length modifier
///
/// Only `hh` and `h` change the rendered value (they truncate integers).
/// The others are accepted because C templates carry them routinely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length
{
    /// `hh`
    Char,
    /// `h`
    Short,
    /// `l`, `ll`, `q`, `j`, `z`, `t`, `L`
    Wide,
}

/// How a float is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatStyle
{
    /// `%f`
    Fixed,
    /// `%e`
    Exponent,
    /// `%g`
    General,
}

/// The conversion character, decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion
{
    /// `%d`, `%i`
    Signed,
    /// `%u`
    Unsigned,
    /// `%o`
    Octal,
    /// `%x`, `%X`
    Hex
    {
        /// `X` rather than `x`
        upper: bool,
    },
    /// `%f`, `%F`, `%e`, `%E`, `%g`, `%G`
    Float
    {
        /// Layout
        style: FloatStyle,
        /// Upper-case exponent and `INF`/`NAN`
        upper: bool,
    },
    /// `%c`
    Char,
    /// `%s`
    Str,
    /// `%p`
    Pointer,
    /// `%%`
    Percent,
}

impl Conversion
{
    fn from_char(c: char) -> Option<Self>
    {
        let conversion = match c {
            'd' | 'i' => Conversion::Signed,
            'u' => Conversion::Unsigned,
            'o' => Conversion::Octal,
            'x' => Conversion::Hex { upper: false },
            'X' => Conversion::Hex { upper: true },
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' => Conversion::Float {
                style: match c.to_ascii_lowercase() {
                    'f' => FloatStyle::Fixed,
                    'e' => FloatStyle::Exponent,
                    _ => FloatStyle::General,
                },
                upper: c.is_ascii_uppercase(),
            },
            'c' => Conversion::Char,
            's' => Conversion::Str,
            'p' => Conversion::Pointer,
            '%' => Conversion::Percent,
            _ => return None,
        };
        Some(conversion)
    }

    /// Kind of argument this conversion consumes, `None` for `%%`
    pub fn expects(self) -> Option<ArgKind>
    {
        match self {
            Conversion::Signed => Some(ArgKind::Int),
            Conversion::Unsigned | Conversion::Octal | Conversion::Hex { .. } => Some(ArgKind::Uint),
            Conversion::Float { .. } => Some(ArgKind::Float),
            Conversion::Char => Some(ArgKind::Char),
            Conversion::Str => Some(ArgKind::Str),
            Conversion::Pointer => Some(ArgKind::Pointer),
            Conversion::Percent => None,
        }
    }
}

/// One parsed `%...` specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSpec
{
    /// Flags
    pub flags: Flags,
    /// Minimum field width
    pub width: Option<Count>,
    /// Precision
    pub precision: Option<Count>,
    /// Length modifier
    pub length: Option<Length>,
    /// Decoded conversion
    pub conversion: Conversion,
    /// Conversion character as written
    pub conversion_char: char,
}

impl ConversionSpec
{
    /// Parse the specifier whose `%` sits at byte `offset` of `template`
    ///
    /// Returns the spec and the byte index just past it.
    pub fn parse(template: &str, offset: usize) -> LogResult<(Self, usize)>
    {
        let bytes = template.as_bytes();
        let incomplete = || LogError::IncompleteSpecifier { offset };
        let mut i = offset + 1;

        let mut flags = Flags::default();
        while let Some(&b) = bytes.get(i) {
            match b {
                b'-' => flags.left = true,
                b'+' => flags.plus = true,
                b' ' => flags.space = true,
                b'#' => flags.alternate = true,
                b'0' => flags.zero = true,
                _ => break,
            }
            i += 1;
        }

        let width = parse_count(bytes, &mut i);

        let precision = if bytes.get(i) == Some(&b'.') {
            i += 1;
            // A bare '.' means precision zero
            Some(parse_count(bytes, &mut i).unwrap_or(Count::Fixed(0)))
        } else {
            None
        };

        let length = match (bytes.get(i), bytes.get(i + 1)) {
            (Some(b'h'), Some(b'h')) => {
                i += 2;
                Some(Length::Char)
            }
            (Some(b'h'), _) => {
                i += 1;
                Some(Length::Short)
            }
            (Some(b'l'), Some(b'l')) => {
                i += 2;
                Some(Length::Wide)
            }
            (Some(b'l' | b'q' | b'j' | b'z' | b't' | b'L'), _) => {
                i += 1;
                Some(Length::Wide)
            }
            _ => None,
        };

        let conversion_char = template.get(i..).and_then(|rest| rest.chars().next()).ok_or_else(incomplete)?;
        let conversion = Conversion::from_char(conversion_char).ok_or(LogError::UnsupportedConversion {
            conversion: conversion_char,
            offset,
        })?;

        let oversized = |count: Option<Count>| matches!(count, Some(Count::Fixed(n)) if n > MAX_COUNT);
        if oversized(width) || oversized(precision) {
            return Err(LogError::FieldTooLarge {
                conversion: conversion_char,
            });
        }

        let spec = ConversionSpec {
            flags,
            width,
            precision,
            length,
            conversion,
            conversion_char,
        };
        Ok((spec, i + conversion_char.len_utf8()))
    }

    /// Kinds of the arguments this spec consumes, in consumption order
    pub fn argument_kinds(&self) -> impl Iterator<Item = ArgKind>
    {
        let width = (self.width == Some(Count::FromArg)).then_some(ArgKind::Int);
        let precision = (self.precision == Some(Count::FromArg)).then_some(ArgKind::Int);
        width.into_iter().chain(precision).chain(self.conversion.expects())
    }
}

fn parse_count(bytes: &[u8], i: &mut usize) -> Option<Count>
{
    if bytes.get(*i) == Some(&b'*') {
        *i += 1;
        return Some(Count::FromArg);
    }
    let start = *i;
    let mut value = 0usize;
    while let Some(digit) = bytes.get(*i).filter(|b| b.is_ascii_digit()) {
        value = value.saturating_mul(10).saturating_add(usize::from(digit - b'0'));
        *i += 1;
    }
    (*i > start).then_some(Count::Fixed(value))
}
