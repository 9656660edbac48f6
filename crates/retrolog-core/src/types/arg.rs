//! Typed printf arguments.

use std::borrow::Cow;
use std::fmt;

/// One argument of a printf-style template
///
/// C callers pass a varargs list whose types only the template knows. Here
/// every argument carries its own kind, so a mismatch between `%d` and a
/// string is detected instead of read as garbage.
///
/// Most values convert with `.into()`:
///
/// ```rust
/// use retrolog_core::{sprintf, Arg};
///
/// let args: [Arg; 3] = [7u8.into(), "cores".into(), 0.5f32.into()];
/// assert_eq!(sprintf("%d %s at %.1f", &args).unwrap(), "7 cores at 0.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a>
{
    /// Signed integer (`%d`, `%i`)
    Int(i64),
    /// Unsigned integer (`%u`, `%o`, `%x`, `%X`)
    Uint(u64),
    /// Floating point number (`%f`, `%e`, `%g`)
    Float(f64),
    /// Single character (`%c`)
    Char(char),
    /// String (`%s`)
    Str(Cow<'a, str>),
    /// Address (`%p`)
    Pointer(usize),
}

impl Arg<'_>
{
    /// Kind of this argument
    pub fn kind(&self) -> ArgKind
    {
        match self {
            Arg::Int(_) => ArgKind::Int,
            Arg::Uint(_) => ArgKind::Uint,
            Arg::Float(_) => ArgKind::Float,
            Arg::Char(_) => ArgKind::Char,
            Arg::Str(_) => ArgKind::Str,
            Arg::Pointer(_) => ArgKind::Pointer,
        }
    }

    /// Detach the argument from any borrowed string
    pub fn into_owned(self) -> Arg<'static>
    {
        match self {
            Arg::Int(v) => Arg::Int(v),
            Arg::Uint(v) => Arg::Uint(v),
            Arg::Float(v) => Arg::Float(v),
            Arg::Char(v) => Arg::Char(v),
            Arg::Str(v) => Arg::Str(Cow::Owned(v.into_owned())),
            Arg::Pointer(v) => Arg::Pointer(v),
        }
    }
}

/// What kind of value an argument is, or a conversion expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind
{
    /// Signed integer
    Int,
    /// Unsigned integer
    Uint,
    /// Floating point number
    Float,
    /// Character
    Char,
    /// String
    Str,
    /// Pointer
    Pointer,
}

impl fmt::Display for ArgKind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(match self {
            ArgKind::Int => "a signed integer",
            ArgKind::Uint => "an unsigned integer",
            ArgKind::Float => "a float",
            ArgKind::Char => "a character",
            ArgKind::Str => "a string",
            ArgKind::Pointer => "a pointer",
        })
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($source:ty),+) => {
        $(
            impl From<$source> for Arg<'_>
            {
                fn from(value: $source) -> Self
                {
                    Arg::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64);
impl_from_int!(Uint, u64, u8, u16, u32, u64);

impl From<isize> for Arg<'_>
{
    fn from(value: isize) -> Self
    {
        // isize is at most 64 bits on every supported target
        Arg::Int(value as i64)
    }
}

impl From<usize> for Arg<'_>
{
    fn from(value: usize) -> Self
    {
        Arg::Uint(value as u64)
    }
}

impl From<bool> for Arg<'_>
{
    fn from(value: bool) -> Self
    {
        Arg::Int(i64::from(value))
    }
}

impl From<f32> for Arg<'_>
{
    fn from(value: f32) -> Self
    {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg<'_>
{
    fn from(value: f64) -> Self
    {
        Arg::Float(value)
    }
}

impl From<char> for Arg<'_>
{
    fn from(value: char) -> Self
    {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a>
{
    fn from(value: &'a str) -> Self
    {
        Arg::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Arg<'a>
{
    fn from(value: &'a String) -> Self
    {
        Arg::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Arg<'_>
{
    fn from(value: String) -> Self
    {
        Arg::Str(Cow::Owned(value))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_integer_conversions_keep_signedness()
    {
        assert_eq!(Arg::from(-3i8), Arg::Int(-3));
        assert_eq!(Arg::from(200u8), Arg::Uint(200));
        assert_eq!(Arg::from(u64::MAX), Arg::Uint(u64::MAX));
        assert_eq!(Arg::from(-1isize), Arg::Int(-1));
        assert_eq!(Arg::from(true), Arg::Int(1));
    }

    #[test]
    fn test_kind()
    {
        assert_eq!(Arg::from("x").kind(), ArgKind::Str);
        assert_eq!(Arg::from(1.5f32).kind(), ArgKind::Float);
        assert_eq!(Arg::Pointer(0x10).kind(), ArgKind::Pointer);
    }

    #[test]
    fn test_into_owned_keeps_value()
    {
        let name = String::from("snes9x");
        let owned = Arg::from(&name).into_owned();
        drop(name);
        assert_eq!(owned, Arg::Str(Cow::Owned("snes9x".to_string())));
    }
}
