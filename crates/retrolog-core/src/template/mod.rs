//! # Templates
//!
//! Runtime printf-style templates.
//!
//! Emulator cores speak C: their messages arrive as a `printf` template
//! plus arguments. [`Template`] parses such a template once and renders it
//! against a slice of typed [`Arg`]s with the same output `printf` would
//! produce. Mismatches between conversions and arguments are reported as
//! [`LogError`]s.
//!
//! ## Supported conversions
//!
//! `d i u o x X c s f F e E g G p %`, with the flags `- + space # 0`, literal
//! or `*` width and precision, and the length modifiers
//! `hh h l ll q j z t L`.
//!
//! ## Differences from C
//!
//! - Widths and `%s` precisions count `char`s, not bytes, so `[%5s]` pads
//!   `"é"` with four spaces where glibc pads it with three.
//! - A width or precision above `i32::MAX` is a [`LogError::FieldTooLarge`]
//!   rather than a failed call with `errno` set.
//! - `%n`, `%a` and `%A` are unsupported.
//!
//! ## Example
//!
//! ```rust
//! use retrolog_core::Template;
//!
//! let template = Template::parse("%-6s|%5.2f|%#x").unwrap();
//! let line = template.render(&["core".into(), 1.23456.into(), 255u32.into()]).unwrap();
//! assert_eq!(line, "core  | 1.23|0xff");
//! ```

mod render;
pub mod spec;

use std::fmt;

use spec::{Conversion, ConversionSpec, Count};

use crate::error::{LogError, LogResult};
use crate::types::{Arg, ArgKind};

/// Piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment
{
    Literal(String),
    Conversion(ConversionSpec),
}

/// A parsed printf-style template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template
{
    source: String,
    segments: Vec<Segment>,
}

impl Template
{
    /// Parse a template
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The template ends inside a specifier (`"50%"`)
    /// - A specifier uses a conversion this engine does not support (`%n`)
    pub fn parse(source: &str) -> LogResult<Self>
    {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = 0;

        while let Some(found) = source[rest..].find('%') {
            let start = rest + found;
            literal.push_str(&source[rest..start]);
            let (spec, end) = ConversionSpec::parse(source, start)?;
            if spec.conversion == Conversion::Percent && end == start + 2 {
                literal.push('%');
            } else {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Conversion(spec));
            }
            rest = end;
        }
        literal.push_str(&source[rest..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text as given to [`Template::parse`]
    pub fn as_str(&self) -> &str
    {
        &self.source
    }

    /// Kinds of the arguments this template consumes, in order
    ///
    /// `*` widths and precisions appear as [`ArgKind::Int`] ahead of the
    /// value they apply to.
    ///
    /// ```rust
    /// use retrolog_core::{ArgKind, Template};
    ///
    /// let template = Template::parse("%s: %*d%%").unwrap();
    /// assert_eq!(template.argument_kinds(), vec![ArgKind::Str, ArgKind::Int, ArgKind::Int]);
    /// ```
    pub fn argument_kinds(&self) -> Vec<ArgKind>
    {
        self.conversions().flat_map(ConversionSpec::argument_kinds).collect()
    }

    /// Render the template against `args`
    ///
    /// Surplus arguments are ignored, as `printf` ignores them.
    ///
    /// ## Errors
    ///
    /// Returns an error if an argument is missing or cannot be rendered by
    /// the conversion that consumes it.
    pub fn render(&self, args: &[Arg<'_>]) -> LogResult<String>
    {
        let mut out = String::with_capacity(self.source.len());
        self.render_into(&mut out, args)?;
        Ok(out)
    }

    /// Render the template, appending to `out`
    ///
    /// On error `out` may hold a partially rendered line.
    ///
    /// ## Errors
    ///
    /// Same as [`Template::render`].
    pub fn render_into(&self, out: &mut String, args: &[Arg<'_>]) -> LogResult<()>
    {
        let mut cursor = ArgCursor { args, next: 0 };
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Conversion(spec) => render_conversion(out, spec, &mut cursor)?,
            }
        }
        Ok(())
    }

    fn conversions(&self) -> impl Iterator<Item = &ConversionSpec>
    {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Conversion(spec) => Some(spec),
            Segment::Literal(_) => None,
        })
    }
}

impl fmt::Display for Template
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.source)
    }
}

/// Parse and render in one step
///
/// ```rust
/// use retrolog_core::sprintf;
///
/// assert_eq!(sprintf("hello %s", &["world".into()]).unwrap(), "hello world");
/// ```
///
/// ## Errors
///
/// Any error from [`Template::parse`] or [`Template::render`].
pub fn sprintf(template: &str, args: &[Arg<'_>]) -> LogResult<String>
{
    Template::parse(template)?.render(args)
}

/// Walks the argument list, remembering positions for error reports
struct ArgCursor<'s, 'a>
{
    args: &'s [Arg<'a>],
    next: usize,
}

impl<'s, 'a> ArgCursor<'s, 'a>
{
    fn take(&mut self, conversion: char) -> LogResult<(usize, &'s Arg<'a>)>
    {
        let index = self.next;
        let arg = self.args.get(index).ok_or(LogError::MissingArgument { index, conversion })?;
        self.next += 1;
        Ok((index, arg))
    }

    fn take_count(&mut self, count: Option<Count>, conversion: char) -> LogResult<Option<i64>>
    {
        match count {
            None => Ok(None),
            Some(Count::Fixed(n)) => Ok(Some(i64::try_from(n).unwrap_or(i64::MAX))),
            Some(Count::FromArg) => {
                let (index, arg) = self.take(conversion)?;
                match arg {
                    Arg::Int(v) => Ok(Some(*v)),
                    Arg::Uint(v) => Ok(Some(i64::try_from(*v).unwrap_or(i64::MAX))),
                    other => Err(mismatch(index, conversion, other)),
                }
            }
        }
    }
}

fn mismatch(index: usize, conversion: char, found: &Arg<'_>) -> LogError
{
    LogError::ArgumentMismatch {
        index,
        conversion,
        found: found.kind(),
    }
}

#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn render_conversion(out: &mut String, spec: &ConversionSpec, cursor: &mut ArgCursor<'_, '_>) -> LogResult<()>
{
    let c = spec.conversion_char;
    let width = cursor.take_count(spec.width, c)?;
    let precision = cursor.take_count(spec.precision, c)?;
    let field = render::field(spec, width, precision).ok_or(LogError::FieldTooLarge { conversion: c })?;

    // The parser folds "%%" into literals, but a flagged "%-%" still lands here
    if spec.conversion == Conversion::Percent {
        out.push('%');
        return Ok(());
    }

    let (index, arg) = cursor.take(c)?;
    match spec.conversion {
        Conversion::Signed => {
            let value = match arg {
                Arg::Int(v) => *v,
                Arg::Uint(v) => *v as i64,
                Arg::Char(v) => i64::from(u32::from(*v)),
                Arg::Pointer(v) => *v as i64,
                other => return Err(mismatch(index, c, other)),
            };
            render::signed(out, field, spec.length, value);
        }
        Conversion::Unsigned | Conversion::Octal | Conversion::Hex { .. } => {
            let value = match arg {
                Arg::Int(v) => *v as u64,
                Arg::Uint(v) => *v,
                Arg::Char(v) => u64::from(u32::from(*v)),
                Arg::Pointer(v) => *v as u64,
                other => return Err(mismatch(index, c, other)),
            };
            render::unsigned(out, field, spec.length, spec.conversion, value);
        }
        Conversion::Float { style, upper } => {
            let value = match arg {
                Arg::Float(v) => *v,
                Arg::Int(v) => *v as f64,
                Arg::Uint(v) => *v as f64,
                other => return Err(mismatch(index, c, other)),
            };
            render::float(out, field, style, upper, value);
        }
        Conversion::Char => {
            let value = match arg {
                Arg::Char(v) => *v,
                Arg::Int(v) => code_point(*v as u64),
                Arg::Uint(v) => code_point(*v),
                other => return Err(mismatch(index, c, other)),
            };
            render::character(out, field, value);
        }
        Conversion::Str => match arg {
            Arg::Str(v) => render::string(out, field, v),
            Arg::Char(v) => render::string(out, field, v.encode_utf8(&mut [0u8; 4])),
            other => return Err(mismatch(index, c, other)),
        },
        Conversion::Pointer => {
            let value = match arg {
                Arg::Pointer(v) => *v,
                Arg::Uint(v) => usize::try_from(*v).unwrap_or(usize::MAX),
                Arg::Int(v) => *v as usize,
                other => return Err(mismatch(index, c, other)),
            };
            render::pointer(out, field, value);
        }
        Conversion::Percent => {}
    }
    Ok(())
}

/// Integer passed to `%c`: a Unicode scalar, or U+FFFD when it is not one
fn code_point(value: u64) -> char
{
    u32::try_from(value).ok().and_then(char::from_u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}
