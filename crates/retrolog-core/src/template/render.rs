//! Rendering of single conversions, following C `printf` rules.

use super::spec::{Conversion, ConversionSpec, Flags, FloatStyle, Length, MAX_COUNT};

/// Most digits Rust's formatter produces after the point
const FORMAT_PRECISION_LIMIT: usize = 65_535;

/// Resolved field layout for one conversion
///
/// Width and precision are already read from the argument list here, so the
/// renderers never see a `*`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field
{
    pub flags: Flags,
    pub width: usize,
    pub precision: Option<usize>,
}

/// Signed decimal (`%d`, `%i`)
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn signed(out: &mut String, field: Field, length: Option<Length>, value: i64)
{
    let value = match length {
        Some(Length::Char) => i64::from(value as i8),
        Some(Length::Short) => i64::from(value as i16),
        _ => value,
    };
    let sign = sign_for(value < 0, field.flags);
    let digits = with_precision(value.unsigned_abs().to_string(), value == 0, field.precision);
    pad_number(out, field, sign, "", &digits, field.precision.is_none());
}

/// Unsigned conversions (`%u`, `%o`, `%x`, `%X`)
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn unsigned(out: &mut String, field: Field, length: Option<Length>, conversion: Conversion, value: u64)
{
    let value = match length {
        Some(Length::Char) => u64::from(value as u8),
        Some(Length::Short) => u64::from(value as u16),
        _ => value,
    };
    let raw = match conversion {
        Conversion::Octal => format!("{value:o}"),
        Conversion::Hex { upper: false } => format!("{value:x}"),
        Conversion::Hex { upper: true } => format!("{value:X}"),
        _ => value.to_string(),
    };
    let mut digits = with_precision(raw, value == 0, field.precision);
    let mut prefix = "";
    if field.flags.alternate {
        match conversion {
            // Octal alternate form guarantees a leading zero
            Conversion::Octal if !digits.starts_with('0') => digits.insert(0, '0'),
            Conversion::Hex { upper } if value != 0 => prefix = if upper { "0X" } else { "0x" },
            _ => {}
        }
    }
    pad_number(out, field, "", prefix, &digits, field.precision.is_none());
}

/// Floating point conversions (`%f`, `%e`, `%g` and upper-case forms)
pub(crate) fn float(out: &mut String, field: Field, style: FloatStyle, upper: bool, value: f64)
{
    let sign = sign_for(value.is_sign_negative(), field.flags);
    if !value.is_finite() {
        let body = match (value.is_nan(), upper) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        pad_number(out, field, sign, "", body, false);
        return;
    }

    let magnitude = value.abs();
    let alternate = field.flags.alternate;
    let precision = field.precision.unwrap_or(6);
    let body = match style {
        FloatStyle::Fixed => fixed(magnitude, precision, alternate),
        FloatStyle::Exponent => exponent(magnitude, precision, upper, alternate),
        FloatStyle::General => general(magnitude, precision, upper, alternate),
    };
    pad_number(out, field, sign, "", &body, true);
}

/// `%c`
pub(crate) fn character(out: &mut String, field: Field, value: char)
{
    let mut buf = [0u8; 4];
    pad_text(out, field, value.encode_utf8(&mut buf));
}

/// `%s`; precision caps the number of characters taken
pub(crate) fn string(out: &mut String, field: Field, value: &str)
{
    match field.precision {
        Some(max) => match value.char_indices().nth(max) {
            Some((end, _)) => pad_text(out, field, &value[..end]),
            None => pad_text(out, field, value),
        },
        None => pad_text(out, field, value),
    }
}

/// `%p`; null prints as `(nil)` like glibc
pub(crate) fn pointer(out: &mut String, field: Field, value: usize)
{
    if value == 0 {
        pad_text(out, field, "(nil)");
    } else {
        pad_text(out, field, &format!("{value:#x}"));
    }
}

/// Field layout of a spec once `*` counts are known
///
/// `None` when a count exceeds [`MAX_COUNT`].
pub(crate) fn field(spec: &ConversionSpec, width: Option<i64>, precision: Option<i64>) -> Option<Field>
{
    let mut flags = spec.flags;
    let width = match width {
        Some(w) => {
            // A negative '*' width means left-justify
            flags.left |= w < 0;
            bounded(w.unsigned_abs())?
        }
        None => 0,
    };
    // A negative '*' precision is treated as absent
    let precision = match precision {
        Some(p) if p >= 0 => Some(bounded(p.unsigned_abs())?),
        _ => None,
    };
    Some(Field { flags, width, precision })
}

fn bounded(count: u64) -> Option<usize>
{
    usize::try_from(count).ok().filter(|&n| n <= MAX_COUNT)
}

fn sign_for(negative: bool, flags: Flags) -> &'static str
{
    if negative {
        "-"
    } else if flags.plus {
        "+"
    } else if flags.space {
        " "
    } else {
        ""
    }
}

fn with_precision(digits: String, is_zero: bool, precision: Option<usize>) -> String
{
    match precision {
        Some(0) if is_zero => String::new(),
        Some(p) if p > digits.len() => format!("{}{digits}", "0".repeat(p - digits.len())),
        _ => digits,
    }
}

fn pad_number(out: &mut String, field: Field, sign: &str, prefix: &str, body: &str, zero_fill: bool)
{
    let len = sign.len() + prefix.len() + body.chars().count();
    let fill = field.width.saturating_sub(len);
    if field.flags.left {
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(body);
        push_repeat(out, ' ', fill);
    } else if field.flags.zero && zero_fill {
        out.push_str(sign);
        out.push_str(prefix);
        push_repeat(out, '0', fill);
        out.push_str(body);
    } else {
        push_repeat(out, ' ', fill);
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(body);
    }
}

fn pad_text(out: &mut String, field: Field, body: &str)
{
    let fill = field.width.saturating_sub(body.chars().count());
    if field.flags.left {
        out.push_str(body);
        push_repeat(out, ' ', fill);
    } else {
        push_repeat(out, ' ', fill);
        out.push_str(body);
    }
}

fn push_repeat(out: &mut String, c: char, count: usize)
{
    out.extend(std::iter::repeat(c).take(count));
}

/// `magnitude` with `decimals` digits after the point
///
/// An `f64`'s exact decimal expansion ends long before the formatter's
/// limit, so digits past it are zeros.
fn decimal(magnitude: f64, decimals: usize) -> String
{
    let shown = decimals.min(FORMAT_PRECISION_LIMIT);
    let mut body = format!("{magnitude:.shown$}");
    push_repeat(&mut body, '0', decimals - shown);
    body
}

fn fixed(magnitude: f64, precision: usize, alternate: bool) -> String
{
    let mut body = decimal(magnitude, precision);
    if alternate && precision == 0 {
        body.push('.');
    }
    body
}

/// Split Rust's `{:e}` output into mantissa and decimal exponent
fn rust_exponent(magnitude: f64, precision: usize) -> (String, i32)
{
    let shown = precision.min(FORMAT_PRECISION_LIMIT);
    let rendered = format!("{magnitude:.shown$e}");
    let (mut mantissa, exp) = match rendered.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (rendered, 0),
    };
    push_repeat(&mut mantissa, '0', precision - shown);
    (mantissa, exp)
}

fn exponent(magnitude: f64, precision: usize, upper: bool, alternate: bool) -> String
{
    let (mut mantissa, exp) = rust_exponent(magnitude, precision);
    if alternate && precision == 0 {
        mantissa.push('.');
    }
    c_exponent(mantissa, exp, upper)
}

fn c_exponent(mut mantissa: String, exp: i32, upper: bool) -> String
{
    mantissa.push(if upper { 'E' } else { 'e' });
    mantissa.push(if exp < 0 { '-' } else { '+' });
    mantissa.push_str(&format!("{:02}", exp.unsigned_abs()));
    mantissa
}

fn general(magnitude: f64, precision: usize, upper: bool, alternate: bool) -> String
{
    let significant = precision.max(1);
    let (mantissa, exp) = rust_exponent(magnitude, significant - 1);
    let significant_i = i64::try_from(significant).unwrap_or(i64::MAX);
    let exp_i = i64::from(exp);

    if exp_i >= -4 && exp_i < significant_i {
        let decimals = usize::try_from(significant_i - 1 - exp_i).unwrap_or(0);
        let body = decimal(magnitude, decimals);
        if alternate {
            if body.contains('.') {
                body
            } else {
                body + "."
            }
        } else {
            trim_fraction(&body).to_string()
        }
    } else if alternate {
        let mantissa = if mantissa.contains('.') { mantissa } else { mantissa + "." };
        c_exponent(mantissa, exp, upper)
    } else {
        c_exponent(trim_fraction(&mantissa).to_string(), exp, upper)
    }
}

/// Drop trailing zeros after the decimal point, and the point if bare
fn trim_fraction(body: &str) -> &str
{
    if body.contains('.') {
        body.trim_end_matches('0').trim_end_matches('.')
    } else {
        body
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn plain() -> Field
    {
        Field {
            flags: Flags::default(),
            width: 0,
            precision: None,
        }
    }

    #[test]
    fn test_trim_fraction()
    {
        assert_eq!(trim_fraction("1.500000"), "1.5");
        assert_eq!(trim_fraction("2.000"), "2");
        assert_eq!(trim_fraction("100"), "100");
    }

    #[test]
    fn test_exponent_layout()
    {
        assert_eq!(exponent(1234.5, 6, false, false), "1.234500e+03");
        assert_eq!(exponent(0.000_12, 2, true, false), "1.20E-04");
        assert_eq!(exponent(0.0, 6, false, false), "0.000000e+00");
        assert_eq!(exponent(1e100, 0, false, true), "1.e+100");
    }

    #[test]
    fn test_general_switches_layout()
    {
        assert_eq!(general(0.0001, 6, false, false), "0.0001");
        assert_eq!(general(0.000_01, 6, false, false), "1e-05");
        assert_eq!(general(100_000.0, 6, false, false), "100000");
        assert_eq!(general(1_000_000.0, 6, false, false), "1e+06");
        assert_eq!(general(0.5, 0, false, false), "0.5");
        assert_eq!(general(2.0, 6, false, true), "2.00000");
    }

    #[test]
    fn test_signed_length_truncation()
    {
        let mut out = String::new();
        signed(&mut out, plain(), Some(Length::Char), 300);
        assert_eq!(out, "44");

        out.clear();
        signed(&mut out, plain(), Some(Length::Short), 70_000);
        assert_eq!(out, "4464");
    }

    #[test]
    fn test_negative_star_width_left_justifies()
    {
        let (spec, _) = ConversionSpec::parse("%*d", 0).unwrap();
        let field = field(&spec, Some(-4), None).unwrap();
        assert!(field.flags.left);
        assert_eq!(field.width, 4);
    }

    #[test]
    fn test_star_counts_are_bounded()
    {
        let (spec, _) = ConversionSpec::parse("%*.*d", 0).unwrap();
        assert!(field(&spec, Some(i64::MAX), None).is_none());
        assert!(field(&spec, Some(i64::MIN), None).is_none());
        assert!(field(&spec, None, Some(1 << 40)).is_none());
        assert_eq!(field(&spec, None, Some(i64::MIN)).unwrap().precision, None);
        assert_eq!(field(&spec, Some(-0x7fff_ffff), None).unwrap().width, MAX_COUNT);
    }

    #[test]
    fn test_decimal_past_formatter_limit()
    {
        let body = decimal(0.25, 70_000);
        assert_eq!(body.len(), 70_002);
        assert!(body.starts_with("0.25000"));
        assert!(body[4..].bytes().all(|b| b == b'0'));

        let (mantissa, exp) = rust_exponent(1.5, 70_000);
        assert_eq!(mantissa.len(), 70_002);
        assert!(mantissa.starts_with("1.5000"));
        assert_eq!(exp, 0);
    }
}
