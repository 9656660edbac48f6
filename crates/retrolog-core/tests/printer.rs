//! Tests for the level printer's observable output

use retrolog_core::{Arg, LevelPrinter, Severity};

fn line(level: i32, template: &str, args: &[Arg<'_>]) -> String
{
    let mut printer = LevelPrinter::new(Vec::new());
    printer.log(level, template, args);
    String::from_utf8(printer.into_inner()).unwrap()
}

#[test]
fn test_named_level_prefixes()
{
    assert_eq!(line(0, "m", &[]), "[DBG]: m");
    assert_eq!(line(1, "m", &[]), "[INF]: m");
    assert_eq!(line(2, "m", &[]), "[WRN]: m");
    assert_eq!(line(3, "m", &[]), "[ERR]: m");
}

#[test]
fn test_numeric_level_prefixes()
{
    assert_eq!(line(42, "x", &[]), "[042]: x");
    assert_eq!(line(7, "hello %s", &["world".into()]), "[007]: hello world");
    assert_eq!(line(-5, "n=%d", &[9.into()]), "[-5]: n=9");
    assert_eq!(line(-1, "", &[]), "[-1]: ");
    assert_eq!(line(4, "", &[]), "[004]: ");
    assert_eq!(line(1000, "", &[]), "[1000]: ");
    assert_eq!(line(12345, "z", &[]), "[12345]: z");
}

#[test]
fn test_newline_only_from_template()
{
    assert_eq!(line(1, "value=%d\n", &[10.into()]), "[INF]: value=10\n");

    let out = line(1, "no-newline", &[]);
    assert_eq!(out, "[INF]: no-newline");
    assert!(!out.ends_with('\n'));
}

#[test]
fn test_repeated_calls_are_identical()
{
    let mut printer = LevelPrinter::new(Vec::new());
    printer.log(Severity::WARN, "frame %u dropped\n", &[120u32.into()]);
    printer.log(Severity::WARN, "frame %u dropped\n", &[120u32.into()]);
    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(out, "[WRN]: frame 120 dropped\n[WRN]: frame 120 dropped\n");
}

#[test]
fn test_severity_constants_and_integers_agree()
{
    let mut by_const = LevelPrinter::new(Vec::new());
    let mut by_int = LevelPrinter::new(Vec::new());
    by_const.log(Severity::ERROR, "boom", &[]);
    by_int.log(3, "boom", &[]);
    assert_eq!(by_const.into_inner(), by_int.into_inner());
}

#[test]
fn test_tracing_level_is_accepted()
{
    let mut printer = LevelPrinter::new(Vec::new());
    printer.log(tracing::Level::INFO, "via tracing", &[]);
    assert_eq!(printer.into_inner(), b"[INF]: via tracing");
}

#[test]
fn test_try_log_success_matches_log()
{
    let mut printer = LevelPrinter::new(Vec::new());
    printer.try_log(2, "%s=%d\n", &["lives".into(), 3.into()]).unwrap();
    assert_eq!(printer.into_inner(), b"[WRN]: lives=3\n");
}

#[test]
fn test_huge_fields_never_abort()
{
    let out = line(1, "%.70000f", &[Arg::Float(1.0)]);
    assert_eq!(out.len(), "[INF]: ".len() + 70_002);

    assert_eq!(line(1, "%99999999999999999999d", &[1.into()]), "[INF]: %99999999999999999999d");
    assert_eq!(line(2, "[%*d]", &[i64::MAX.into(), 1.into()]), "[WRN]: [%*d]");
}
