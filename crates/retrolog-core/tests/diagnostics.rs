//! Tests for the diagnostics emitted alongside printed lines

use std::io;
use std::sync::{Arc, Mutex};

use retrolog_core::{retro_log, retro_logf, LevelPrinter, Severity};

/// Shared buffer standing in for the diagnostics sink
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured
{
    fn contents(&self) -> String
    {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>
    {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()>
    {
        Ok(())
    }
}

fn with_diagnostics(f: impl FnOnce()) -> String
{
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    sink.contents()
}

#[test]
fn test_mismatch_emits_warning()
{
    let mut printer = LevelPrinter::new(Vec::new());
    let diagnostics = with_diagnostics(|| printer.log(Severity::INFO, "%d", &["x".into()]));

    assert_eq!(printer.into_inner(), b"[INF]: %d");
    assert!(diagnostics.contains("WARN"));
    assert!(diagnostics.contains("Log template does not match its arguments"));
    assert!(diagnostics.contains("a string"));
}

#[test]
fn test_clean_line_emits_nothing()
{
    let mut printer = LevelPrinter::new(Vec::new());
    let diagnostics = with_diagnostics(|| printer.log(Severity::INFO, "%d", &[1.into()]));

    assert_eq!(printer.into_inner(), b"[INF]: 1");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_macros_render_into_a_printer()
{
    let owned = String::from("owned");
    let mut printer = LevelPrinter::new(Vec::new());
    retro_log!(printer => Severity::DEBUG, "{} {}\n", owned, 1);
    retro_log!(printer => 7, "plain\n");
    retro_logf!(printer => 1, "%s %s %d %u %.1f %c\n", "borrowed", &owned, -1i64, 2u16, 0.5f32, 'z');
    retro_logf!(printer => Severity::ERROR, "none\n");
    retro_logf!(printer => 2, "trailing %s\n", owned,);

    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(
        out,
        "[DBG]: owned 1\n[007]: plain\n[INF]: borrowed owned -1 2 0.5 z\n[ERR]: none\n[WRN]: trailing owned\n"
    );
}

#[test]
fn test_macro_mismatch_warns_like_log()
{
    let mut printer = LevelPrinter::new(Vec::new());
    let diagnostics = with_diagnostics(|| retro_logf!(printer => 3, "%f", "slow"));

    assert_eq!(printer.into_inner(), b"[ERR]: %f");
    assert!(diagnostics.contains("Log template does not match its arguments"));
}
