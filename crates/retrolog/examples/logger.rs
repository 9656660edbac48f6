//! Example demonstrating how to print tagged lines and diagnostics
//!
//! This example shows:
//!
//! 1. printf-style templates with typed arguments
//! 2. Rust format strings through the macros
//! 3. Numeric levels outside the libretro range
//! 4. Tagged diagnostics through `tracing`
//!
//! Run with `RETROLOG_LOG_FORMAT=tagged` to see diagnostics in the same shape
//! as the printed lines.

use retrolog_core::{log_print, retro_log, retro_logf, Arg, Severity};
use retrolog_utils::{info, init_logging, warn};

fn main()
{
    let _guard = init_logging().expect("Failed to initialize logging");
    info!("Example started");

    // printf templates, as a libretro core would send them
    log_print(Severity::INFO, "Loaded %s (%u KiB)\n", &["smw.sfc".into(), 512u32.into()]);
    log_print(Severity::DEBUG, "PC=%04X SP=%02x\n", &[0x8000u16.into(), 0xfdu8.into()]);
    log_print(Severity::WARN, "Audio %.1f ms behind\n", &[Arg::Float(12.25)]);

    // The same through the macros
    retro_logf!(Severity::ERROR, "Failed to open %s\n", "save.srm");
    retro_log!(Severity::INFO, "{} frames in {:.2}s\n", 600, 10.0);

    // Levels outside 0-3 print numerically
    retro_logf!(42, "custom level\n");
    retro_logf!(-1, "negative level\n");

    // A mismatched template is printed verbatim and reported via tracing
    retro_logf!(Severity::WARN, "%d cores\n", "many");
    warn!("The previous line did not match its template");

    info!("Example finished");
}
