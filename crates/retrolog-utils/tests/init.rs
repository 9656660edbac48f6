//! Tests for global subscriber initialization
//!
//! The global subscriber can be set once per process, so everything that
//! needs it lives in a single test.

use retrolog_utils::{LogFormat, LogLevel, LoggingConfig, LoggingError, init_logging_with_config};

#[test]
fn test_init_once_with_tagged_file()
{
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("nested");
    let config = LoggingConfig {
        format: LogFormat::Tagged,
        default_level: LogLevel::Info,
        file: Some(log_dir.join("retrolog.log")),
    };

    let guard = init_logging_with_config(&config).unwrap();
    tracing::warn!("written to file");
    tracing::debug!("filtered out");

    let second = init_logging_with_config(&LoggingConfig::default());
    assert!(matches!(second, Err(LoggingError::InitializationFailed(_))));

    // Flushes the non-blocking writer
    drop(guard);

    let entries = std::fs::read_dir(&log_dir)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(entries.len(), 1);
    let name = entries[0].file_name();
    assert!(name.to_string_lossy().starts_with("retrolog.log"));

    let contents = std::fs::read_to_string(entries[0].path()).unwrap();
    assert!(contents.contains("[WRN]: written to file\n"));
    assert!(!contents.contains("filtered out"));
}
