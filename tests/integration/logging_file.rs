//! Integration tests for logging to a file.
//!
//! Only one global subscriber can exist per process, so every check that
//! needs an installed subscriber lives in a single test.

use hashembed::logging::{init_logging, LoggingConfig};
use hashembed::ConfigLoadError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_logging_with_env_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs").join("nested").join("hashembed.log");

    let config = LoggingConfig {
        level: "warn".to_string(),
        format: "text".to_string(),
        output: "file".to_string(),
        file: log_path.clone(),
        ..Default::default()
    };

    // Environment wins over the config: info level, JSON lines
    std::env::set_var("HASHEMBED_LOG", "info");
    std::env::set_var("HASHEMBED_LOG_FORMAT", "json");
    let result = init_logging(Some(&config));
    std::env::remove_var("HASHEMBED_LOG");
    std::env::remove_var("HASHEMBED_LOG_FORMAT");
    result.unwrap();

    tracing::info!(asset = "testdata/test.css", "file logging check");

    assert!(
        log_path.exists(),
        "log file should be created at {}",
        log_path.display()
    );
    let content = fs::read_to_string(&log_path).unwrap();
    let line = content
        .lines()
        .find(|line| line.contains("file logging check"))
        .unwrap_or_else(|| panic!("info event should be logged; got: {}", content));

    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["asset"], "testdata/test.css");
    let timestamp = event["timestamp"].as_str().unwrap();
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "timestamp should be RFC 3339: {}",
        timestamp
    );

    let second = init_logging(Some(&config));
    assert!(matches!(second, Err(ConfigLoadError::Logging(_))));
}
