use log::Log;
use ruler_base::logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
use std::fs;

fn record_args(logger: &dyn Log, level: log::Level, line: u32, message: &str) {
    logger.log(
        &log::RecordBuilder::new()
            .level(level)
            .target("test")
            .file(Some("measure.rs"))
            .line(Some(line))
            .args(format_args!("{}", message))
            .build(),
    );
}

#[test]
fn test_stdout_logger_accepts_records() {
    let logger = StdoutLogger;
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .build();
    assert!(logger.enabled(&metadata));

    record_args(&logger, log::Level::Info, 1, "frame skipped: no marker");
    logger.flush();
}

#[test]
fn test_file_logger_creates_directory() {
    let dir = std::env::temp_dir().join(format!("ruler-log-test-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir).expect("Failed to create FileLogger");

    assert!(dir.is_dir());
    assert_eq!(logger.dir(), dir);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_file_logger_writes_formatted_line() {
    let dir = std::env::temp_dir().join(format!("ruler-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir).expect("Failed to create FileLogger");
    record_args(&logger, log::Level::Warn, 42, "degenerate marker filtered");
    logger.flush();

    let entries: Vec<_> = fs::read_dir(&dir)
        .expect("Failed to read log directory")
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1, "Should have exactly one day file");

    let content = fs::read_to_string(entries[0].path()).unwrap();
    assert!(content.contains("[WARN]"));
    assert!(content.contains("thread:"));
    assert!(content.contains("measure.rs:42"));
    assert!(content.contains("degenerate marker filtered"));
    assert!(content.ends_with('\n'));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_init_stdout_logger_is_idempotent() {
    init_stdout_logger();
    init_stdout_logger();
    log::info!("logger installed");
}

#[test]
fn test_init_file_logger_invalid_dir_returns_error() {
    let result = init_file_logger("/proc/nonexistent/ruler");
    assert!(result.is_err());
}
