use msgr_logger::{LevelFilter, Logger};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn file_layer_creates_the_directory_and_writes_a_log_file() {
    let tmp_dir = tempdir().expect("temp dir");
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("msgr-test")
        .console(false)
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!("hello messenger");
    // Give the non-blocking worker a moment to flush.
    std::thread::sleep(Duration::from_millis(20));
    drop(logger);

    assert!(log_dir.exists(), "log directory should be created by init");

    let has_log = fs::read_dir(&log_dir)
        .expect("log dir should be readable")
        .flatten()
        .any(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("log"));
    assert!(has_log, "at least one log file should be created");
}
