//! Loading a `PanicConfig` from disk and installing it process-wide.
//!
//! Only `test_installed_config_drives_raise` touches the global config, so the
//! tests in this binary can run in parallel.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::io::Write;
use std::panic::catch_unwind;

use railway_core::config::PanicConfig;
use railway_core::panic::{payload_message, raise};
use railway_core::Error;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_from_file_reads_both_flags() {
    let file = config_file("capture_backtrace = true\nlog_events = false\n");
    let config = PanicConfig::from_file(file.path()).unwrap();
    assert!(config.capture_backtrace());
    assert!(!config.log_events());
}

#[test]
fn test_from_file_empty_is_default() {
    let file = config_file("");
    assert_eq!(PanicConfig::from_file(file.path()), Ok(PanicConfig::DEFAULT));
}

#[test]
fn test_from_file_invalid_toml() {
    let file = config_file("capture_backtrace = \n");
    let result = PanicConfig::from_file(file.path());
    assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
}

#[test]
fn test_from_file_missing_names_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.toml");
    let error = PanicConfig::from_file(&path).unwrap_err();
    assert!(matches!(error, Error::ConfigReadFailed { .. }));
    assert!(error.to_string().contains("absent.toml"));
}

#[test]
fn test_installed_config_drives_raise() {
    assert_eq!(PanicConfig::current(), PanicConfig::DEFAULT);

    let file = config_file("capture_backtrace = true\nlog_events = false\n");
    PanicConfig::from_file(file.path()).unwrap().install();
    assert!(PanicConfig::current().capture_backtrace());

    let payload = catch_unwind(|| {
        raise("traced");
    })
    .unwrap_err();
    let message = payload_message(payload.as_ref()).unwrap().to_owned();

    PanicConfig::DEFAULT.install();

    assert!(message.starts_with("runtime panicked at 'traced', "));
    assert!(message.contains("\n\nstacktrace:\n"));
    assert_eq!(PanicConfig::current(), PanicConfig::DEFAULT);
}
