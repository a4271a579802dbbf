// tests/config_tests.rs
use std::io::Write;

use po_helper::config::{from_path, from_toml_str, Config};
use po_helper::error::ConfigError;

#[test]
fn test_defaults() {
    let conf = Config::default();
    assert!(conf.diagnostics.log_failures);
    assert_eq!(conf.diagnostics.filter, "warn");
    assert_eq!(conf.text.ellipsis, "...");
}

#[test]
fn test_empty_toml_uses_defaults() {
    let conf = from_toml_str("").unwrap();
    assert!(conf.diagnostics.log_failures);
    assert_eq!(conf.text.ellipsis, "...");
}

#[test]
fn test_partial_toml_overrides_only_given_keys() {
    let conf = from_toml_str(
        r#"
        [diagnostics]
        log_failures = false
        "#,
    )
    .unwrap();
    assert!(!conf.diagnostics.log_failures);
    assert_eq!(conf.diagnostics.filter, "warn");
    assert_eq!(conf.text.ellipsis, "...");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let result = from_toml_str("[diagnostics\nlog_failures = maybe");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[diagnostics]\nfilter = \"po_helper=debug\"\n\n[text]\nellipsis = \"…\""
    )
    .unwrap();

    let conf = from_path(file.path()).unwrap();
    assert_eq!(conf.diagnostics.filter, "po_helper=debug");
    assert_eq!(conf.text.ellipsis, "…");
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = from_path(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
