// tests/config_load_tests.rs
//! Global config loading, kept in its own binary because `load()` caches
//! the first result for the whole process.

use std::io::Write;

use po_helper::consts::{CONFIG_PATH_ENV, QUIET_ENV};
use po_helper::text::constraint_length;

#[test]
fn test_load_reads_env_path_and_applies_quiet_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[diagnostics]\nlog_failures = true\n\n[text]\nellipsis = \"~\"").unwrap();

    std::env::set_var(CONFIG_PATH_ENV, file.path());
    std::env::set_var(QUIET_ENV, "1");

    let conf = po_helper::load_config();
    assert!(!conf.diagnostics.log_failures);
    assert_eq!(conf.text.ellipsis, "~");

    // configured ellipsis is used by the default length constraint
    assert_eq!(constraint_length("abcdefghij", 5), "abc~");

    // failures stay silent but still return the sentinel
    assert_eq!(po_helper::decrypt_from_base64("%%%", "p"), None);
}
