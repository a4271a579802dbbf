// tests/hashing_tests.rs
use po_helper::hashing::*;

#[test]
fn test_sha256_base64_known_answers() {
    assert_eq!(
        to_sha256_base64("hello world"),
        "uU0nuZNNPgilLlLX2n2r+sSE7+N6U4DukIj3rOLvzek="
    );
    assert_eq!(
        to_sha256_base64(""),
        "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
    );
}

#[test]
fn test_sha256_salted_appends_salt() {
    assert_eq!(
        to_sha256_salted_base64("hello", "world"),
        "k2oYXKqiZrucvpgengXLeM1zKwsygOuURBK7b4+PB68="
    );
    assert_eq!(
        to_sha256_salted_base64("hello", "world"),
        to_sha256_base64("helloworld")
    );
    assert_eq!(to_sha256_salted_base64("abc", ""), to_sha256_base64("abc"));
}

#[test]
fn test_md5_base64_known_answers() {
    assert_eq!(to_md5_base64("hello world"), "XrY7u+Ae7tCTyyK7j1rNww==");
    assert_eq!(to_md5_base64(""), "1B2M2Y8AsgTpgAmY7PhCfg==");
}

#[test]
fn test_raw_digests_match_string_helpers() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    assert_eq!(STANDARD.encode(sha256_digest(b"abc")), to_sha256_base64("abc"));
    assert_eq!(STANDARD.encode(md5_digest(b"abc")), to_md5_base64("abc"));
}
