// src/crypto/derive.rs
use crate::aliases::{DerivedIv16, DerivedKey32};
use crate::hashing::{md5_digest, sha256_digest};

/// Derive the AES key and CBC IV from a passphrase
///
/// Pure function of the passphrase's UTF-8 bytes.
pub fn derive_key_iv(passphrase: &str) -> (DerivedKey32, DerivedIv16) {
    let bytes = passphrase.as_bytes();
    (
        DerivedKey32::new(sha256_digest(bytes)),
        DerivedIv16::new(md5_digest(bytes)),
    )
}
