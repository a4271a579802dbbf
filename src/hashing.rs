// src/hashing.rs
//! Plain (non-keyed) digest helpers
//!
//! The raw digests double as the key/IV derivation primitives in
//! [`crate::crypto`]. String helpers hash the UTF-8 bytes and return
//! standard Base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use md5::Md5;
use sha2::{Digest, Sha256};

use crate::consts::{BLOCK_LEN, KEY_LEN};

/// SHA-256 of raw bytes
pub fn sha256_digest(data: &[u8]) -> [u8; KEY_LEN] {
    Sha256::digest(data).into()
}

/// MD5 of raw bytes
pub fn md5_digest(data: &[u8]) -> [u8; BLOCK_LEN] {
    Md5::digest(data).into()
}

/// SHA-256 of a string, as Base64
pub fn to_sha256_base64(source: &str) -> String {
    STANDARD.encode(sha256_digest(source.as_bytes()))
}

/// SHA-256 of `source` with `salt` appended, as Base64
pub fn to_sha256_salted_base64(source: &str, salt: &str) -> String {
    let mut salted = String::with_capacity(source.len() + salt.len());
    salted.push_str(source);
    salted.push_str(salt);
    to_sha256_base64(&salted)
}

/// MD5 of a string, as Base64
///
/// Legacy fingerprinting only; MD5 is not collision resistant.
pub fn to_md5_base64(source: &str) -> String {
    STANDARD.encode(md5_digest(source.as_bytes()))
}
