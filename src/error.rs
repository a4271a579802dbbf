// src/error.rs
//! Public error types for the entire crate
//!
//! The sentinel API in [`crate::crypto`] never surfaces these; they exist for
//! the strict `try_*` variants, for diagnostics and for config loading.

use cbc::cipher::block_padding::UnpadError;
use cbc::cipher::InvalidLength;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Ciphertext is not valid Base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Wrong passphrase or corrupted ciphertext
    #[error("Decryption failed: bad block padding")]
    Padding,

    #[error("Decrypted bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Cipher rejected derived key or IV length")]
    KeyLength,
}

impl From<UnpadError> for CipherError {
    fn from(_: UnpadError) -> Self {
        CipherError::Padding
    }
}

impl From<InvalidLength> for CipherError {
    fn from(_: InvalidLength) -> Self {
        CipherError::KeyLength
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}
