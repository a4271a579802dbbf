// src/lib.rs
//! po-helper: passphrase-derived string encryption and small string utilities
//!
//! Features:
//! - AES-256-CBC / PKCS#7 encryption keyed by SHA-256 + MD5 of a passphrase
//! - Base64 ciphertext, `None` on any failure
//! - SHA-256 / MD5 Base64 digests
//! - Trimming, HTML stripping and length-constraint helpers

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod hashing;
#[cfg(feature = "logging")]
pub mod logging;
pub mod text;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crypto::{
    decrypt_from_base64, derive_key_iv, encrypt_to_base64, try_decrypt_from_base64,
    try_encrypt_to_base64,
};
pub use error::{CipherError, ConfigError};
pub use hashing::{to_md5_base64, to_sha256_base64, to_sha256_salted_base64};

pub type Result<T> = std::result::Result<T, CipherError>;
