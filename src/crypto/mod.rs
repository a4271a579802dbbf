// src/crypto/mod.rs
//! Passphrase-derived AES-256-CBC string encryption
//!
//! Key and IV are both derived from the passphrase alone:
//! `key = SHA-256(passphrase)`, `iv = MD5(passphrase)`. There is no salt and
//! no random IV, so the same plaintext and passphrase always produce the same
//! ciphertext. This matches ciphertext written by earlier versions of the
//! utility and must not change without a migration.
//!
//! Two API layers:
//! - `try_*` functions return [`CipherError`](crate::error::CipherError)
//! - `encrypt_to_base64` / `decrypt_from_base64` collapse every failure into `None`
mod decrypt;
mod derive;
mod encrypt;

pub use decrypt::{decrypt_from_base64, decrypt_to_vec, try_decrypt_from_base64};
pub use derive::derive_key_iv;
pub use encrypt::{encrypt_to_base64, encrypt_to_vec, try_encrypt_to_base64};

pub(crate) type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
pub(crate) type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Log the cause of a swallowed failure, never the inputs
#[allow(unused_variables)]
pub(crate) fn report_failure(operation: &'static str, err: &crate::error::CipherError) {
    #[cfg(feature = "logging")]
    {
        if crate::config::load().diagnostics.log_failures {
            tracing::warn!(operation, error = %err, "cipher operation failed");
        }
    }
}
