// src/crypto/decrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

use super::{derive_key_iv, report_failure, Aes256CbcDec};
use crate::aliases::{CypherText, PlainText};
use crate::error::CipherError;

/// Decrypt raw ciphertext with the passphrase-derived key/IV and strip padding
///
/// A wrong passphrase almost always surfaces as [`CipherError::Padding`].
pub fn decrypt_to_vec(ciphertext: &CypherText, passphrase: &str) -> Result<PlainText, CipherError> {
    let (key, iv) = derive_key_iv(passphrase);
    let cipher = Aes256CbcDec::new_from_slices(key.expose_secret(), iv.expose_secret())?;
    let out = cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext.expose_secret())?;
    Ok(PlainText::new(out))
}

/// Decrypt Base64 ciphertext → UTF-8 string
pub fn try_decrypt_from_base64(
    ciphertext_b64: &str,
    passphrase: &str,
) -> Result<String, CipherError> {
    let ciphertext = CypherText::new(STANDARD.decode(ciphertext_b64)?);
    let plaintext = decrypt_to_vec(&ciphertext, passphrase)?;
    let text = std::str::from_utf8(plaintext.expose_secret())?;
    Ok(text.to_owned())
}

/// Decrypt Base64 ciphertext → UTF-8 string, `None` on any failure
///
/// Malformed Base64, a wrong passphrase and corrupted ciphertext are
/// indistinguishable to the caller.
pub fn decrypt_from_base64(ciphertext_b64: &str, passphrase: &str) -> Option<String> {
    try_decrypt_from_base64(ciphertext_b64, passphrase)
        .map_err(|err| report_failure("decrypt", &err))
        .ok()
}
