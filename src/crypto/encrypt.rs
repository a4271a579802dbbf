// src/crypto/encrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};

use super::{derive_key_iv, report_failure, Aes256CbcEnc};
use crate::aliases::{CypherText, PlainText};
use crate::error::CipherError;

/// Encrypt raw bytes with the passphrase-derived key/IV (PKCS#7 padded)
pub fn encrypt_to_vec(plaintext: &PlainText, passphrase: &str) -> Result<CypherText, CipherError> {
    let (key, iv) = derive_key_iv(passphrase);
    let cipher = Aes256CbcEnc::new_from_slices(key.expose_secret(), iv.expose_secret())?;
    let out = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.expose_secret());
    Ok(CypherText::new(out))
}

/// Encrypt a UTF-8 string → Base64 ciphertext
pub fn try_encrypt_to_base64(plaintext: &str, passphrase: &str) -> Result<String, CipherError> {
    let plaintext = PlainText::new(plaintext.as_bytes().to_vec());
    let ciphertext = encrypt_to_vec(&plaintext, passphrase)?;
    Ok(STANDARD.encode(ciphertext.expose_secret()))
}

/// Encrypt a UTF-8 string → Base64 ciphertext, `None` on any failure
pub fn encrypt_to_base64(plaintext: &str, passphrase: &str) -> Option<String> {
    try_encrypt_to_base64(plaintext, passphrase)
        .map_err(|err| report_failure("encrypt", &err))
        .ok()
}
