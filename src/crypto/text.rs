// src/crypto/text.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::Result;
use crate::error::CryptoError;

/// String-in, string-out view over a cipher
///
/// Ciphertext always travels as standard (padded) base64.
pub trait TextCipher {
    fn encrypt_text(&self, plaintext: &str) -> String;

    fn decrypt_text(&self, encoded: &str) -> Result<String>;
}

pub(crate) fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| CryptoError::MalformedEnvelope(format!("not valid base64: {e}")))
}

pub(crate) fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decrypted bytes must be UTF-8 to round-trip as text
pub(crate) fn utf8_plaintext(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| CryptoError::InvalidCiphertext(format!("plaintext is not UTF-8: {e}")))
}
