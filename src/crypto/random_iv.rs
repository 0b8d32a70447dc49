// src/crypto/random_iv.rs
//! AES-256-CBC with a fresh IV per message
//!
//! Envelope layout: `IV (16 bytes) || ciphertext`, carried as standard base64.

use std::fmt;

use rand::RngCore;
use tracing::trace;

use super::symmetric::{cbc_decrypt, cbc_encrypt};
use super::text::{decode_base64, encode_base64, utf8_plaintext, TextCipher};
use super::Result;
use crate::aliases::{key_from_slice, CipherKey32};
use crate::consts::{AES_IV_LEN, MIN_ENVELOPE_LEN};
use crate::error::CryptoError;

pub struct RandomIvSymmetricCipher {
    key: CipherKey32,
}

impl RandomIvSymmetricCipher {
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self::from_key(key_from_slice(key)?))
    }

    /// Build from a base64-encoded 32-byte key
    pub fn from_base64_key(key: &str) -> Result<Self> {
        let bytes = decode_base64(key).map_err(|_| {
            CryptoError::InvalidKeyMaterial("key is not valid base64".into())
        })?;
        Self::new(&bytes)
    }

    pub(crate) fn from_key(key: CipherKey32) -> Self {
        Self { key }
    }

    pub fn encrypt(&self, plaintext: &str) -> String {
        // Thread-local CSPRNG, reseeded from the OS
        let mut iv = [0u8; AES_IV_LEN];
        rand::rng().fill_bytes(&mut iv);

        let ciphertext = cbc_encrypt(plaintext.as_bytes(), self.key.expose_secret(), &iv);
        trace!(len = ciphertext.len(), "sealed envelope");

        let mut envelope = Vec::with_capacity(AES_IV_LEN + ciphertext.len());
        envelope.extend_from_slice(&iv);
        envelope.extend_from_slice(&ciphertext);
        encode_base64(&envelope)
    }

    pub fn decrypt(&self, envelope: &str) -> Result<String> {
        let bytes = decode_base64(envelope)?;
        if bytes.len() < MIN_ENVELOPE_LEN {
            return Err(CryptoError::MalformedEnvelope(format!(
                "decoded {} bytes, need at least {MIN_ENVELOPE_LEN}",
                bytes.len()
            )));
        }

        let (iv, ciphertext) = bytes
            .split_first_chunk::<AES_IV_LEN>()
            .ok_or_else(|| CryptoError::MalformedEnvelope("missing IV".into()))?;
        let plaintext = cbc_decrypt(ciphertext, self.key.expose_secret(), iv)?;
        utf8_plaintext(plaintext)
    }
}

impl TextCipher for RandomIvSymmetricCipher {
    fn encrypt_text(&self, plaintext: &str) -> String {
        self.encrypt(plaintext)
    }

    fn decrypt_text(&self, encoded: &str) -> Result<String> {
        self.decrypt(encoded)
    }
}

impl fmt::Debug for RandomIvSymmetricCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomIvSymmetricCipher")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
