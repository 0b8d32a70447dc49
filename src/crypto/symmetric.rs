// src/crypto/symmetric.rs
//! AES-256-CBC with an explicit key and IV
//!
//! The IV is fixed for the lifetime of a [`SymmetricCipher`], so encrypting
//! two related plaintexts with one instance leaks their common prefix.
//! Use [`super::RandomIvSymmetricCipher`] when that matters.

use std::fmt;

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use tracing::trace;

use super::text::{decode_base64, encode_base64, utf8_plaintext, TextCipher};
use super::Result;
use crate::aliases::{iv_from_slice, key_from_slice, CipherIv16, CipherKey32};
use crate::consts::{AES_IV_LEN, AES_KEY_LEN};
use crate::error::CryptoError;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Single-shot CBC/PKCS#7 encryption; the block cipher state lives only for this call
pub(crate) fn cbc_encrypt(
    plaintext: &[u8],
    key: &[u8; AES_KEY_LEN],
    iv: &[u8; AES_IV_LEN],
) -> Vec<u8> {
    Aes256CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

pub(crate) fn cbc_decrypt(
    ciphertext: &[u8],
    key: &[u8; AES_KEY_LEN],
    iv: &[u8; AES_IV_LEN],
) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % AES_IV_LEN != 0 {
        return Err(CryptoError::InvalidCiphertext(format!(
            "length {} is not a positive multiple of the {AES_IV_LEN}-byte block",
            ciphertext.len()
        )));
    }

    Aes256CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::InvalidCiphertext("bad padding".into()))
}

/// Encrypt `plaintext` with an explicit key and IV
pub fn encrypt_with(plaintext: &str, key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    Ok(SymmetricCipher::new(key, iv)?.encrypt(plaintext))
}

/// Inverse of [`encrypt_with`]
pub fn decrypt_with(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<String> {
    SymmetricCipher::new(key, iv)?.decrypt(ciphertext)
}

/// AES-256-CBC provider bound to one key and one IV
pub struct SymmetricCipher {
    key: CipherKey32,
    iv: CipherIv16,
}

impl SymmetricCipher {
    /// Fails with [`CryptoError::InvalidKeyMaterial`] unless `key` is 32 bytes and `iv` 16
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        Ok(Self::from_parts(key_from_slice(key)?, iv_from_slice(iv)?))
    }

    pub(crate) fn from_parts(key: CipherKey32, iv: CipherIv16) -> Self {
        Self { key, iv }
    }

    pub fn encrypt(&self, plaintext: &str) -> Vec<u8> {
        trace!(len = plaintext.len(), "aes-cbc encrypt");
        cbc_encrypt(
            plaintext.as_bytes(),
            self.key.expose_secret(),
            self.iv.expose_secret(),
        )
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<String> {
        trace!(len = ciphertext.len(), "aes-cbc decrypt");
        let plaintext = cbc_decrypt(
            ciphertext,
            self.key.expose_secret(),
            self.iv.expose_secret(),
        )?;
        utf8_plaintext(plaintext)
    }
}

impl TextCipher for SymmetricCipher {
    fn encrypt_text(&self, plaintext: &str) -> String {
        encode_base64(&self.encrypt(plaintext))
    }

    fn decrypt_text(&self, encoded: &str) -> Result<String> {
        self.decrypt(&decode_base64(encoded)?)
    }
}

impl fmt::Debug for SymmetricCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricCipher")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}
