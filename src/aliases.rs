// src/aliases.rs
//! Secret types for cipher key material
//!
//! Both hold their bytes inline and wipe them on drop. Clones are wiped
//! independently.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{AES_IV_LEN, AES_KEY_LEN};
use crate::error::CryptoError;

/// AES-256 key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherKey32([u8; AES_KEY_LEN]);

/// AES block-sized IV
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherIv16([u8; AES_IV_LEN]);

impl CipherKey32 {
    pub fn expose_secret(&self) -> &[u8; AES_KEY_LEN] {
        &self.0
    }
}

impl CipherIv16 {
    pub fn expose_secret(&self) -> &[u8; AES_IV_LEN] {
        &self.0
    }
}

/// Copy a caller-supplied slice into a [`CipherKey32`], checking its length
pub fn key_from_slice(key: &[u8]) -> Result<CipherKey32, CryptoError> {
    if key.len() != AES_KEY_LEN {
        return Err(CryptoError::InvalidKeyMaterial(format!(
            "key must be {} bytes, got {}",
            AES_KEY_LEN,
            key.len()
        )));
    }
    // Copy straight into the container so no stray array is left on the stack
    let mut secret = CipherKey32([0u8; AES_KEY_LEN]);
    secret.0.copy_from_slice(key);
    Ok(secret)
}

/// Copy a caller-supplied slice into a [`CipherIv16`], checking its length
pub fn iv_from_slice(iv: &[u8]) -> Result<CipherIv16, CryptoError> {
    if iv.len() != AES_IV_LEN {
        return Err(CryptoError::InvalidKeyMaterial(format!(
            "iv must be {} bytes, got {}",
            AES_IV_LEN,
            iv.len()
        )));
    }
    let mut secret = CipherIv16([0u8; AES_IV_LEN]);
    secret.0.copy_from_slice(iv);
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_clears_bytes() {
        let mut key = key_from_slice(&[0xAB; AES_KEY_LEN]).unwrap();
        key.zeroize();
        assert_eq!(key.expose_secret(), &[0u8; AES_KEY_LEN]);
    }

    #[test]
    fn clone_is_independent() {
        let key = key_from_slice(&[0x11; AES_KEY_LEN]).unwrap();
        let mut copy = key.clone();
        copy.zeroize();
        assert_eq!(key.expose_secret(), &[0x11; AES_KEY_LEN]);
    }

    #[test]
    fn length_errors_name_the_part_and_sizes() {
        let err = key_from_slice(&[0u8; 16]).err().unwrap();
        assert_eq!(
            err,
            CryptoError::InvalidKeyMaterial("key must be 32 bytes, got 16".into())
        );
        let err = iv_from_slice(&[]).err().unwrap();
        assert_eq!(
            err,
            CryptoError::InvalidKeyMaterial("iv must be 16 bytes, got 0".into())
        );
    }
}
