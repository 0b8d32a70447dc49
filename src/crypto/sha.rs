// src/crypto/sha.rs
//! SHA-2 digests and random salts
//!
//! Digests are returned as raw bytes; the text form is always lowercase hex.
//! Salts are always standard base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256, Sha512};
use tracing::trace;

use crate::enums::DigestStrength;

/// Hash the UTF-8 bytes of `text`
pub fn digest(text: &str, algorithm: DigestStrength) -> Vec<u8> {
    match algorithm {
        DigestStrength::Sha256 => Sha256::digest(text.as_bytes()).to_vec(),
        DigestStrength::Sha512 => Sha512::digest(text.as_bytes()).to_vec(),
    }
}

/// `size` bytes from the thread-local CSPRNG, base64-encoded
pub fn generate_salt(size: usize) -> String {
    let mut buffer = vec![0u8; size];
    rand::rng().fill_bytes(&mut buffer);
    trace!(size, "generated salt");
    STANDARD.encode(&buffer)
}

/// Digest provider pinned to one SHA-2 strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigestProvider {
    strength: DigestStrength,
}

impl DigestProvider {
    pub const fn new(strength: DigestStrength) -> Self {
        Self { strength }
    }

    pub const fn strength(&self) -> DigestStrength {
        self.strength
    }

    /// 32 for SHA-256, 64 for SHA-512
    pub const fn output_len(&self) -> usize {
        self.strength.output_len()
    }

    pub fn digest(&self, text: &str) -> Vec<u8> {
        digest(text, self.strength)
    }

    pub fn digest_hex(&self, text: &str) -> String {
        hex::encode(self.digest(text))
    }

    /// Hex digest of `salt` followed by `text`
    pub fn salted_digest_hex(&self, salt: &str, text: &str) -> String {
        let mut salted = String::with_capacity(salt.len() + text.len());
        salted.push_str(salt);
        salted.push_str(text);
        self.digest_hex(&salted)
    }

    pub fn generate_salt(&self, size: usize) -> String {
        generate_salt(size)
    }
}
