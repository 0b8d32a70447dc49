// src/crypto/factory.rs
//! Provider selection by kind and digest strength
//!
//! The default key and IV always come from the caller or from
//! [`crate::config`]. Nothing here carries built-in key material.

use std::fmt;

use tracing::debug;

use super::{DigestProvider, RandomIvSymmetricCipher, Result, SymmetricCipher};
use crate::aliases::{iv_from_slice, key_from_slice, CipherIv16, CipherKey32};
use crate::config::Config;
use crate::enums::{DigestStrength, ProviderKind};
use crate::error::ConfigError;

/// A ready-to-use provider returned by [`ProviderFactory::get_provider`]
#[derive(Debug)]
pub enum Provider {
    Cipher(SymmetricCipher),
    Digest(DigestProvider),
}

impl Provider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Cipher(_) => ProviderKind::Cipher,
            Provider::Digest(_) => ProviderKind::Digest,
        }
    }

    pub fn as_cipher(&self) -> Option<&SymmetricCipher> {
        match self {
            Provider::Cipher(cipher) => Some(cipher),
            Provider::Digest(_) => None,
        }
    }

    pub fn as_digest(&self) -> Option<&DigestProvider> {
        match self {
            Provider::Digest(digest) => Some(digest),
            Provider::Cipher(_) => None,
        }
    }

    pub fn into_cipher(self) -> Option<SymmetricCipher> {
        match self {
            Provider::Cipher(cipher) => Some(cipher),
            Provider::Digest(_) => None,
        }
    }

    pub fn into_digest(self) -> Option<DigestProvider> {
        match self {
            Provider::Digest(digest) => Some(digest),
            Provider::Cipher(_) => None,
        }
    }
}

/// Builds providers around a process-wide key and IV
pub struct ProviderFactory {
    key: CipherKey32,
    iv: CipherIv16,
    default_strength: DigestStrength,
}

impl ProviderFactory {
    /// Factory whose cipher providers use `key` (32 bytes) and `iv` (16 bytes)
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        Ok(Self {
            key: key_from_slice(key)?,
            iv: iv_from_slice(iv)?,
            default_strength: DigestStrength::default(),
        })
    }

    /// Strength used when a digest is requested without one
    pub fn with_default_strength(mut self, strength: DigestStrength) -> Self {
        self.default_strength = strength;
        self
    }

    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        let (key, iv) = config.cipher_material()?;
        Ok(Self {
            key,
            iv,
            default_strength: config.digest.default_strength,
        })
    }

    /// Factory built from the process-wide config (file + environment)
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::from_config(crate::config::load()?)
    }

    pub fn default_strength(&self) -> DigestStrength {
        self.default_strength
    }

    /// Cipher requests ignore `strength`; digest requests fall back to the default strength
    pub fn get_provider(&self, kind: ProviderKind, strength: Option<DigestStrength>) -> Provider {
        let provider = match kind {
            ProviderKind::Cipher => Provider::Cipher(self.cipher()),
            ProviderKind::Digest => {
                Provider::Digest(self.digest_provider(strength.unwrap_or(self.default_strength)))
            }
        };
        debug!(?kind, ?strength, "selected provider");
        provider
    }

    /// Text selectors, e.g. `("sha", Some("sha256"))` or `("aes", None)`
    pub fn get_provider_named(&self, kind: &str, strength: Option<&str>) -> Result<Provider> {
        let kind: ProviderKind = kind.parse()?;
        let strength = strength.map(str::parse::<DigestStrength>).transpose()?;
        Ok(self.get_provider(kind, strength))
    }

    /// Cipher over the factory's key and IV
    pub fn cipher(&self) -> SymmetricCipher {
        SymmetricCipher::from_parts(self.key.clone(), self.iv.clone())
    }

    pub fn digest_provider(&self, strength: DigestStrength) -> DigestProvider {
        DigestProvider::new(strength)
    }

    /// Cipher over caller-supplied material instead of the factory's
    pub fn cipher_with(&self, key: &[u8], iv: &[u8]) -> Result<SymmetricCipher> {
        SymmetricCipher::new(key, iv)
    }

    /// Random-IV cipher over the factory's key
    pub fn envelope_cipher(&self) -> RandomIvSymmetricCipher {
        RandomIvSymmetricCipher::from_key(self.key.clone())
    }

    pub fn random_iv_cipher(&self, key: &[u8]) -> Result<RandomIvSymmetricCipher> {
        RandomIvSymmetricCipher::new(key)
    }

    pub fn random_iv_cipher_from_base64(&self, key: &str) -> Result<RandomIvSymmetricCipher> {
        RandomIvSymmetricCipher::from_base64_key(key)
    }
}

impl fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderFactory")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .field("default_strength", &self.default_strength)
            .finish()
    }
}
