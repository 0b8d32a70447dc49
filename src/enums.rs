// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed selector sets the factory works with:
//! which provider family, and which digest strength.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{SHA256_OUTPUT_LEN, SHA512_OUTPUT_LEN};
use crate::error::CryptoError;

/// Provider families the factory can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// AES-256-CBC with the factory's key and IV
    Cipher,
    /// SHA-2 digests and salts
    Digest,
}

/// SHA-2 variant used by a digest provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestStrength {
    Sha256,
    #[default]
    Sha512,
}

impl DigestStrength {
    /// Digest length in bytes
    pub const fn output_len(self) -> usize {
        match self {
            DigestStrength::Sha256 => SHA256_OUTPUT_LEN,
            DigestStrength::Sha512 => SHA512_OUTPUT_LEN,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DigestStrength::Sha256 => "sha256",
            DigestStrength::Sha512 => "sha512",
        }
    }
}

impl ProviderKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Cipher => "cipher",
            ProviderKind::Digest => "digest",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DigestStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cipher" | "aes" => Ok(ProviderKind::Cipher),
            "digest" | "sha" => Ok(ProviderKind::Digest),
            _ => Err(CryptoError::UnsupportedKind(s.to_owned())),
        }
    }
}

impl FromStr for DigestStrength {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" | "256" => Ok(DigestStrength::Sha256),
            "sha512" | "sha-512" | "512" => Ok(DigestStrength::Sha512),
            _ => Err(CryptoError::UnsupportedKind(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_aliases_parse() {
        assert_eq!("AES".parse::<ProviderKind>().unwrap(), ProviderKind::Cipher);
        assert_eq!(" sha ".parse::<ProviderKind>().unwrap(), ProviderKind::Digest);
        assert!(matches!(
            "rsa".parse::<ProviderKind>(),
            Err(CryptoError::UnsupportedKind(s)) if s == "rsa"
        ));
    }

    #[test]
    fn strength_defaults_to_sha512() {
        assert_eq!(DigestStrength::default(), DigestStrength::Sha512);
        assert_eq!(DigestStrength::default().output_len(), 64);
        assert_eq!("SHA-256".parse::<DigestStrength>().unwrap().output_len(), 32);
    }
}
