// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Failures raised by the cipher, digest and factory layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    #[error("unsupported provider selector: {0:?}")]
    UnsupportedKind(String),
}

/// Failures raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing required setting `{0}`")]
    MissingSetting(&'static str),

    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
