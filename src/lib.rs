// src/lib.rs
//! shelf-crypto: factory-selected cipher and digest providers
//!
//! Features:
//! - AES-256-CBC with an explicit key + IV
//! - AES-256-CBC with a random IV per message (base64 envelope)
//! - SHA-256 / SHA-512 digests (hex) and CSPRNG salts (base64)
//! - Key material from TOML config or environment, zeroized on drop

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{CipherIv16, CipherKey32};
pub use config::{load as load_config, Config};
pub use crypto::{
    decrypt_with, digest, encrypt_with, generate_salt, DigestProvider, Provider,
    ProviderFactory, RandomIvSymmetricCipher, SymmetricCipher, TextCipher,
};
pub use enums::{DigestStrength, ProviderKind};
pub use error::{ConfigError, CryptoError};
