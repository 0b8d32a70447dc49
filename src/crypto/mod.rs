// src/crypto/mod.rs
//! Pure cryptographic providers: no I/O, no shared state
//!
//! Every provider works on in-memory buffers and builds its cipher, hash
//! or RNG handle per call, so instances can be shared across threads.
mod factory;
mod random_iv;
mod sha;
mod symmetric;
mod text;

pub use factory::{Provider, ProviderFactory};
pub use random_iv::RandomIvSymmetricCipher;
pub use sha::{digest, generate_salt, DigestProvider};
pub use symmetric::{decrypt_with, encrypt_with, SymmetricCipher};
pub use text::TextCipher;

pub type Result<T> = std::result::Result<T, crate::error::CryptoError>;
