// src/config/mod.rs
//! Configuration system for shelf-crypto
//!
//! The TOML file is `$SHELF_CRYPTO_CONFIG`, else `./shelf-crypto.toml`, else
//! `<config dir>/shelf-crypto/config.toml`; with none of them present every
//! setting starts from its default. `SHELF_CRYPTO_*` variables are applied on
//! top. Cipher key material has no default: it must come from the file or
//! the environment.

pub use app::{load, load_uncached, Config, DigestSettings, Keys, SaltSettings};

mod app;
mod defaults;
