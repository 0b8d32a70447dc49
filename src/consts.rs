// src/consts.rs
//! Shared constants: cipher sizes, defaults and config names

/// AES-256 key length in bytes
pub const AES_KEY_LEN: usize = 32;

/// AES block size, which is also the CBC IV length
pub const AES_IV_LEN: usize = 16;

/// Smallest decoded envelope: a full IV plus at least one ciphertext byte
pub const MIN_ENVELOPE_LEN: usize = AES_IV_LEN + 1;

/// SHA-256 output length in bytes
pub const SHA256_OUTPUT_LEN: usize = 32;

/// SHA-512 output length in bytes
pub const SHA512_OUTPUT_LEN: usize = 64;

/// Salt size used by the CLI and config when none is given
pub const DEFAULT_SALT_SIZE: usize = 32;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "shelf-crypto.toml";

/// Directory under the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "shelf-crypto";

// Environment overrides
pub const ENV_CONFIG_PATH: &str = "SHELF_CRYPTO_CONFIG";
pub const ENV_CIPHER_KEY: &str = "SHELF_CRYPTO_CIPHER_KEY";
pub const ENV_CIPHER_IV: &str = "SHELF_CRYPTO_CIPHER_IV";
pub const ENV_DIGEST_STRENGTH: &str = "SHELF_CRYPTO_DIGEST_STRENGTH";
pub const ENV_SALT_SIZE: &str = "SHELF_CRYPTO_SALT_SIZE";
