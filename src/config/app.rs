// src/config/app.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use super::defaults::*;
use crate::aliases::{iv_from_slice, key_from_slice, CipherIv16, CipherKey32};
use crate::consts::{
    AES_IV_LEN, AES_KEY_LEN, ENV_CIPHER_IV, ENV_CIPHER_KEY, ENV_CONFIG_PATH, ENV_DIGEST_STRENGTH,
    ENV_SALT_SIZE,
};
use crate::enums::DigestStrength;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub keys: Keys,
    #[serde(default = "default_digest")]
    pub digest: DigestSettings,
    #[serde(default = "default_salt")]
    pub salt: SaltSettings,
}

/// Encoded cipher material (base64, or hex of the exact length)
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Keys {
    pub cipher_key: Option<String>,
    pub cipher_iv: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DigestSettings {
    #[serde(default)]
    pub default_strength: DigestStrength,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaltSettings {
    #[serde(default = "default_salt_size")]
    pub default_size: usize,
}

impl Default for DigestSettings {
    fn default() -> Self {
        default_digest()
    }
}

impl Default for SaltSettings {
    fn default() -> Self {
        default_salt()
    }
}

impl fmt::Debug for Keys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("Keys")
            .field("cipher_key", &redact(&self.cipher_key))
            .field("cipher_iv", &redact(&self.cipher_iv))
            .finish()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply `SHELF_CRYPTO_*` environment overrides
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::apply_env_overrides`] with a caller-provided lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_CIPHER_KEY) {
            self.keys.cipher_key = Some(key);
        }
        if let Some(iv) = lookup(ENV_CIPHER_IV) {
            self.keys.cipher_iv = Some(iv);
        }
        if let Some(strength) = lookup(ENV_DIGEST_STRENGTH) {
            self.digest.default_strength =
                strength.parse().map_err(|_| ConfigError::InvalidSetting {
                    name: ENV_DIGEST_STRENGTH,
                    reason: format!("unknown digest strength {strength:?}"),
                })?;
        }
        if let Some(size) = lookup(ENV_SALT_SIZE) {
            self.salt.default_size =
                size.trim().parse().map_err(|e| ConfigError::InvalidSetting {
                    name: ENV_SALT_SIZE,
                    reason: format!("{e}"),
                })?;
        }
        Ok(())
    }

    /// Decode the configured key and IV into secret containers
    pub fn cipher_material(&self) -> Result<(CipherKey32, CipherIv16), ConfigError> {
        let key_text = self
            .keys
            .cipher_key
            .as_deref()
            .ok_or(ConfigError::MissingSetting("keys.cipher_key"))?;
        let iv_text = self
            .keys
            .cipher_iv
            .as_deref()
            .ok_or(ConfigError::MissingSetting("keys.cipher_iv"))?;

        let key = key_from_slice(&decode_material("keys.cipher_key", key_text, AES_KEY_LEN)?)?;
        let iv = iv_from_slice(&decode_material("keys.cipher_iv", iv_text, AES_IV_LEN)?)?;
        Ok((key, iv))
    }
}

/// Hex when the text is exactly `2 * expected` hex digits, base64 otherwise
fn decode_material(
    name: &'static str,
    text: &str,
    expected: usize,
) -> Result<Vec<u8>, ConfigError> {
    let text = text.trim();
    let decoded = if text.len() == expected * 2 && text.bytes().all(|b| b.is_ascii_hexdigit()) {
        hex::decode(text).map_err(|e| e.to_string())
    } else {
        STANDARD.decode(text).map_err(|e| e.to_string())
    };
    decoded.map_err(|reason| ConfigError::InvalidSetting { name, reason })
}

/// Explicit path from the environment, else the first default candidate that exists
fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
        return Some(PathBuf::from(path));
    }
    default_config_candidates().into_iter().find(|p| p.exists())
}

/// Read config + env overrides without touching the process-wide cache
pub fn load_uncached() -> Result<Config, ConfigError> {
    let mut conf = match resolve_config_path() {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            Config::from_file(&path)?
        }
        None => {
            debug!("no config file found; using environment and defaults");
            Config::default()
        }
    };

    conf.apply_env_overrides()?;
    Ok(conf)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once per process: later calls return the cached value
pub fn load() -> Result<&'static Config, ConfigError> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }
    let conf = load_uncached()?;
    Ok(CONFIG.get_or_init(|| conf))
}
