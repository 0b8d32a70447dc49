// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{DigestSettings, SaltSettings};
use crate::consts::{CONFIG_DIR_NAME, DEFAULT_CONFIG_FILE, DEFAULT_SALT_SIZE};
use crate::enums::DigestStrength;

pub fn default_salt_size() -> usize {
    DEFAULT_SALT_SIZE
}

pub fn default_digest() -> DigestSettings {
    DigestSettings {
        default_strength: DigestStrength::default(),
    }
}

pub fn default_salt() -> SaltSettings {
    SaltSettings {
        default_size: default_salt_size(),
    }
}

/// Config files tried in order when no explicit path is set
pub fn default_config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join(CONFIG_DIR_NAME).join("config.toml"));
    }
    candidates
}
