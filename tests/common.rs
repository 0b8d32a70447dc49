// tests/common.rs
//! Shared test utilities: logging setup and fixed key material

#![allow(dead_code)]

#[cfg(feature = "logging")]
use tracing_subscriber::EnvFilter;

/// Route this crate's `debug!`/`trace!` events to the test writer once per binary.
/// `RUST_LOG` replaces the default `shelf_crypto=debug` filter.
pub fn init_tracing() {
    #[cfg(feature = "logging")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shelf_crypto=debug"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init();
        });
    }
}

/// `[0x01, 0x02, ..., 0x20]`
pub fn sequential_key() -> [u8; 32] {
    std::array::from_fn(|i| i as u8 + 1)
}

/// `[0x01, 0x02, ..., 0x10]`
pub fn sequential_iv() -> [u8; 16] {
    std::array::from_fn(|i| i as u8 + 1)
}

pub const RAW_VALUE: &str = "StringToEncrypt";
