// src/bin/shelf_crypto.rs
//! Command-line front end over the provider factory
//!
//! Key material is read from the config file or `SHELF_CRYPTO_*` env vars.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shelf_crypto::{config, DigestProvider, DigestStrength, ProviderFactory, TextCipher};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shelf-crypto")]
#[command(version)]
#[command(about = "AES-CBC encryption, SHA-2 digests and random salts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// AES-CBC with the configured key and IV (base64 out)
    Encrypt {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Inverse of `encrypt`
    Decrypt {
        /// Base64 ciphertext
        ciphertext: String,
    },

    /// AES-CBC with a random IV (base64 envelope out)
    Seal {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Inverse of `seal`
    Open {
        /// Base64 envelope
        envelope: String,
    },

    /// Hex digest of the input
    Digest {
        /// sha256 or sha512; defaults to the configured strength
        #[arg(short, long)]
        strength: Option<DigestStrength>,

        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Base64 random salt
    Salt {
        /// Bytes of randomness; defaults to the configured size
        size: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt { text } => {
            println!("{}", factory()?.cipher().encrypt_text(&text.join(" ")));
        }
        Commands::Decrypt { ciphertext } => {
            let plaintext = factory()?
                .cipher()
                .decrypt_text(&ciphertext)
                .context("Failed to decrypt input")?;
            println!("{plaintext}");
        }
        Commands::Seal { text } => {
            println!("{}", factory()?.envelope_cipher().encrypt(&text.join(" ")));
        }
        Commands::Open { envelope } => {
            let plaintext = factory()?
                .envelope_cipher()
                .decrypt(&envelope)
                .context("Failed to open envelope")?;
            println!("{plaintext}");
        }
        Commands::Digest { strength, text } => {
            let strength = match strength {
                Some(strength) => strength,
                None => {
                    config::load()
                        .context("Failed to load config")?
                        .digest
                        .default_strength
                }
            };
            info!(%strength, "hashing input");
            println!("{}", DigestProvider::new(strength).digest_hex(&text.join(" ")));
        }
        Commands::Salt { size } => {
            let size = match size {
                Some(size) => size,
                None => {
                    config::load()
                        .context("Failed to load config")?
                        .salt
                        .default_size
                }
            };
            println!("{}", shelf_crypto::generate_salt(size));
        }
    }

    Ok(())
}

fn factory() -> Result<ProviderFactory> {
    ProviderFactory::from_env().context(
        "Failed to load cipher key/IV; set SHELF_CRYPTO_CIPHER_KEY and SHELF_CRYPTO_CIPHER_IV",
    )
}
