//! Generate an Ethereum key from a fresh mnemonic and save its details

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eth_keygen::config::DEFAULT_OUTPUT_FILE;
use eth_keygen::crypto::entropy::OsEntropy;
use eth_keygen::crypto::keys::{DerivationMode, DerivationPath, ETHEREUM_BASE_PATH};
use eth_keygen::crypto::mnemonic::MnemonicStrength;
use eth_keygen::{KeygenConfig, TracingLogger};

#[derive(Parser)]
#[command(name = "eth-keygen")]
#[command(about = "Generate a BIP-39 mnemonic and write the derived Ethereum key details to a file")]
#[command(version)]
struct Cli {
    /// File to write the key details to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Entropy size in bits (128, 160, 192, 224 or 256)
    #[arg(short, long, default_value = "128", value_parser = parse_strength)]
    strength: MnemonicStrength,

    /// Derivation path recorded in the output file
    #[arg(short, long, default_value = ETHEREUM_BASE_PATH)]
    path: DerivationPath,

    /// Derive the key by walking the path with BIP-32 instead of taking the
    /// seed prefix. Produces a different key for the same mnemonic.
    #[arg(long)]
    bip32: bool,
}

fn parse_strength(value: &str) -> Result<MnemonicStrength, String> {
    let bits = value.parse::<u32>().map_err(|e| e.to_string())?;
    MnemonicStrength::from_bits(bits).map_err(|e| e.to_string())
}

impl From<Cli> for KeygenConfig {
    fn from(cli: Cli) -> Self {
        Self {
            strength: cli.strength,
            derivation_path: cli.path,
            derivation_mode: if cli.bip32 { DerivationMode::Bip32 } else { DerivationMode::SeedPrefix },
            output_path: cli.output,
            ..Self::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = KeygenConfig::from(Cli::parse());

    eth_keygen::run(&config, &mut OsEntropy, &TracingLogger)?;

    Ok(())
}
