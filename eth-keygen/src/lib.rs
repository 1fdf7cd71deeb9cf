//! eth-keygen - Ethereum key generation from a BIP-39 mnemonic
//!
//! This library draws entropy, encodes it as a BIP-39 mnemonic, stretches the
//! mnemonic into a seed, builds a secp256k1 private key from the seed, derives
//! the EIP-55 checksummed Ethereum address, and writes all of it to a file.
//!
//! By default the private key is the first 32 bytes of the seed. The
//! derivation path written next to it is informational and is only walked
//! when [`crypto::keys::DerivationMode::Bip32`] is selected.

pub mod error;
pub mod logging;
pub mod config;
pub mod crypto;
pub mod account;
pub mod output;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use config::KeygenConfig;
pub use error::{Error, Result};
pub use logging::{Logger, TracingLogger};
pub use pipeline::{derive_key_details, run, KeygenOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
