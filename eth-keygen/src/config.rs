//! Run configuration

use std::path::PathBuf;

use crate::crypto::keys::{DerivationMode, DerivationPath};
use crate::crypto::mnemonic::MnemonicStrength;

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "eth-key-details.txt";

/// Parameters of a key generation run.
///
/// The defaults reproduce the standard run: 128 bits of entropy, an empty
/// passphrase, the `m/44'/60'/0'/0` path recorded but not walked, and output
/// to `eth-key-details.txt` in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeygenConfig {
    /// Entropy size, and with it the mnemonic length
    pub strength: MnemonicStrength,
    /// BIP-39 passphrase mixed into the seed
    pub passphrase: String,
    /// Path written to the output file
    pub derivation_path: DerivationPath,
    pub derivation_mode: DerivationMode,
    pub output_path: PathBuf,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            strength: MnemonicStrength::Words12,
            passphrase: String::new(),
            derivation_path: DerivationPath::ethereum_base(),
            derivation_mode: DerivationMode::SeedPrefix,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
