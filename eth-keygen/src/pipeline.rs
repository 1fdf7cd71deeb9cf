//! The key generation run: entropy, mnemonic, seed, key, address, file

use crate::config::KeygenConfig;
use crate::crypto::entropy::{generate_entropy, EntropySource};
use crate::crypto::keys::{derive_ethereum_key_pair, DerivationMode};
use crate::crypto::mnemonic::{entropy_to_mnemonic, mnemonic_to_seed};
use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::output::{write_details_to_file, KeyDetails, WriteReport};

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeygenOutcome {
    pub details: KeyDetails,
    pub report: WriteReport,
}

/// Log `error` as fatal under `context` and hand it back for propagation
fn fatal(logger: &dyn Logger, context: &str, error: Error) -> Error {
    logger.fatal(&format!("{}: {}", context, error));
    error
}

/// Turn entropy into the details a run persists.
///
/// This is a pure function of `entropy` and `config`.
pub fn derive_key_details(entropy: &[u8], config: &KeygenConfig, logger: &dyn Logger) -> Result<KeyDetails> {
    let mnemonic = entropy_to_mnemonic(entropy).map_err(|e| fatal(logger, "Failed to create mnemonic", e))?;

    let seed = mnemonic_to_seed(&mnemonic, &config.passphrase);

    if config.derivation_mode == DerivationMode::SeedPrefix {
        logger.info(&format!(
            "Private key is taken from the seed prefix; derivation path {} is recorded but not applied",
            config.derivation_path
        ));
    }

    let key_pair = derive_ethereum_key_pair(&seed, &config.derivation_path, config.derivation_mode)
        .map_err(|e| fatal(logger, "Failed to create master key", e))?;

    Ok(KeyDetails {
        mnemonic: mnemonic.to_string(),
        derivation_path: config.derivation_path.to_string(),
        private_key: key_pair.private_key().to_hex(),
        address: key_pair.address().to_string(),
    })
}

/// Generate a fresh key and write its details to `config.output_path`.
///
/// Returns an error for every fatal condition. Individual line-write
/// failures are logged and counted in the returned [`WriteReport`] only.
pub fn run(config: &KeygenConfig, source: &mut dyn EntropySource, logger: &dyn Logger) -> Result<KeygenOutcome> {
    let entropy = generate_entropy(source, config.strength)
        .map_err(|e| fatal(logger, "Failed to generate entropy", e))?;

    let details = derive_key_details(&entropy, config, logger)?;

    let report = write_details_to_file(&config.output_path, &details, logger)?;

    logger.info(&format!("Ethereum key details written to {}", config.output_path.display()));

    Ok(KeygenOutcome { details, report })
}
