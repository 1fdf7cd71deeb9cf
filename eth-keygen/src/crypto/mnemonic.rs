//! Mnemonic phrase generation and handling

use bip39::Mnemonic;

use crate::crypto::entropy::{generate_entropy, EntropySource};
use crate::error::{Error, Result};

/// Length of a BIP-39 seed in bytes
pub const SEED_LEN: usize = 64;

/// A BIP-39 seed
pub type Seed = [u8; SEED_LEN];

/// Supported mnemonic strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MnemonicStrength {
    /// 12 words (128 bits)
    #[default]
    Words12,
    /// 15 words (160 bits)
    Words15,
    /// 18 words (192 bits)
    Words18,
    /// 21 words (224 bits)
    Words21,
    /// 24 words (256 bits)
    Words24,
}

impl MnemonicStrength {
    /// Look up the strength for an entropy size in bits
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(Self::Words12),
            160 => Ok(Self::Words15),
            192 => Ok(Self::Words18),
            224 => Ok(Self::Words21),
            256 => Ok(Self::Words24),
            other => Err(Error::InvalidInput(format!(
                "Unsupported entropy strength {} bits, expected one of 128, 160, 192, 224, 256",
                other
            ))),
        }
    }

    /// Get entropy length in bits
    pub fn entropy_bits(&self) -> u32 {
        match self {
            Self::Words12 => 128,
            Self::Words15 => 160,
            Self::Words18 => 192,
            Self::Words21 => 224,
            Self::Words24 => 256,
        }
    }

    /// Get entropy length in bytes
    pub fn entropy_bytes(&self) -> usize {
        self.entropy_bits() as usize / 8
    }

    /// Number of words in a mnemonic of this strength
    pub fn word_count(&self) -> usize {
        self.entropy_bits() as usize / 32 * 3
    }
}

/// Encode raw entropy as an English mnemonic.
///
/// The entropy must be 16, 20, 24, 28 or 32 bytes long.
pub fn entropy_to_mnemonic(entropy: &[u8]) -> Result<Mnemonic> {
    Mnemonic::from_entropy(entropy).map_err(|e| Error::Mnemonic(e.to_string()))
}

/// Generate a new mnemonic phrase with the specified strength
pub fn generate_mnemonic(source: &mut dyn EntropySource, strength: MnemonicStrength) -> Result<Mnemonic> {
    let entropy = generate_entropy(source, strength)?;
    entropy_to_mnemonic(&entropy)
}

/// Validate a mnemonic phrase
pub fn validate_mnemonic(phrase: &str) -> Result<bool> {
    match Mnemonic::parse_normalized(phrase) {
        Ok(_) => Ok(true),
        Err(e) => Err(Error::Mnemonic(e.to_string())),
    }
}

/// Stretch a mnemonic and passphrase into a seed
pub fn mnemonic_to_seed(mnemonic: &Mnemonic, passphrase: &str) -> Seed {
    mnemonic.to_seed(passphrase)
}

/// Parse a phrase and stretch it into a seed
pub fn phrase_to_seed(phrase: &str, passphrase: &str) -> Result<Seed> {
    let mnemonic = Mnemonic::parse_normalized(phrase)
        .map_err(|e| Error::Mnemonic(e.to_string()))?;

    Ok(mnemonic_to_seed(&mnemonic, passphrase))
}
