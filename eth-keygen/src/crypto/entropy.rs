//! Entropy generation

use rand::{rngs::OsRng, RngCore};

use crate::crypto::mnemonic::MnemonicStrength;
use crate::error::{Error, Result};

/// A source of random bytes for mnemonic generation
pub trait EntropySource {
    /// Fill `dest` completely or fail
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// The operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::Entropy(format!("Secure random source unavailable: {}", e)))
    }
}

/// Predetermined entropy, for reproducible runs and tests
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    bytes: Vec<u8>,
}

impl FixedEntropy {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        if dest.len() != self.bytes.len() {
            return Err(Error::Entropy(format!(
                "Fixed entropy holds {} bytes but {} were requested",
                self.bytes.len(),
                dest.len()
            )));
        }
        dest.copy_from_slice(&self.bytes);
        Ok(())
    }
}

/// Draw entropy for a mnemonic of the given strength
pub fn generate_entropy(source: &mut dyn EntropySource, strength: MnemonicStrength) -> Result<Vec<u8>> {
    let mut entropy = vec![0u8; strength.entropy_bytes()];
    source.fill(&mut entropy)?;
    Ok(entropy)
}
