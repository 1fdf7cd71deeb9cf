//! Error types for the eth-keygen library

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions of a key generation run.
///
/// Every variant terminates the run. Failures to write individual lines of
/// the output file are not errors at this level; see [`crate::output::WriteReport`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Entropy error: {0}")]
    Entropy(String),

    #[error("Mnemonic error: {0}")]
    Mnemonic(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    #[error("Invalid derivation path: {0}")]
    DerivationPath(String),

    #[error("Failed to create file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for eth-keygen operations
pub type Result<T> = std::result::Result<T, Error>;
