//! Key derivation and management

pub mod ethereum;
mod derivation;

pub use derivation::*;
pub use ethereum::{derive_ethereum_key_pair, KeyPair, PrivateKey, PublicKey};
