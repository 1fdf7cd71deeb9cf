//! Cryptographic primitives and operations
//!
//! This module provides entropy generation, mnemonic encoding, seed
//! stretching and key construction.

pub mod entropy;
pub mod mnemonic;
pub mod keys;

pub use entropy::*;
pub use mnemonic::*;
pub use keys::*;
