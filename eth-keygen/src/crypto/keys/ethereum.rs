//! Ethereum key construction

use secp256k1::{PublicKey as Secp256k1PublicKey, Secp256k1, SecretKey};

use crate::account::address::Address;
use crate::error::{Error, Result};
use super::derivation::{derive_bip32_key, DerivationMode, DerivationPath};

/// Length of a secp256k1 private key in bytes
pub const PRIVATE_KEY_LEN: usize = 32;

/// A secp256k1 private key, guaranteed to lie in `[1, n-1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey {
    inner: SecretKey,
}

impl PrivateKey {
    /// Interpret 32 big-endian bytes as a private key
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(Error::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_LEN,
                bytes.len()
            )));
        }

        let inner = SecretKey::from_slice(bytes)
            .map_err(|e| Error::InvalidPrivateKey(format!("scalar out of range: {}", e)))?;

        Ok(Self { inner })
    }

    /// Take the private key from the first 32 bytes of a seed
    pub fn from_seed_prefix(seed: &[u8]) -> Result<Self> {
        if seed.len() < PRIVATE_KEY_LEN {
            return Err(Error::InvalidPrivateKey(format!(
                "seed holds {} bytes, need at least {}",
                seed.len(),
                PRIVATE_KEY_LEN
            )));
        }

        Self::from_bytes(&seed[..PRIVATE_KEY_LEN])
    }

    /// Get the raw private key bytes
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.inner.secret_bytes()
    }

    /// Lowercase hex without a `0x` prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::new();
        PublicKey {
            inner: Secp256k1PublicKey::from_secret_key(&secp, &self.inner),
        }
    }
}

/// A secp256k1 public key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    inner: Secp256k1PublicKey,
}

impl PublicKey {
    /// SEC1 uncompressed encoding, `0x04 || X || Y`
    pub fn serialize_uncompressed(&self) -> [u8; 65] {
        self.inner.serialize_uncompressed()
    }

    pub fn address(&self) -> Address {
        Address::from_public_key(self)
    }
}

/// An Ethereum key pair
#[derive(Debug, Clone, Copy)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    pub fn new(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self { private_key, public_key }
    }

    /// Get the private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn address(&self) -> Address {
        self.public_key.address()
    }
}

/// Derive an Ethereum key pair from a seed.
///
/// With [`DerivationMode::SeedPrefix`] the path is ignored and the key is the
/// seed's first 32 bytes. With [`DerivationMode::Bip32`] the path is walked
/// from the seed's master key.
pub fn derive_ethereum_key_pair(seed: &[u8], path: &DerivationPath, mode: DerivationMode) -> Result<KeyPair> {
    let private_key = match mode {
        DerivationMode::SeedPrefix => PrivateKey::from_seed_prefix(seed)?,
        DerivationMode::Bip32 => {
            let bytes = derive_bip32_key(seed, path)?;
            PrivateKey::from_bytes(&bytes)?
        }
    };

    Ok(KeyPair::new(private_key))
}

/// Calculate the Keccak-256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
