//! Derivation paths and BIP-32 child key derivation

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use secp256k1::{PublicKey as Secp256k1PublicKey, Secp256k1, SecretKey};
use sha2::Sha512;

use crate::error::{Error, Result};

/// Offset added to an index to mark it hardened
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Base derivation path for Ethereum accounts, `m/44'/60'/0'/0`
pub const ETHEREUM_BASE_PATH: &str = "m/44'/60'/0'/0";

/// How the private key is obtained from the seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivationMode {
    /// Use the first 32 bytes of the seed as the key. The derivation path is
    /// recorded alongside the key but never walked, so the result does not
    /// match what path-based wallets derive for the same mnemonic.
    #[default]
    SeedPrefix,
    /// Walk the derivation path with BIP-32 from the seed's master key
    Bip32,
}

/// A parsed BIP-32 derivation path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath {
    components: Vec<u32>,
}

impl DerivationPath {
    /// The Ethereum base path, `m/44'/60'/0'/0`
    pub fn ethereum_base() -> Self {
        Self {
            components: vec![44 + HARDENED_OFFSET, 60 + HARDENED_OFFSET, HARDENED_OFFSET, 0],
        }
    }

    /// Child indices in order, hardened ones carrying [`HARDENED_OFFSET`]
    pub fn components(&self) -> &[u32] {
        &self.components
    }
}

impl Default for DerivationPath {
    fn default() -> Self {
        Self::ethereum_base()
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self> {
        if path == "m" {
            return Ok(Self { components: Vec::new() });
        }

        let rest = path
            .strip_prefix("m/")
            .ok_or_else(|| Error::DerivationPath(format!("{} does not start with m/", path)))?;

        let mut components = Vec::new();
        for component in rest.split('/') {
            let (digits, hardened) = match component.strip_suffix('\'').or_else(|| component.strip_suffix('h')) {
                Some(digits) => (digits, true),
                None => (component, false),
            };

            // Only canonical decimal: u32::from_str would also take "+1" and "01"
            let canonical = !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_digit())
                && (digits == "0" || !digits.starts_with('0'));

            let index = canonical
                .then(|| digits.parse::<u32>().ok())
                .flatten()
                .filter(|index| *index < HARDENED_OFFSET)
                .ok_or_else(|| Error::DerivationPath(format!("Invalid component {:?} in {}", component, path)))?;

            components.push(if hardened { index + HARDENED_OFFSET } else { index });
        }

        Ok(Self { components })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.components {
            if *index >= HARDENED_OFFSET {
                write!(f, "/{}'", index - HARDENED_OFFSET)?;
            } else {
                write!(f, "/{}", index)?;
            }
        }
        Ok(())
    }
}

/// Derive the private key at `path` from a seed
pub fn derive_bip32_key(seed: &[u8], path: &DerivationPath) -> Result<[u8; 32]> {
    let (mut secret_key, mut chain_code) = derive_master_key(seed)?;

    for index in path.components() {
        (secret_key, chain_code) = derive_child_key(secret_key, chain_code, *index)?;
    }

    Ok(secret_key)
}

/// Derive the master key from a seed
fn derive_master_key(seed: &[u8]) -> Result<([u8; 32], [u8; 32])> {
    let mut hmac = Hmac::<Sha512>::new_from_slice(b"Bitcoin seed")
        .map_err(|_| Error::KeyDerivation("HMAC error".to_string()))?;

    hmac.update(seed);
    let result = hmac.finalize().into_bytes();

    let mut secret_key = [0u8; 32];
    let mut chain_code = [0u8; 32];

    secret_key.copy_from_slice(&result[0..32]);
    chain_code.copy_from_slice(&result[32..64]);

    Ok((secret_key, chain_code))
}

/// Derive a child key from a parent key
fn derive_child_key(parent_key: [u8; 32], parent_chain_code: [u8; 32], index: u32) -> Result<([u8; 32], [u8; 32])> {
    let parent_secret_key = SecretKey::from_slice(&parent_key)
        .map_err(|e| Error::KeyDerivation(format!("Invalid parent key: {}", e)))?;

    let mut data = Vec::with_capacity(37);

    if index >= HARDENED_OFFSET {
        data.push(0);
        data.extend_from_slice(&parent_key);
    } else {
        let secp = Secp256k1::new();
        let parent_public_key = Secp256k1PublicKey::from_secret_key(&secp, &parent_secret_key);
        data.extend_from_slice(&parent_public_key.serialize());
    }

    data.extend_from_slice(&index.to_be_bytes());

    let mut hmac = Hmac::<Sha512>::new_from_slice(&parent_chain_code)
        .map_err(|_| Error::KeyDerivation("HMAC error".to_string()))?;

    hmac.update(&data);
    let result = hmac.finalize().into_bytes();

    let mut child_chain_code = [0u8; 32];
    child_chain_code.copy_from_slice(&result[32..64]);

    // child = IL + parent (mod n)
    let tweak = SecretKey::from_slice(&result[0..32])
        .map_err(|e| Error::KeyDerivation(format!("Invalid child key at index {}: {}", index, e)))?;

    let child_secret_key = tweak
        .add_tweak(&parent_secret_key.into())
        .map_err(|e| Error::KeyDerivation(format!("Key addition error at index {}: {}", index, e)))?;

    Ok((child_secret_key.secret_bytes(), child_chain_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ethereum_base_path() {
        let path: DerivationPath = ETHEREUM_BASE_PATH.parse().unwrap();
        assert_eq!(path, DerivationPath::ethereum_base());
        assert_eq!(path.components(), &[0x8000_002c, 0x8000_003c, 0x8000_0000, 0]);
        assert_eq!(path.to_string(), ETHEREUM_BASE_PATH);
    }

    #[test]
    fn test_default_path_is_ethereum_base() {
        assert_eq!(DerivationPath::default().to_string(), "m/44'/60'/0'/0");
    }

    #[test]
    fn test_parse_h_suffix_renders_as_apostrophe() {
        let path: DerivationPath = "m/44h/60h/0h/0/7".parse().unwrap();
        assert_eq!(path.to_string(), "m/44'/60'/0'/0/7");
    }

    #[test]
    fn test_parse_master_only() {
        let path: DerivationPath = "m".parse().unwrap();
        assert!(path.components().is_empty());
        assert_eq!(path.to_string(), "m");
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        for bad in ["", "44'/60'", "m/", "m//0", "m/abc", "m/-1", "m/2147483648", "m/0''", "n/0"] {
            assert!(
                matches!(bad.parse::<DerivationPath>(), Err(Error::DerivationPath(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_signs_and_whitespace() {
        for bad in ["m/+1", "m/44'/+60'", "m/+0h", "m/ 1", "m/1 ", "m/1/", "m/044'", "m/00"] {
            assert!(
                matches!(bad.parse::<DerivationPath>(), Err(Error::DerivationPath(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_bip32_master_key_vector() {
        // BIP-32 test vector 1
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let key = derive_bip32_key(&seed, &"m".parse().unwrap()).unwrap();
        assert_eq!(
            hex::encode(key),
            "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
        );
    }

    #[test]
    fn test_bip32_hardened_child_vector() {
        // BIP-32 test vector 1, chain m/0H
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let key = derive_bip32_key(&seed, &"m/0'".parse().unwrap()).unwrap();
        assert_eq!(
            hex::encode(key),
            "edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea"
        );
    }

    #[test]
    fn test_bip32_normal_child_vector() {
        // BIP-32 test vector 1, chain m/0H/1
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let key = derive_bip32_key(&seed, &"m/0'/1".parse().unwrap()).unwrap();
        assert_eq!(
            hex::encode(key),
            "3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368"
        );
    }
}
