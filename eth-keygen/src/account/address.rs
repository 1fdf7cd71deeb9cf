//! Ethereum address derivation and EIP-55 formatting

use std::fmt;

use crate::crypto::keys::ethereum::{keccak256, PublicKey};

/// Length of an Ethereum address in bytes
pub const ADDRESS_LEN: usize = 20;

/// An Ethereum address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// The last 20 bytes of the Keccak-256 hash of the uncompressed public
    /// key coordinates
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let public_key = public_key.serialize_uncompressed();

        // Skip the first byte (0x04) and hash the rest
        let key_hash = keccak256(&public_key[1..]);

        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&key_hash[32 - ADDRESS_LEN..]);
        Self(address)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// `0x`-prefixed, EIP-55 checksum-cased hex
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(2 + 2 * ADDRESS_LEN);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

/// Validate an Ethereum address string.
///
/// All-lowercase and all-uppercase hex are accepted as-is; mixed case must
/// carry a correct EIP-55 checksum.
pub fn validate_address(address: &str) -> bool {
    let digits = match address.strip_prefix("0x") {
        Some(digits) => digits,
        None => return false,
    };

    if digits.len() != 2 * ADDRESS_LEN || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    let mut bytes = [0u8; ADDRESS_LEN];
    match hex::decode_to_slice(digits, &mut bytes) {
        Ok(()) => Address(bytes).to_checksum() == address,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Vectors from EIP-55
    const EIP55_VECTORS: [&str; 4] = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    fn parse(address: &str) -> Address {
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(address.trim_start_matches("0x").to_lowercase(), &mut bytes).unwrap();
        Address::from_bytes(bytes)
    }

    #[test]
    fn test_eip55_checksum_vectors() {
        for expected in EIP55_VECTORS {
            assert_eq!(parse(expected).to_checksum(), expected);
        }
    }

    #[test]
    fn test_checksum_with_leading_zero_bytes() {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[19] = 0xab;
        let address = Address::from_bytes(bytes).to_string();

        assert_eq!(address.len(), 42);
        assert!(address.starts_with("0x00000000"));
        assert_eq!(address.to_lowercase(), format!("0x{}ab", "0".repeat(38)));
    }

    #[test]
    fn test_validate_ethereum_address() {
        for valid in EIP55_VECTORS {
            assert!(validate_address(valid));
            assert!(validate_address(&valid.to_lowercase()));
        }

        assert!(!validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAe")); // Too short
        assert!(!validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed1")); // Too long
        assert!(!validate_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")); // Missing 0x
        assert!(!validate_address("0xZZZeb6053F3E94C9b9A09f33669435E7Ef1BeAed")); // Invalid hex
        assert!(!validate_address("0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")); // Bad checksum
    }
}
