//! Tests for key derivation

use eth_keygen::account::validate_address;
use eth_keygen::crypto::keys::*;
use eth_keygen::crypto::mnemonic::*;
use secp256k1::constants::CURVE_ORDER;

const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[test]
fn test_ethereum_key_from_seed_prefix() {
    let seed = phrase_to_seed(ABANDON_ABOUT, "").unwrap();

    let key_pair = derive_ethereum_key_pair(&seed, &DerivationPath::ethereum_base(), DerivationMode::SeedPrefix).unwrap();

    assert_eq!(key_pair.private_key().to_bytes()[..], seed[..32]);

    let address = key_pair.address().to_string();
    assert!(address.starts_with("0x"));
    assert_eq!(address.len(), 42);
    assert!(validate_address(&address));
}

#[test]
fn test_ethereum_key_bip32_first_account() {
    let seed = phrase_to_seed(ABANDON_ABOUT, "").unwrap();
    let path: DerivationPath = "m/44'/60'/0'/0/0".parse().unwrap();

    let key_pair = derive_ethereum_key_pair(&seed, &path, DerivationMode::Bip32).unwrap();

    assert_eq!(key_pair.address().to_string(), "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
}

#[test]
fn test_seed_prefix_and_bip32_disagree() {
    let seed = phrase_to_seed(ABANDON_ABOUT, "").unwrap();
    let path = DerivationPath::ethereum_base();

    let prefix = derive_ethereum_key_pair(&seed, &path, DerivationMode::SeedPrefix).unwrap();
    let walked = derive_ethereum_key_pair(&seed, &path, DerivationMode::Bip32).unwrap();

    assert_ne!(prefix.private_key(), walked.private_key());
    assert_ne!(prefix.address(), walked.address());
}

#[test]
fn test_generated_keys_are_in_range() {
    for _ in 0..16 {
        let mnemonic = generate_mnemonic(&mut eth_keygen::crypto::OsEntropy, MnemonicStrength::Words12).unwrap();
        let seed = mnemonic_to_seed(&mnemonic, "");
        let key_pair = derive_ethereum_key_pair(&seed, &DerivationPath::ethereum_base(), DerivationMode::SeedPrefix).unwrap();

        let bytes = key_pair.private_key().to_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(hex::decode(key_pair.private_key().to_hex()).unwrap(), bytes.to_vec());
        assert!(bytes != [0u8; 32]);
        assert!(bytes < CURVE_ORDER);

        assert_eq!(key_pair.address().as_bytes().len(), 20);
    }
}
