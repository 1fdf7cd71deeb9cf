//! Ethereum account addresses

pub mod address;

pub use address::*;
