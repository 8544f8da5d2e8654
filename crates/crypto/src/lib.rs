//! Cryptographic primitives for walletgen
//!
//! This crate provides:
//! - BIP-39 mnemonic generation, validation and seed expansion
//! - BIP-32 secp256k1 derivation for Ethereum wallets
//! - SLIP-0010 Ed25519 derivation for Solana wallets
//! - Address and private key encodings for both chains
//! - Zero-on-drop containers for secret material

#![deny(clippy::unwrap_used)]

pub mod ed25519;
pub mod error;
pub mod mnemonic;
pub mod secp256k1;
pub mod secure;

// Ed25519 exports (Solana)
pub use ed25519::{Ed25519KeyPair, Ed25519PublicKey, Ed25519SecretKey};

// Secp256k1 exports (Ethereum)
pub use secp256k1::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1SecretKey};

// Error exports
pub use error::CryptoError;

// Secure memory exports
pub use secure::{SecretArray, SecretString};

// Mnemonic exports
pub use mnemonic::derive_wallet as derive;
pub use mnemonic::{
    derive_ed25519_key, derive_secp256k1_key, derive_wallet, Mnemonic, MnemonicError,
    MnemonicResult, Seed, DEFAULT_WORD_COUNT,
};
