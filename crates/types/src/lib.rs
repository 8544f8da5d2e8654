//! Core types for walletgen.
//!
//! This crate provides the data model shared by the derivation, wallet-set
//! and balance crates: supported chains, BIP-44 derivation paths, derived
//! wallets with their masked private keys, and informational balances.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod balance;
pub mod chain;
pub mod error;
pub mod path;
pub mod wallet;

pub use alloy_primitives::U256;
pub use balance::{format_units, Balance};
pub use chain::{Chain, Curve};
pub use error::TypesError;
pub use path::{ChildNumber, DerivationPath, HARDENED_OFFSET};
pub use wallet::{KeyVisibility, PrivateKey, Wallet, MASKED_PRIVATE_KEY};
