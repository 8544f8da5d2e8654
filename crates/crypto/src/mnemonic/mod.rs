//! Mnemonic-based wallet generation and recovery
//!
//! This module provides BIP-39 mnemonic phrase generation and hierarchical
//! deterministic (HD) key derivation for Solana and Ethereum wallets.
//!
//! # Derivation Path
//!
//! Every wallet is derived on a fully hardened BIP-44 style path:
//! ```text
//! m / 44' / coin_type' / index' / 0'
//! ```
//!
//! Where:
//! - `coin_type` = 501 for Solana (Ed25519, SLIP-0010)
//! - `coin_type` = 60 for Ethereum (secp256k1, BIP-32)
//! - `index` = wallet index within its chain's set (0, 1, 2, ...)
//!
//! # Example
//!
//! ```rust
//! use walletgen_crypto::mnemonic::{derive_wallet, Mnemonic};
//! use walletgen_types::Chain;
//!
//! // Generate a new mnemonic
//! let mnemonic = Mnemonic::generate().unwrap();
//! println!("Backup phrase: {}", mnemonic.phrase());
//!
//! // Derive the first Ethereum wallet
//! let wallet = derive_wallet(&mnemonic.to_seed(), Chain::Ethereum, 0).unwrap();
//! println!("Address: {}", wallet.address);
//! ```
//!
//! # Security
//!
//! - Mnemonic phrases should be stored securely offline
//! - The same mnemonic will always produce the same wallets

mod derive;
mod error;
mod generate;
mod seed;

pub use derive::{derive_ed25519_key, derive_secp256k1_key, derive_wallet};
pub use error::{MnemonicError, MnemonicResult};
pub use generate::{Mnemonic, DEFAULT_WORD_COUNT};
pub use seed::Seed;
