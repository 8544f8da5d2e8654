//! Wallet set management for walletgen
//!
//! - [`WalletSet`]: ordered wallets for one chain with a monotonic index counter
//! - [`Session`]: a mnemonic plus one wallet set and key visibility per chain
//! - [`BalanceBook`]: informational balances kept apart from wallet identity

#![deny(clippy::unwrap_used)]

pub mod balance_book;
pub mod error;
pub mod session;
pub mod set;

pub use balance_book::BalanceBook;
pub use error::{WalletSetError, WalletSetResult};
pub use session::Session;
pub use set::WalletSet;
