//! Error types for wallet set operations

use thiserror::Error;
use walletgen_crypto::MnemonicError;
use walletgen_types::Chain;

/// Result type for wallet set operations
pub type WalletSetResult<T> = Result<T, WalletSetError>;

/// Errors raised by [`WalletSet`](crate::WalletSet) and [`Session`](crate::Session)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletSetError {
    /// Position does not name an entry of the set
    #[error("position {position} out of range (set has {len} wallets)")]
    IndexOutOfRange { position: usize, len: usize },

    /// Every non-hardened account index has been handed out
    #[error("no derivation indices left for {chain}")]
    Exhausted { chain: Chain },

    /// Derivation of the next wallet failed; the set is unchanged
    #[error(transparent)]
    Derivation(#[from] MnemonicError),
}
