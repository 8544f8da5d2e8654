//! Error types for mnemonic operations

use thiserror::Error;
use walletgen_types::TypesError;

/// Result type for mnemonic operations
pub type MnemonicResult<T> = Result<T, MnemonicError>;

/// Errors that can occur during mnemonic and derivation operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// The OS entropy source failed
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// Invalid mnemonic phrase (unknown words, wrong length or bad checksum)
    #[error("invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    /// Requested word count is not a BIP-39 length
    #[error("invalid word count: {0} (must be 12, 15, 18, 21, or 24)")]
    InvalidWordCount(usize),

    /// Key derivation produced an unusable key
    #[error("key derivation failed: {0}")]
    DerivationFailed(String),

    /// Invalid derivation path
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),
}

impl From<bip39::Error> for MnemonicError {
    fn from(err: bip39::Error) -> Self {
        MnemonicError::InvalidMnemonic(err.to_string())
    }
}

impl From<TypesError> for MnemonicError {
    fn from(err: TypesError) -> Self {
        match err {
            TypesError::InvalidPath(msg) => MnemonicError::InvalidPath(msg),
            other => MnemonicError::InvalidPath(other.to_string()),
        }
    }
}
