//! Error types for parsing walletgen values

use thiserror::Error;

/// Errors raised while parsing chains and derivation paths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Derivation path is malformed or out of range.
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    /// Chain name is not one of the supported chains.
    #[error("unknown chain: {0} (expected solana or ethereum)")]
    UnknownChain(String),
}
