//! Cryptographic error types

use thiserror::Error;

/// Errors raised when loading raw key material
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid secret key bytes (zero or not below the curve order)
    #[error("invalid secret key bytes")]
    InvalidSecretKey,
}
