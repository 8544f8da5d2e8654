//! RPC error types and result aliases.

use jsonrpsee::core::ClientError;
use thiserror::Error;

/// Errors raised while looking up a balance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// Transport or JSON-RPC level failure.
    #[error("RPC client error: {0}")]
    Client(String),

    /// No response within the configured timeout.
    #[error("RPC request timed out")]
    Timeout,

    /// The node answered with something that is not a balance.
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    /// The lookup was cancelled before it completed.
    #[error("RPC request cancelled")]
    Cancelled,
}

/// RPC result type alias.
pub type RpcResult<T> = Result<T, RpcError>;

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::RequestTimeout => RpcError::Timeout,
            ClientError::ParseError(e) => RpcError::InvalidResponse(e.to_string()),
            other => RpcError::Client(other.to_string()),
        }
    }
}
