//! walletgen balance lookup
//!
//! Informational balances for derived wallets, fetched from chain JSON-RPC
//! nodes. Lookups never fail the caller: any error degrades the affected
//! address to [`Balance::Unknown`](walletgen_types::Balance::Unknown).
//!
//! # Example
//!
//! ```ignore
//! use walletgen_rpc::{fetch_balances, provider_for, BalanceConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = BalanceConfig::default();
//! let provider = provider_for(Chain::Solana, &config)?;
//! let balances = fetch_balances(provider.as_ref(), &addresses, config.request_timeout(), &CancellationToken::new()).await;
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod provider;

pub use config::BalanceConfig;
pub use error::{RpcError, RpcResult};
pub use fetch::fetch_balances;
pub use provider::{provider_for, BalanceProvider, EthereumRpc, SolanaRpc};
