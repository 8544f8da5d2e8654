//! Balance providers backed by chain JSON-RPC endpoints.
//!
//! - Ethereum: `eth_getBalance(address, "latest")`, hex quantity in wei
//! - Solana: `getBalance(address)`, `{ context, value }` in lamports

use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use walletgen_types::{Chain, U256};

use crate::config::BalanceConfig;
use crate::error::{RpcError, RpcResult};

/// Source of native-token balances for one chain.
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Chain the provider answers for.
    fn chain(&self) -> Chain;

    /// Raw balance of `address` in the chain's smallest unit.
    async fn balance(&self, address: &str) -> RpcResult<U256>;
}

fn build_client(url: &str, timeout: Duration) -> RpcResult<HttpClient> {
    HttpClientBuilder::default()
        .request_timeout(timeout)
        .build(url)
        .map_err(|e| RpcError::Client(format!("failed to create HTTP client for {}: {}", url, e)))
}

/// Ethereum balance lookups over JSON-RPC.
pub struct EthereumRpc {
    client: HttpClient,
}

impl EthereumRpc {
    /// Connect to `url` with a per-request timeout.
    pub fn new(url: &str, timeout: Duration) -> RpcResult<Self> {
        Ok(Self {
            client: build_client(url, timeout)?,
        })
    }
}

#[async_trait]
impl BalanceProvider for EthereumRpc {
    fn chain(&self) -> Chain {
        Chain::Ethereum
    }

    async fn balance(&self, address: &str) -> RpcResult<U256> {
        let quantity: String = self
            .client
            .request("eth_getBalance", rpc_params![address, "latest"])
            .await?;
        debug!(address, %quantity, "eth_getBalance");
        parse_quantity(&quantity)
    }
}

/// `getBalance` result; `context` is not needed.
#[derive(Debug, Deserialize)]
struct SolanaBalance {
    value: u64,
}

/// Solana balance lookups over JSON-RPC.
pub struct SolanaRpc {
    client: HttpClient,
}

impl SolanaRpc {
    /// Connect to `url` with a per-request timeout.
    pub fn new(url: &str, timeout: Duration) -> RpcResult<Self> {
        Ok(Self {
            client: build_client(url, timeout)?,
        })
    }
}

#[async_trait]
impl BalanceProvider for SolanaRpc {
    fn chain(&self) -> Chain {
        Chain::Solana
    }

    async fn balance(&self, address: &str) -> RpcResult<U256> {
        let response: SolanaBalance = self
            .client
            .request("getBalance", rpc_params![address])
            .await?;
        debug!(address, lamports = response.value, "getBalance");
        Ok(U256::from(response.value))
    }
}

/// Provider for `chain` using the configured endpoint and timeout.
pub fn provider_for(chain: Chain, config: &BalanceConfig) -> RpcResult<Box<dyn BalanceProvider>> {
    let url = config.endpoint(chain);
    let timeout = config.request_timeout();
    Ok(match chain {
        Chain::Ethereum => Box::new(EthereumRpc::new(url, timeout)?),
        Chain::Solana => Box::new(SolanaRpc::new(url, timeout)?),
    })
}

/// Parse a `0x`-prefixed hex quantity.
fn parse_quantity(quantity: &str) -> RpcResult<U256> {
    let digits = quantity
        .strip_prefix("0x")
        .filter(|d| !d.is_empty())
        .ok_or_else(|| RpcError::InvalidResponse(format!("not a hex quantity: '{}'", quantity)))?;

    U256::from_str_radix(digits, 16)
        .map_err(|e| RpcError::InvalidResponse(format!("bad quantity '{}': {}", quantity, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x0").unwrap(), U256::ZERO);
        assert_eq!(
            parse_quantity("0xde0b6b3a7640000").unwrap(),
            U256::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert!(matches!(
            parse_quantity("1234"),
            Err(RpcError::InvalidResponse(_))
        ));
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }

    #[test]
    fn test_provider_for_chain() {
        let config = BalanceConfig {
            ethereum_rpc: "http://127.0.0.1:8545".to_string(),
            solana_rpc: "http://127.0.0.1:8899".to_string(),
            ..Default::default()
        };
        for chain in Chain::ALL {
            let provider = provider_for(chain, &config).unwrap();
            assert_eq!(provider.chain(), chain);
        }
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = EthereumRpc::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(RpcError::Client(_))));
    }
}
