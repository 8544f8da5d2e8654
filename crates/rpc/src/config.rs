//! Balance lookup configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use walletgen_types::Chain;

/// Default Ethereum endpoint (Sepolia testnet).
pub const DEFAULT_ETHEREUM_RPC: &str = "https://ethereum-sepolia-rpc.publicnode.com";

/// Default Solana endpoint (devnet).
pub const DEFAULT_SOLANA_RPC: &str = "https://api.devnet.solana.com";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Endpoints and timeout used for balance lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BalanceConfig {
    /// Ethereum JSON-RPC endpoint.
    pub ethereum_rpc: String,

    /// Solana JSON-RPC endpoint.
    pub solana_rpc: String,

    /// Per-request timeout in milliseconds (default: 5000).
    pub request_timeout_ms: u64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            ethereum_rpc: DEFAULT_ETHEREUM_RPC.to_string(),
            solana_rpc: DEFAULT_SOLANA_RPC.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl BalanceConfig {
    /// Endpoint for `chain`.
    pub fn endpoint(&self, chain: Chain) -> &str {
        match chain {
            Chain::Solana => &self.solana_rpc,
            Chain::Ethereum => &self.ethereum_rpc,
        }
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        for chain in Chain::ALL {
            let url = self.endpoint(chain);
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!(
                    "{} RPC endpoint must be an http(s) URL, got '{}'",
                    chain, url
                ));
            }
        }
        if self.request_timeout_ms == 0 {
            return Err("request-timeout-ms must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BalanceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.endpoint(Chain::Solana), DEFAULT_SOLANA_RPC);
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let config = BalanceConfig {
            solana_rpc: "ws://localhost:8900".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("Solana"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = BalanceConfig {
            request_timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BalanceConfig =
            serde_json::from_str(r#"{"ethereum-rpc": "http://127.0.0.1:8545"}"#).unwrap();
        assert_eq!(config.ethereum_rpc, "http://127.0.0.1:8545");
        assert_eq!(config.solana_rpc, DEFAULT_SOLANA_RPC);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }
}
