//! Client configuration
//!
//! User preferences for CLI commands, stored at `{home}/config/client.toml`.
//!
//! # Example client.toml
//!
//! ```toml
//! # Ethereum JSON-RPC endpoint used for balance lookups
//! ethereum-rpc = "https://ethereum-sepolia-rpc.publicnode.com"
//!
//! # Solana JSON-RPC endpoint used for balance lookups
//! solana-rpc = "https://api.devnet.solana.com"
//!
//! # Per-request timeout for balance lookups
//! request-timeout-ms = 5000
//!
//! # Word count for newly generated mnemonics (12|15|18|21|24)
//! default-word-count = 12
//!
//! # CLI output format (text|json)
//! output = "text"
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walletgen_crypto::DEFAULT_WORD_COUNT;
use walletgen_rpc::config::{
    BalanceConfig, DEFAULT_ETHEREUM_RPC, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_SOLANA_RPC,
};

/// Default client configuration filename.
pub const CLIENT_CONFIG_FILENAME: &str = "client.toml";

/// Client configuration for CLI commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientConfig {
    /// Ethereum JSON-RPC endpoint.
    #[serde(default = "default_ethereum_rpc")]
    pub ethereum_rpc: String,

    /// Solana JSON-RPC endpoint.
    #[serde(default = "default_solana_rpc")]
    pub solana_rpc: String,

    /// Balance lookup timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Word count for `mnemonic generate` when `--words` is not given.
    #[serde(default = "default_word_count")]
    pub default_word_count: usize,

    /// CLI output format (text|json).
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_ethereum_rpc() -> String {
    DEFAULT_ETHEREUM_RPC.to_string()
}

fn default_solana_rpc() -> String {
    DEFAULT_SOLANA_RPC.to_string()
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}

fn default_output() -> String {
    "text".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ethereum_rpc: default_ethereum_rpc(),
            solana_rpc: default_solana_rpc(),
            request_timeout_ms: default_request_timeout_ms(),
            default_word_count: default_word_count(),
            output: default_output(),
        }
    }
}

impl ClientConfig {
    /// Get the path to the client config file.
    pub fn config_path(home: &Path) -> PathBuf {
        home.join("config").join(CLIENT_CONFIG_FILENAME)
    }

    /// Load client configuration from file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = Self::config_path(home);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read client config: {}", config_path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse client config: {}", config_path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid client config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save client configuration to file.
    pub fn save(&self, home: &Path) -> Result<()> {
        let config_path = Self::config_path(home);

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize client config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write client config: {}", config_path.display()))?;

        Ok(())
    }

    /// Balance lookup settings.
    pub fn balance_config(&self) -> BalanceConfig {
        BalanceConfig {
            ethereum_rpc: self.ethereum_rpc.clone(),
            solana_rpc: self.solana_rpc.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.balance_config()
            .validate()
            .map_err(anyhow::Error::msg)?;

        if ![12, 15, 18, 21, 24].contains(&self.default_word_count) {
            bail!(
                "default-word-count must be 12, 15, 18, 21, or 24, got {}",
                self.default_word_count
            );
        }

        if !matches!(self.output.as_str(), "text" | "json") {
            bail!("output must be 'text' or 'json', got '{}'", self.output);
        }

        Ok(())
    }
}
