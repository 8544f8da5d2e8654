//! Wallet CLI for walletgen
//!
//! - `mnemonic generate|validate`: create or check a BIP-39 phrase
//! - `derive`: print wallets for a chain without starting a session
//! - `balance`: look up balances for arbitrary addresses
//! - `shell`: interactive session with per-chain wallet sets
//!
//! Phrases are read from `--mnemonic-file`, then `WALLETGEN_MNEMONIC`, then
//! stdin. Private keys are masked unless explicitly requested.

pub mod balance;
pub mod common;
pub mod derive;
pub mod mnemonic;
pub mod shell;

use crate::client_config::ClientConfig;
use anyhow::Result;
use clap::Subcommand;
use common::OutputFormat;
use std::path::{Path, PathBuf};
use walletgen_types::Chain;

/// Mnemonic subcommands
#[derive(Subcommand)]
pub enum MnemonicCommand {
    /// Generate a new mnemonic phrase
    ///
    /// IMPORTANT: Write the phrase down and store it securely. It is the
    /// only way to recover the wallets derived from it.
    Generate {
        /// Number of words (12, 15, 18, 21 or 24; default from client.toml)
        #[arg(long)]
        words: Option<usize>,

        /// Output format (text|json)
        #[arg(long)]
        output: Option<String>,
    },

    /// Check that a phrase is a valid BIP-39 mnemonic
    Validate {
        /// Read mnemonic from file instead of env/stdin
        #[arg(long)]
        mnemonic_file: Option<PathBuf>,
    },
}

/// Top-level wallet commands
#[derive(Subcommand)]
pub enum WalletCommand {
    /// Create or check mnemonic phrases
    Mnemonic {
        #[command(subcommand)]
        command: MnemonicCommand,
    },

    /// Derive wallets for a chain from a mnemonic
    Derive {
        /// Chain to derive for (solana|ethereum)
        #[arg(long)]
        chain: Chain,

        /// First wallet index (default: 0)
        #[arg(long, default_value = "0")]
        index: u32,

        /// Number of consecutive wallets (default: 1)
        #[arg(long, default_value = "1")]
        count: u32,

        /// Read mnemonic from file instead of env/stdin
        #[arg(long)]
        mnemonic_file: Option<PathBuf>,

        /// Print private keys in clear
        #[arg(long, default_value = "false")]
        show_keys: bool,

        /// Output format (text|json)
        #[arg(long)]
        output: Option<String>,
    },

    /// Look up native balances for addresses
    Balance {
        /// Chain the addresses belong to (solana|ethereum)
        #[arg(long)]
        chain: Chain,

        /// Addresses to look up
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Output format (text|json)
        #[arg(long)]
        output: Option<String>,
    },

    /// Start an interactive wallet session
    ///
    /// Uses the mnemonic from --mnemonic-file or WALLETGEN_MNEMONIC, or
    /// generates a new one.
    Shell {
        /// Read mnemonic from file
        #[arg(long)]
        mnemonic_file: Option<PathBuf>,
    },
}

/// Execute a wallet command
pub async fn execute_wallet_command(home: &Path, command: WalletCommand) -> Result<()> {
    let config = ClientConfig::load(home)?;

    match command {
        WalletCommand::Mnemonic { command } => match command {
            MnemonicCommand::Generate { words, output } => mnemonic::generate(
                words.unwrap_or(config.default_word_count),
                OutputFormat::resolve(output.as_deref(), &config.output)?,
            ),
            MnemonicCommand::Validate { mnemonic_file } => {
                mnemonic::validate(mnemonic_file.as_deref())
            }
        },

        WalletCommand::Derive {
            chain,
            index,
            count,
            mnemonic_file,
            show_keys,
            output,
        } => derive::execute(
            chain,
            index,
            count,
            mnemonic_file.as_deref(),
            show_keys,
            OutputFormat::resolve(output.as_deref(), &config.output)?,
        ),

        WalletCommand::Balance {
            chain,
            addresses,
            output,
        } => {
            let output = OutputFormat::resolve(output.as_deref(), &config.output)?;
            balance::execute(&config, chain, &addresses, output).await
        }

        WalletCommand::Shell { mnemonic_file } => {
            shell::execute(&config, mnemonic_file.as_deref()).await
        }
    }
}
