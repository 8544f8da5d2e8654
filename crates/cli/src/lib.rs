//! walletgen command-line interface
//!
//! Library half of the `walletgen` binary: client configuration and the
//! wallet command implementations.

pub mod client_config;
pub mod wallet_cli;

pub use client_config::ClientConfig;
pub use wallet_cli::{execute_wallet_command, MnemonicCommand, WalletCommand};

/// Environment variable overriding the home directory
pub const WALLETGEN_HOME_ENV: &str = "WALLETGEN_HOME";

/// Home directory name under the user's home
pub const DEFAULT_HOME_DIR: &str = ".walletgen";
