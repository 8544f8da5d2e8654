//! walletgen CLI
//!
//! HD wallet generator for Solana and Ethereum.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use walletgen_cli::{
    execute_wallet_command, ClientConfig, WalletCommand, DEFAULT_HOME_DIR, WALLETGEN_HOME_ENV,
};

/// walletgen
#[derive(Parser)]
#[command(name = "walletgen")]
#[command(author = "walletgen Contributors")]
#[command(version)]
#[command(about = "HD wallet generator for Solana and Ethereum", long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Directory for client configuration
    #[arg(long, global = true, default_value_os_t = default_home_dir())]
    home: PathBuf,

    /// The logging level (trace|debug|info|warn|error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// The logging format (json|plain)
    #[arg(long, global = true, default_value = "plain")]
    log_format: String,

    /// Disable colored logs
    #[arg(long, global = true, default_value = "false")]
    log_no_color: bool,

    /// Print out full error chain on failure
    #[arg(long, global = true, default_value = "false")]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Wallet(WalletCommand),

    /// Utilities for managing client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective client configuration
    Show,

    /// Write a default client.toml
    Init {
        /// Overwrite an existing client.toml
        #[arg(long, default_value = "false")]
        overwrite: bool,
    },
}

/// Returns the default home directory for walletgen.
///
/// Resolution order:
/// 1. `WALLETGEN_HOME` environment variable (if set)
/// 2. `~/.walletgen` (default)
fn default_home_dir() -> PathBuf {
    if let Ok(home) = std::env::var(WALLETGEN_HOME_ENV) {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_HOME_DIR)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, &cli.log_format, cli.log_no_color);

    let result = match cli.command {
        Commands::Wallet(command) => execute_wallet_command(&cli.home, command).await,
        Commands::Config { command } => cmd_config(&cli.home, command),
    };

    if let Err(e) = &result {
        if cli.trace {
            eprintln!("Error: {:?}", e);
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(log_level: &str, log_format: &str, no_color: bool) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // stdout carries command output; logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color);

    match log_format {
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

fn cmd_config(home: &Path, command: ConfigCommands) -> Result<()> {
    let config_path = ClientConfig::config_path(home);

    match command {
        ConfigCommands::Show => {
            let config = ClientConfig::load(home)?;
            if config_path.exists() {
                println!("# {}", config_path.display());
            } else {
                println!("# {} (not found, showing defaults)", config_path.display());
            }
            println!("{}", toml::to_string_pretty(&config)?);
        }

        ConfigCommands::Init { overwrite } => {
            if config_path.exists() && !overwrite {
                bail!(
                    "Configuration already exists at {}. Use --overwrite to replace it.",
                    config_path.display()
                );
            }

            ClientConfig::default().save(home)?;
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}
