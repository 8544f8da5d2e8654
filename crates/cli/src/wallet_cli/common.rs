//! Common utilities for wallet CLI commands

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use walletgen_crypto::Mnemonic;
use walletgen_types::{Balance, KeyVisibility, Wallet};
use zeroize::Zeroize;

/// Environment variable holding a mnemonic phrase
pub const WALLETGEN_MNEMONIC_ENV: &str = "WALLETGEN_MNEMONIC";

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable
    Text,
    /// JSON document on stdout
    Json,
}

impl OutputFormat {
    /// Resolve `--output`, falling back to the configured default
    pub fn resolve(flag: Option<&str>, configured: &str) -> Result<Self> {
        match flag.unwrap_or(configured) {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("Unknown output format '{}' (expected text or json)", other),
        }
    }
}

/// Phrase source when `--mnemonic-file` is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Read a line from stdin
    Stdin,
    /// Generate a fresh mnemonic
    Generate,
}

/// Load the mnemonic from `--mnemonic-file`, then `WALLETGEN_MNEMONIC`, then `fallback`
pub fn load_mnemonic(mnemonic_file: Option<&Path>, fallback: Fallback) -> Result<Mnemonic> {
    let mut phrase = match mnemonic_file {
        Some(file) => read_mnemonic_from_file(file)?,
        None => match std::env::var(WALLETGEN_MNEMONIC_ENV) {
            Ok(phrase) if !phrase.trim().is_empty() => phrase,
            _ => match fallback {
                Fallback::Stdin => prompt_mnemonic()?,
                Fallback::Generate => {
                    let mnemonic = Mnemonic::generate()
                        .map_err(|e| anyhow!("Failed to generate mnemonic: {}", e))?;
                    display_mnemonic_warning(mnemonic.phrase());
                    return Ok(mnemonic);
                }
            },
        },
    };

    let result = Mnemonic::from_phrase(&phrase).map_err(|e| anyhow!("Invalid mnemonic: {}", e));
    phrase.zeroize();
    result
}

/// Read mnemonic from a file
pub fn read_mnemonic_from_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mnemonic file: {}", path.display()))?;

    let mnemonic = content.trim().to_string();

    if mnemonic.is_empty() {
        return Err(anyhow!("Mnemonic file is empty"));
    }

    Ok(mnemonic)
}

/// Read a mnemonic phrase from stdin, prompting when attached to a terminal
pub fn prompt_mnemonic() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter your mnemonic phrase (12, 15, 18, 21, or 24 words):");
        eprint!("> ");
        io::stderr().flush()?;
    }

    let mut mnemonic = String::new();
    stdin
        .lock()
        .read_line(&mut mnemonic)
        .context("Failed to read mnemonic from stdin")?;

    let trimmed = mnemonic.trim().to_string();
    mnemonic.zeroize();

    if trimmed.is_empty() {
        return Err(anyhow!("No mnemonic phrase provided"));
    }

    Ok(trimmed)
}

/// Display mnemonic with a backup warning
pub fn display_mnemonic_warning(mnemonic: &str) {
    println!();
    println!("============================================================");
    println!("                    IMPORTANT - SAVE THIS!");
    println!("============================================================");
    println!();
    println!("Your mnemonic recovery phrase:");
    println!();

    // Display words in groups of 4 for readability
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    for (i, chunk) in words.chunks(4).enumerate() {
        let start_num = i * 4 + 1;
        let formatted: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(j, word)| format!("{:2}. {:<12}", start_num + j, word))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    println!();
    println!("============================================================");
    println!("  This phrase is the ONLY way to recover your wallets.");
    println!("  Store it securely offline. Never share it with anyone.");
    println!("============================================================");
    println!();
}

/// Print one wallet as an indented text block
pub fn print_wallet(label: &str, wallet: &Wallet, visibility: KeyVisibility, balance: Option<Balance>) {
    println!("{}", label);
    println!("  Index:       {}", wallet.index);
    println!("  Path:        {}", wallet.path);
    println!("  Address:     {}", wallet.address);
    println!("  Private Key: {}", wallet.render_private_key(visibility));
    if let Some(balance) = balance {
        println!("  Balance:     {}", balance);
    }
}

/// JSON view of a wallet with the key rendered per `visibility`
pub fn wallet_json(wallet: &Wallet, visibility: KeyVisibility) -> serde_json::Value {
    serde_json::json!({
        "chain": wallet.chain,
        "index": wallet.index,
        "path": wallet.path.to_string(),
        "address": wallet.address,
        "private_key": wallet.render_private_key(visibility),
    })
}
