//! Non-interactive wallet derivation

use super::common::{load_mnemonic, print_wallet, wallet_json, Fallback, OutputFormat};
use anyhow::{anyhow, bail, Result};
use std::path::Path;
use walletgen_crypto::derive;
use walletgen_types::{Chain, KeyVisibility, HARDENED_OFFSET};

/// Execute `derive`: print `count` wallets starting at `index`
pub fn execute(
    chain: Chain,
    index: u32,
    count: u32,
    mnemonic_file: Option<&Path>,
    show_keys: bool,
    output: OutputFormat,
) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }
    // Account indices are hardened path components
    if u64::from(index) + u64::from(count) > u64::from(HARDENED_OFFSET) {
        bail!(
            "--index {} --count {} runs past the last account index {}",
            index,
            count,
            HARDENED_OFFSET - 1
        );
    }

    let mnemonic = load_mnemonic(mnemonic_file, Fallback::Stdin)?;
    let seed = mnemonic.to_seed();
    let visibility = if show_keys {
        KeyVisibility::Shown
    } else {
        KeyVisibility::Hidden
    };

    let wallets = (index..index + count)
        .map(|i| {
            derive(&seed, chain, i)
                .map_err(|e| anyhow!("Failed to derive {} wallet {}: {}", chain, i, e))
        })
        .collect::<Result<Vec<_>>>()?;

    match output {
        OutputFormat::Text => {
            println!("{} wallets", chain);
            println!();
            for (n, wallet) in wallets.iter().enumerate() {
                print_wallet(&format!("Wallet {}", n + 1), wallet, visibility, None);
                println!();
            }
        }
        OutputFormat::Json => {
            let values: Vec<_> = wallets.iter().map(|w| wallet_json(w, visibility)).collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
    }

    Ok(())
}
