//! Mnemonic generation and validation commands

use super::common::{display_mnemonic_warning, load_mnemonic, Fallback, OutputFormat};
use anyhow::{anyhow, Result};
use std::path::Path;
use walletgen_crypto::Mnemonic;

/// Execute `mnemonic generate`
pub fn generate(word_count: usize, output: OutputFormat) -> Result<()> {
    let mnemonic = Mnemonic::generate_with_word_count(word_count)
        .map_err(|e| anyhow!("Failed to generate mnemonic: {}", e))?;

    match output {
        OutputFormat::Text => display_mnemonic_warning(mnemonic.phrase()),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "word_count": mnemonic.word_count(),
                "mnemonic": mnemonic.phrase(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

/// Execute `mnemonic validate`
pub fn validate(mnemonic_file: Option<&Path>) -> Result<()> {
    let mnemonic = load_mnemonic(mnemonic_file, Fallback::Stdin)?;
    println!("Mnemonic is valid ({} words)", mnemonic.word_count());
    Ok(())
}
