//! Balance lookup command and shared refresh helper

use super::common::OutputFormat;
use crate::client_config::ClientConfig;
use anyhow::{anyhow, Result};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use walletgen_rpc::{fetch_balances, provider_for};
use walletgen_types::{Balance, Chain};
use walletgen_wallet::Session;

/// Fetch balances for `addresses`, cancelling outstanding lookups on Ctrl-C
pub async fn lookup(
    config: &ClientConfig,
    chain: Chain,
    addresses: &[String],
) -> Result<Vec<(String, Balance)>> {
    let balance_config = config.balance_config();
    let provider = provider_for(chain, &balance_config)
        .map_err(|e| anyhow!("Failed to create {} RPC client: {}", chain, e))?;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling balance lookups");
            trigger.cancel();
        }
    });

    let balances = fetch_balances(
        provider.as_ref(),
        addresses,
        balance_config.request_timeout(),
        &cancel,
    )
    .await;

    interrupt.abort();
    Ok(balances)
}

/// Refresh the session's balance book for `chain`
pub async fn refresh_session(
    config: &ClientConfig,
    session: &mut Session,
    chain: Chain,
) -> Result<()> {
    let addresses = session.addresses(chain);
    if addresses.is_empty() {
        return Ok(());
    }

    for (address, balance) in lookup(config, chain, &addresses).await? {
        session.balances_mut().record(address, balance);
    }
    Ok(())
}

/// Execute `balance`
pub async fn execute(
    config: &ClientConfig,
    chain: Chain,
    addresses: &[String],
    output: OutputFormat,
) -> Result<()> {
    let balances = lookup(config, chain, addresses).await?;

    match output {
        OutputFormat::Text => {
            for (address, balance) in &balances {
                println!("{}  {}", address, balance);
            }
        }
        OutputFormat::Json => {
            let values: Vec<_> = balances
                .iter()
                .map(|(address, balance)| {
                    serde_json::json!({
                        "address": address,
                        "balance": balance.raw().map(|raw| raw.to_string()),
                        "display": balance.to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
    }

    Ok(())
}
