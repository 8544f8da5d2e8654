//! Concurrent, cancellable balance fan-out.

use futures::future::join_all;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use walletgen_types::Balance;

use crate::error::RpcError;
use crate::provider::BalanceProvider;

/// Look up the balance of every address concurrently.
///
/// Each request is bounded by `timeout` and abandoned when `cancel` fires.
/// A failed, timed-out or cancelled lookup yields [`Balance::Unknown`] for
/// that address only. Results keep the order of `addresses`.
pub async fn fetch_balances<P>(
    provider: &P,
    addresses: &[String],
    timeout: Duration,
    cancel: &CancellationToken,
) -> Vec<(String, Balance)>
where
    P: BalanceProvider + ?Sized,
{
    let chain = provider.chain();

    let lookups = addresses.iter().map(|address| async move {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(RpcError::Cancelled),
            result = tokio::time::timeout(timeout, provider.balance(address)) => {
                result.unwrap_or(Err(RpcError::Timeout))
            }
        };

        let balance = match result {
            Ok(raw) => Balance::known(chain, raw),
            Err(RpcError::Cancelled) => {
                debug!(%chain, address = %address, "balance lookup cancelled");
                Balance::Unknown
            }
            Err(e) => {
                warn!(%chain, address = %address, error = %e, "balance lookup failed");
                Balance::Unknown
            }
        };

        (address.clone(), balance)
    });

    join_all(lookups).await
}
