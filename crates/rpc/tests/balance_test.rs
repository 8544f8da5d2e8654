//! Balance lookups against an in-process JSON-RPC node.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jsonrpsee::server::{ServerBuilder, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use jsonrpsee::RpcModule;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use walletgen_rpc::{
    fetch_balances, BalanceProvider, EthereumRpc, RpcError, RpcResult, SolanaRpc,
};
use walletgen_types::{Balance, Chain, U256};

const ETH_FUNDED: &str = "0x1cC31E180CCA3a8698fD6f13765209EC7CB9E755";
const ETH_EMPTY: &str = "0x3590821f4FD8B921B74d923475B7DA6c9b2aE83b";
const ETH_SLOW: &str = "0x33b1e0848dcc72662E60A70E40A65c40342EA971";
const SOL_FUNDED: &str = "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk";
const SOL_UNKNOWN: &str = "Hh8QwFUA6MtVu1qAoq12ucvFHNwCcVTV7hpWjeY1Hztb";

fn invalid_params(msg: &str) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(-32602, msg.to_string(), None::<()>)
}

/// Start a node answering `eth_getBalance` and `getBalance`, return its URL.
async fn start_test_node() -> (String, ServerHandle) {
    let mut module = RpcModule::new(());

    let eth_balances: Arc<HashMap<&'static str, &'static str>> = Arc::new(HashMap::from([
        (ETH_FUNDED, "0xde0b6b3a7640000"), // 1 ETH
        (ETH_EMPTY, "0x0"),
    ]));
    module
        .register_async_method("eth_getBalance", move |params, _, _| {
            let eth_balances = Arc::clone(&eth_balances);
            async move {
                let (address, tag): (String, String) = params.parse()?;
                if tag != "latest" {
                    return Err(invalid_params("unsupported block tag"));
                }
                if address == ETH_SLOW {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                }
                eth_balances
                    .get(address.as_str())
                    .map(|q| q.to_string())
                    .ok_or_else(|| invalid_params("unknown account"))
            }
        })
        .unwrap();

    module
        .register_method("getBalance", |params, _, _| {
            let (address,): (String,) = params.parse()?;
            if address == SOL_FUNDED {
                Ok(json!({ "context": { "slot": 42 }, "value": 2_500_000_000u64 }))
            } else {
                Err(invalid_params("unknown account"))
            }
        })
        .unwrap();

    let server = ServerBuilder::default()
        .build("127.0.0.1:0")
        .await
        .expect("Failed to bind test node");
    let addr: SocketAddr = server.local_addr().unwrap();
    let handle = server.start(module);

    (format!("http://{}", addr), handle)
}

fn addresses(list: &[&str]) -> Vec<String> {
    list.iter().map(|a| a.to_string()).collect()
}

#[tokio::test]
async fn test_ethereum_balances() {
    let (url, handle) = start_test_node().await;
    let provider = EthereumRpc::new(&url, Duration::from_secs(5)).unwrap();

    let balances = fetch_balances(
        &provider,
        &addresses(&[ETH_FUNDED, ETH_EMPTY]),
        Duration::from_secs(5),
        &CancellationToken::new(),
    )
    .await;

    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].0, ETH_FUNDED);
    assert_eq!(
        balances[0].1,
        Balance::known(Chain::Ethereum, U256::from(1_000_000_000_000_000_000u64))
    );
    assert_eq!(balances[0].1.to_string(), "1 ETH");
    assert_eq!(balances[1].1, Balance::known(Chain::Ethereum, U256::ZERO));

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_solana_balance() {
    let (url, handle) = start_test_node().await;
    let provider = SolanaRpc::new(&url, Duration::from_secs(5)).unwrap();

    assert_eq!(
        provider.balance(SOL_FUNDED).await.unwrap(),
        U256::from(2_500_000_000u64)
    );

    let balances = fetch_balances(
        &provider,
        &addresses(&[SOL_FUNDED]),
        Duration::from_secs(5),
        &CancellationToken::new(),
    )
    .await;
    assert_eq!(balances[0].1.to_string(), "2.5 SOL");

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_failed_lookup_is_unknown_for_that_address_only() {
    let (url, handle) = start_test_node().await;
    let provider = SolanaRpc::new(&url, Duration::from_secs(5)).unwrap();

    assert!(matches!(
        provider.balance(SOL_UNKNOWN).await,
        Err(RpcError::Client(_))
    ));

    let balances = fetch_balances(
        &provider,
        &addresses(&[SOL_UNKNOWN, SOL_FUNDED]),
        Duration::from_secs(5),
        &CancellationToken::new(),
    )
    .await;

    assert_eq!(balances[0], (SOL_UNKNOWN.to_string(), Balance::Unknown));
    assert!(balances[1].1.is_known());

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_slow_lookup_times_out() {
    let (url, handle) = start_test_node().await;
    let provider = EthereumRpc::new(&url, Duration::from_secs(5)).unwrap();

    let balances = fetch_balances(
        &provider,
        &addresses(&[ETH_SLOW, ETH_FUNDED]),
        Duration::from_millis(200),
        &CancellationToken::new(),
    )
    .await;

    assert_eq!(balances[0].1, Balance::Unknown);
    assert!(balances[1].1.is_known());

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_client_timeout_maps_to_timeout() {
    let (url, handle) = start_test_node().await;
    let provider = EthereumRpc::new(&url, Duration::from_millis(100)).unwrap();

    assert_eq!(provider.balance(ETH_SLOW).await, Err(RpcError::Timeout));

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_unreachable_node_is_unknown() {
    // Nothing listens on port 9 locally
    let provider = EthereumRpc::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();

    let balances = fetch_balances(
        &provider,
        &addresses(&[ETH_FUNDED]),
        Duration::from_secs(2),
        &CancellationToken::new(),
    )
    .await;

    assert_eq!(balances, vec![(ETH_FUNDED.to_string(), Balance::Unknown)]);
}

/// Provider that never answers.
struct StalledProvider;

#[async_trait]
impl BalanceProvider for StalledProvider {
    fn chain(&self) -> Chain {
        Chain::Solana
    }

    async fn balance(&self, _address: &str) -> RpcResult<U256> {
        futures::future::pending().await
    }
}

#[tokio::test]
async fn test_cancellation_yields_unknown() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let balances = fetch_balances(
        &StalledProvider,
        &addresses(&[SOL_FUNDED, SOL_UNKNOWN]),
        Duration::from_secs(30),
        &cancel,
    )
    .await;

    assert!(balances.iter().all(|(_, b)| *b == Balance::Unknown));
    assert_eq!(balances.len(), 2);
}

#[tokio::test]
async fn test_empty_address_list() {
    let balances = fetch_balances(
        &StalledProvider,
        &[],
        Duration::from_secs(1),
        &CancellationToken::new(),
    )
    .await;
    assert!(balances.is_empty());
}
