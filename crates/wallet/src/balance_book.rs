//! Side table of informational balances keyed by address

use std::collections::HashMap;
use walletgen_types::Balance;

/// Last known balance per address.
///
/// Kept apart from [`WalletSet`](crate::WalletSet) so balance refreshes never
/// touch wallet identity.
#[derive(Debug, Clone, Default)]
pub struct BalanceBook {
    balances: HashMap<String, Balance>,
}

impl BalanceBook {
    /// Empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `balance` for `address`, replacing any earlier value.
    pub fn record(&mut self, address: impl Into<String>, balance: Balance) {
        self.balances.insert(address.into(), balance);
    }

    /// Balance for `address`, `Unknown` if none was recorded.
    pub fn get(&self, address: &str) -> Balance {
        self.balances.get(address).copied().unwrap_or_default()
    }

    /// Drop the entry for `address`.
    pub fn forget(&mut self, address: &str) -> Option<Balance> {
        self.balances.remove(address)
    }

    /// Number of recorded addresses.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// True if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
