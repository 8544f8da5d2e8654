//! Ordered, per-chain sequence of derived wallets

use crate::error::{WalletSetError, WalletSetResult};
use tracing::{debug, info};
use walletgen_crypto::mnemonic::{derive_wallet, Seed};
use walletgen_types::{Chain, Wallet, HARDENED_OFFSET};

/// Wallets derived for one chain, in creation order.
///
/// `next_index` only ever grows. Deleting a wallet shifts later entries up
/// but never frees its index, so a later append can't reproduce a deleted
/// address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSet {
    chain: Chain,
    wallets: Vec<Wallet>,
    next_index: u32,
}

impl WalletSet {
    /// Empty set for `chain`, starting at index 0.
    pub fn new(chain: Chain) -> Self {
        Self {
            chain,
            wallets: Vec::new(),
            next_index: 0,
        }
    }

    /// Chain every entry belongs to.
    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// Index the next append will derive.
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Number of wallets currently in the set.
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    /// True if the set holds no wallets.
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Entries in creation order.
    pub fn entries(&self) -> &[Wallet] {
        &self.wallets
    }

    /// Entry at `position` (0-based).
    pub fn get(&self, position: usize) -> Option<&Wallet> {
        self.wallets.get(position)
    }

    /// Most recently appended wallet still in the set.
    pub fn latest(&self) -> Option<&Wallet> {
        self.wallets.last()
    }

    /// Position of the wallet with `address`.
    pub fn position_of(&self, address: &str) -> Option<usize> {
        self.wallets.iter().position(|w| w.address == address)
    }

    /// Derive the wallet at `next_index`, append it and advance the counter.
    ///
    /// # Errors
    ///
    /// - `Exhausted` once `next_index` reaches `2^31`
    /// - `Derivation` if key derivation fails; the set is left unchanged
    pub fn append_next(&mut self, seed: &Seed) -> WalletSetResult<&Wallet> {
        if self.next_index >= HARDENED_OFFSET {
            return Err(WalletSetError::Exhausted { chain: self.chain });
        }

        let wallet = derive_wallet(seed, self.chain, self.next_index)?;
        debug!(
            chain = %self.chain,
            index = wallet.index,
            address = %wallet.address,
            "appended wallet"
        );

        let position = self.wallets.len();
        self.wallets.push(wallet);
        self.next_index += 1;

        Ok(&self.wallets[position])
    }

    /// Remove and return the entry at `position` (0-based).
    ///
    /// Later entries move up one position; `next_index` is unchanged.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `position >= len()`; the set is left unchanged.
    pub fn delete(&mut self, position: usize) -> WalletSetResult<Wallet> {
        if position >= self.wallets.len() {
            return Err(WalletSetError::IndexOutOfRange {
                position,
                len: self.wallets.len(),
            });
        }

        let wallet = self.wallets.remove(position);
        info!(
            chain = %self.chain,
            position,
            index = wallet.index,
            address = %wallet.address,
            "deleted wallet"
        );
        Ok(wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn seed() -> Seed {
        Seed::from_phrase(TEST_MNEMONIC).unwrap()
    }

    #[test]
    fn test_new_set_is_empty() {
        let set = WalletSet::new(Chain::Solana);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.next_index(), 0);
        assert!(set.latest().is_none());
    }

    #[test]
    fn test_append_returns_new_wallet() {
        let seed = seed();
        let mut set = WalletSet::new(Chain::Ethereum);

        let wallet = set.append_next(&seed).unwrap().clone();
        assert_eq!(wallet.index, 0);
        assert_eq!(wallet.address, "0x1cC31E180CCA3a8698fD6f13765209EC7CB9E755");
        assert_eq!(set.latest(), Some(&wallet));
        assert_eq!(set.next_index(), 1);
    }

    #[test]
    fn test_position_of() {
        let seed = seed();
        let mut set = WalletSet::new(Chain::Solana);
        set.append_next(&seed).unwrap();
        set.append_next(&seed).unwrap();

        assert_eq!(
            set.position_of("Hh8QwFUA6MtVu1qAoq12ucvFHNwCcVTV7hpWjeY1Hztb"),
            Some(1)
        );
        assert_eq!(set.position_of("unknown"), None);
    }

    #[test]
    fn test_exhausted_at_hardened_offset() {
        let seed = seed();
        let mut set = WalletSet::new(Chain::Solana);
        set.next_index = HARDENED_OFFSET;

        assert_eq!(
            set.append_next(&seed).unwrap_err(),
            WalletSetError::Exhausted {
                chain: Chain::Solana
            }
        );
        assert!(set.is_empty());
        assert_eq!(set.next_index(), HARDENED_OFFSET);
    }

    #[test]
    fn test_last_index_before_exhaustion() {
        let seed = seed();
        let mut set = WalletSet::new(Chain::Ethereum);
        set.next_index = HARDENED_OFFSET - 1;

        let wallet = set.append_next(&seed).unwrap();
        assert_eq!(wallet.index, HARDENED_OFFSET - 1);
        assert!(set.append_next(&seed).is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_delete_on_empty_set() {
        let mut set = WalletSet::new(Chain::Ethereum);
        assert_eq!(
            set.delete(0).unwrap_err(),
            WalletSetError::IndexOutOfRange { position: 0, len: 0 }
        );
    }
}
