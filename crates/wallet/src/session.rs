//! Wallet session: one mnemonic, one wallet set per chain
//!
//! Replaces process-wide UI state with a value the caller owns and passes
//! explicitly. Everything in a session lives in memory only.

use crate::balance_book::BalanceBook;
use crate::error::{WalletSetError, WalletSetResult};
use crate::set::WalletSet;
use std::collections::HashMap;
use walletgen_crypto::mnemonic::{Mnemonic, MnemonicResult, Seed};
use walletgen_types::{Chain, KeyVisibility, Wallet};

/// Per-chain state: the wallet set, the chain-wide key visibility and
/// per-wallet overrides keyed by derivation index.
#[derive(Debug, Clone)]
struct ChainState {
    wallets: WalletSet,
    visibility: KeyVisibility,
    overrides: HashMap<u32, KeyVisibility>,
}

impl ChainState {
    fn new(chain: Chain) -> Self {
        Self {
            wallets: WalletSet::new(chain),
            visibility: KeyVisibility::default(),
            overrides: HashMap::new(),
        }
    }

    fn wallet(&self, position: usize) -> WalletSetResult<&Wallet> {
        self.wallets
            .get(position)
            .ok_or(WalletSetError::IndexOutOfRange {
                position,
                len: self.wallets.len(),
            })
    }

    fn visibility_of(&self, wallet: &Wallet) -> KeyVisibility {
        self.overrides
            .get(&wallet.index)
            .copied()
            .unwrap_or(self.visibility)
    }
}

/// Session state for one mnemonic.
#[derive(Debug)]
pub struct Session {
    mnemonic: Mnemonic,
    seed: Seed,
    solana: ChainState,
    ethereum: ChainState,
    balances: BalanceBook,
}

impl Session {
    /// Start a session for `mnemonic` with empty wallet sets.
    pub fn new(mnemonic: Mnemonic) -> Self {
        let seed = mnemonic.to_seed();
        Self {
            mnemonic,
            seed,
            solana: ChainState::new(Chain::Solana),
            ethereum: ChainState::new(Chain::Ethereum),
            balances: BalanceBook::new(),
        }
    }

    /// Start a session with a freshly generated 12-word mnemonic.
    pub fn generate() -> MnemonicResult<Self> {
        Mnemonic::generate().map(Self::new)
    }

    /// Start a session from an existing phrase.
    pub fn from_phrase(phrase: &str) -> MnemonicResult<Self> {
        Mnemonic::from_phrase(phrase).map(Self::new)
    }

    /// The session mnemonic.
    pub fn mnemonic(&self) -> &Mnemonic {
        &self.mnemonic
    }

    /// The seed every wallet in the session is derived from.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Wallet set for `chain`.
    pub fn set(&self, chain: Chain) -> &WalletSet {
        &self.state(chain).wallets
    }

    /// Wallets for `chain`, in creation order.
    pub fn wallets(&self, chain: Chain) -> &[Wallet] {
        self.set(chain).entries()
    }

    /// Derive and append the next wallet for `chain`.
    pub fn append_next(&mut self, chain: Chain) -> WalletSetResult<&Wallet> {
        let seed = &self.seed;
        let state = match chain {
            Chain::Solana => &mut self.solana,
            Chain::Ethereum => &mut self.ethereum,
        };
        state.wallets.append_next(seed)
    }

    /// Delete the wallet at `position` for `chain` and forget its balance.
    pub fn delete(&mut self, chain: Chain, position: usize) -> WalletSetResult<Wallet> {
        let state = self.state_mut(chain);
        let wallet = state.wallets.delete(position)?;
        state.overrides.remove(&wallet.index);
        self.balances.forget(&wallet.address);
        Ok(wallet)
    }

    /// Flip key visibility for every wallet of `chain` and return the new value.
    ///
    /// Clears per-wallet overrides.
    pub fn toggle_visibility(&mut self, chain: Chain) -> KeyVisibility {
        let state = self.state_mut(chain);
        state.visibility.toggle();
        state.overrides.clear();
        state.visibility
    }

    /// Chain-wide key visibility for `chain`.
    pub fn visibility(&self, chain: Chain) -> KeyVisibility {
        self.state(chain).visibility
    }

    /// Flip key visibility for the wallet at `position` only.
    pub fn toggle_wallet_visibility(
        &mut self,
        chain: Chain,
        position: usize,
    ) -> WalletSetResult<KeyVisibility> {
        let state = self.state_mut(chain);
        let wallet = state.wallet(position)?;
        let index = wallet.index;
        let next = state.visibility_of(wallet).toggled();

        if next == state.visibility {
            state.overrides.remove(&index);
        } else {
            state.overrides.insert(index, next);
        }
        Ok(next)
    }

    /// Effective key visibility of the wallet at `position`.
    pub fn wallet_visibility(&self, chain: Chain, position: usize) -> WalletSetResult<KeyVisibility> {
        let state = self.state(chain);
        Ok(state.visibility_of(state.wallet(position)?))
    }

    /// Private key of the wallet at `position`, masked unless shown.
    pub fn render_private_key(&self, chain: Chain, position: usize) -> WalletSetResult<&str> {
        let state = self.state(chain);
        let wallet = state.wallet(position)?;
        Ok(wallet.render_private_key(state.visibility_of(wallet)))
    }

    /// Addresses of the wallets for `chain`, in creation order.
    pub fn addresses(&self, chain: Chain) -> Vec<String> {
        self.wallets(chain)
            .iter()
            .map(|w| w.address.clone())
            .collect()
    }

    /// Balance side table.
    pub fn balances(&self) -> &BalanceBook {
        &self.balances
    }

    /// Mutable balance side table.
    pub fn balances_mut(&mut self) -> &mut BalanceBook {
        &mut self.balances
    }

    fn state(&self, chain: Chain) -> &ChainState {
        match chain {
            Chain::Solana => &self.solana,
            Chain::Ethereum => &self.ethereum,
        }
    }

    fn state_mut(&mut self, chain: Chain) -> &mut ChainState {
        match chain {
            Chain::Solana => &mut self.solana,
            Chain::Ethereum => &mut self.ethereum,
        }
    }
}
