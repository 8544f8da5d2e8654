//! BIP-32 style derivation paths
//!
//! walletgen derives one account per index using the BIP-44 layout
//! `m / 44' / coin_type' / account' / 0'`:
//!
//! ```text
//! Solana:   m/44'/501'/{account}'/0'
//! Ethereum: m/44'/60'/{account}'/0'
//! ```
//!
//! Parsing and the child-number encoding come from the `bip32` crate.

use crate::chain::Chain;
use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub use bip32::ChildNumber;

/// Offset added to an index to mark it hardened.
pub const HARDENED_OFFSET: u32 = ChildNumber::HARDENED_FLAG;

/// BIP-44 purpose field.
const BIP44_PURPOSE: u32 = 44;

fn hardened(index: u32) -> Result<ChildNumber, TypesError> {
    ChildNumber::new(index, true).map_err(|_| {
        TypesError::InvalidPath(format!("index {} out of range (must be < 2^31)", index))
    })
}

/// A parsed derivation path such as `m/44'/60'/0'/0/0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivationPath(bip32::DerivationPath);

impl DerivationPath {
    /// Path of the `account`-th wallet for `chain`: `m/44'/{coin}'/{account}'/0'`.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::InvalidPath`] if `account >= 2^31`.
    pub fn for_account(chain: Chain, account: u32) -> Result<Self, TypesError> {
        let mut path = bip32::DerivationPath::default();
        path.push(hardened(BIP44_PURPOSE)?);
        path.push(hardened(chain.coin_type())?);
        path.push(hardened(account)?);
        path.push(hardened(0)?);
        Ok(Self(path))
    }

    /// Path components, root first.
    pub fn components(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.0.iter()
    }

    /// Number of components below the master node.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// True if every component is hardened (required for Ed25519).
    pub fn is_fully_hardened(&self) -> bool {
        self.components().all(|c| c.is_hardened())
    }

    /// The underlying `bip32` path.
    pub fn as_bip32(&self) -> &bip32::DerivationPath {
        &self.0
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DerivationPath {
    type Err = TypesError;

    /// Parses paths like `m/44'/60'/0'/0/0`; a bare `m` is the master node.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let path = path.trim();
        bip32::DerivationPath::from_str(path)
            .map(Self)
            .map_err(|e| TypesError::InvalidPath(format!("{}: {}", path, e)))
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
