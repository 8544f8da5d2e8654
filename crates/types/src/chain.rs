//! Supported chains and their signing curves.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elliptic curve a chain signs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Ed25519, derived with SLIP-0010 (hardened only).
    Ed25519,
    /// secp256k1, derived with BIP-32.
    Secp256k1,
}

/// A chain wallets can be derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Solana (coin type 501, Ed25519).
    Solana,
    /// Ethereum (coin type 60, secp256k1).
    Ethereum,
}

impl Chain {
    /// All supported chains, in display order.
    pub const ALL: [Chain; 2] = [Chain::Solana, Chain::Ethereum];

    /// SLIP-0044 coin type used in the BIP-44 path.
    pub const fn coin_type(&self) -> u32 {
        match self {
            Chain::Solana => 501,
            Chain::Ethereum => 60,
        }
    }

    /// Curve used for key derivation and signing.
    pub const fn curve(&self) -> Curve {
        match self {
            Chain::Solana => Curve::Ed25519,
            Chain::Ethereum => Curve::Secp256k1,
        }
    }

    /// Ticker of the native asset.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Chain::Solana => "SOL",
            Chain::Ethereum => "ETH",
        }
    }

    /// Decimals of the smallest native unit (lamports, wei).
    pub const fn decimals(&self) -> u8 {
        match self {
            Chain::Solana => 9,
            Chain::Ethereum => 18,
        }
    }

    /// Human readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Chain::Solana => "Solana",
            Chain::Ethereum => "Ethereum",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solana" | "sol" => Ok(Chain::Solana),
            "ethereum" | "eth" => Ok(Chain::Ethereum),
            other => Err(TypesError::UnknownChain(other.to_string())),
        }
    }
}
