//! Informational account balances.
//!
//! Balances are metadata looked up from a remote node. They are kept apart
//! from [`Wallet`](crate::Wallet) so that a failed lookup only ever yields
//! [`Balance::Unknown`].

use crate::chain::Chain;
use alloy_primitives::U256;
use std::fmt;

/// Balance of one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Balance {
    /// Balance in the smallest native unit (lamports or wei).
    Known {
        /// Chain the amount is denominated in.
        chain: Chain,
        /// Raw amount.
        raw: U256,
    },
    /// Not fetched yet, or the lookup failed.
    #[default]
    Unknown,
}

impl Balance {
    /// Known balance.
    pub fn known(chain: Chain, raw: U256) -> Self {
        Balance::Known { chain, raw }
    }

    /// Raw amount, if known.
    pub fn raw(&self) -> Option<U256> {
        match self {
            Balance::Known { raw, .. } => Some(*raw),
            Balance::Unknown => None,
        }
    }

    /// True if the lookup succeeded.
    pub fn is_known(&self) -> bool {
        matches!(self, Balance::Known { .. })
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Balance::Known { chain, raw } => {
                write!(f, "{} {}", format_units(*raw, chain.decimals()), chain.symbol())
            }
            Balance::Unknown => f.write_str("unknown"),
        }
    }
}

/// Format `raw` with `decimals` fractional digits, trimming trailing zeros.
///
/// `format_units(1_500_000_000_000_000_000, 18) == "1.5"`
pub fn format_units(raw: U256, decimals: u8) -> String {
    match alloy_primitives::utils::format_units(raw, decimals) {
        Ok(formatted) if formatted.contains('.') => formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
        Ok(formatted) => formatted,
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(U256::ZERO, 18), "0");
        assert_eq!(format_units(U256::from(1_500_000_000_000_000_000u128), 18), "1.5");
        assert_eq!(format_units(U256::from(1u64), 9), "0.000000001");
        assert_eq!(format_units(U256::from(2_000_000_000u64), 9), "2");
        assert_eq!(format_units(U256::from(42u64), 0), "42");
        assert_eq!(format_units(U256::from(100u64), 0), "100");
        assert_eq!(format_units(U256::from(10_000_000_000u64), 9), "10");
    }

    #[test]
    fn test_display() {
        let eth = Balance::known(Chain::Ethereum, U256::from(250_000_000_000_000_000u128));
        assert_eq!(eth.to_string(), "0.25 ETH");

        let sol = Balance::known(Chain::Solana, U256::from(1_000_000_000u64));
        assert_eq!(sol.to_string(), "1 SOL");

        assert_eq!(Balance::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_default_is_unknown() {
        let balance = Balance::default();
        assert!(!balance.is_known());
        assert_eq!(balance.raw(), None);
    }
}
