//! Derived wallets and private key presentation.

use crate::chain::Chain;
use crate::path::DerivationPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed mask rendered in place of a hidden private key.
pub const MASKED_PRIVATE_KEY: &str = "********************************";

/// Encoded private key as exposed to the user.
///
/// Solana keys are base-58 of the 64-byte `seed || public key`; Ethereum
/// keys are `0x`-prefixed hex of the 32-byte scalar. The value is fixed at
/// derivation time and only ever read afterwards.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrivateKey(String);

impl PrivateKey {
    /// Wrap an encoded private key.
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    /// The encoded key.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Render according to `visibility`.
    pub fn render(&self, visibility: KeyVisibility) -> &str {
        match visibility {
            KeyVisibility::Shown => &self.0,
            KeyVisibility::Hidden => MASKED_PRIVATE_KEY,
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Whether private keys are rendered in clear or masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyVisibility {
    /// Render the mask.
    #[default]
    Hidden,
    /// Render the key.
    Shown,
}

impl KeyVisibility {
    /// The opposite visibility.
    pub fn toggled(self) -> Self {
        match self {
            KeyVisibility::Hidden => KeyVisibility::Shown,
            KeyVisibility::Shown => KeyVisibility::Hidden,
        }
    }

    /// Flip in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// True when keys are rendered in clear.
    pub fn is_shown(self) -> bool {
        self == KeyVisibility::Shown
    }
}

/// A wallet derived from a seed at a given account index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// Chain the wallet belongs to.
    pub chain: Chain,
    /// Account index used in the derivation path.
    pub index: u32,
    /// Full derivation path.
    pub path: DerivationPath,
    /// Encoded address (base-58 for Solana, EIP-55 hex for Ethereum).
    pub address: String,
    /// Encoded private key.
    pub private_key: PrivateKey,
}

impl Wallet {
    /// Private key rendered for display.
    pub fn render_private_key(&self, visibility: KeyVisibility) -> &str {
        self.private_key.render(visibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_wallet() -> Wallet {
        Wallet {
            chain: Chain::Ethereum,
            index: 0,
            path: DerivationPath::for_account(Chain::Ethereum, 0).unwrap(),
            address: "0x1cC31E180CCA3a8698fD6f13765209EC7CB9E755".to_string(),
            private_key: PrivateKey::new(
                "0x43ff9ebfdccfa25e3921d9500db2f946d46a525fa08004af7f98976d9706cd5c".to_string(),
            ),
        }
    }

    #[test]
    fn test_masking_never_mutates_key() {
        let wallet = sample_wallet();
        let original = wallet.private_key.clone();
        let mut visibility = KeyVisibility::default();

        for _ in 0..5 {
            let rendered = wallet.render_private_key(visibility);
            if visibility.is_shown() {
                assert_eq!(rendered, original.expose());
            } else {
                assert_eq!(rendered, MASKED_PRIVATE_KEY);
            }
            visibility.toggle();
        }

        assert_eq!(wallet.private_key, original);
    }

    #[test]
    fn test_toggled_is_involution() {
        assert_eq!(KeyVisibility::Hidden.toggled().toggled(), KeyVisibility::Hidden);
        assert_eq!(KeyVisibility::Hidden.toggled(), KeyVisibility::Shown);
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let debug = format!("{:?}", sample_wallet());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("43ff9ebf"));
    }

    #[test]
    fn test_mask_length() {
        assert_eq!(MASKED_PRIVATE_KEY.len(), 32);
    }
}
