//! BIP-39 seed

use super::error::MnemonicResult;
use super::generate::Mnemonic;
use crate::secure::SecretArray;

/// 64-byte BIP-39 seed, the root of every derivation.
///
/// Zeroed on drop; `Debug` prints `[REDACTED]`.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(SecretArray<64>);

impl Seed {
    /// Wrap raw seed bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(SecretArray::new(bytes))
    }

    /// Validate `phrase` and expand it with an empty passphrase.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidMnemonic` if the phrase fails the
    /// BIP-39 word or checksum checks.
    pub fn from_phrase(phrase: &str) -> MnemonicResult<Self> {
        Ok(Mnemonic::from_phrase(phrase)?.to_seed())
    }

    /// The seed bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        self.0.expose_secret()
    }

    /// Lowercase hex of the seed bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Seed").field(&"[REDACTED]").finish()
    }
}
