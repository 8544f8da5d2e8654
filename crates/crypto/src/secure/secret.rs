//! Secret wrapper utilities
//!
//! Thin layer over `secrecy` and `zeroize` for phrases and fixed-size seeds.

use secrecy::SecretString as SecrecySecretString;
use zeroize::Zeroize;

/// A secret string that is zeroized on drop.
///
/// Used for the mnemonic phrase. The inner value can only be accessed via
/// `expose_secret()`.
///
/// # Example
///
/// ```rust
/// use walletgen_crypto::secure::SecretString;
/// use secrecy::ExposeSecret;
///
/// let phrase: SecretString = "abandon about".to_string().into();
/// assert_eq!(phrase.expose_secret(), "abandon about");
/// ```
pub type SecretString = SecrecySecretString;

/// A fixed-size secret byte array, zeroized on drop.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SecretArray<const N: usize> {
    inner: [u8; N],
}

impl<const N: usize> SecretArray<N> {
    /// Create a new secret array from bytes.
    pub fn new(bytes: [u8; N]) -> Self {
        Self { inner: bytes }
    }

    /// Expose the secret bytes.
    pub fn expose_secret(&self) -> &[u8; N] {
        &self.inner
    }
}

impl<const N: usize> Clone for SecretArray<N> {
    fn clone(&self) -> Self {
        Self::new(self.inner)
    }
}

impl<const N: usize> PartialEq for SecretArray<N> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<const N: usize> Eq for SecretArray<N> {}

impl<const N: usize> std::fmt::Debug for SecretArray<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretArray")
            .field("length", &N)
            .field("value", &"[REDACTED]")
            .finish()
    }
}
