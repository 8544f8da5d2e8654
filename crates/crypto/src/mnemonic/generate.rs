//! Mnemonic phrase generation and parsing
//!
//! Implements BIP-39 mnemonic phrase support on top of the `bip39` crate.

use super::error::{MnemonicError, MnemonicResult};
use super::seed::Seed;
use bip39::Mnemonic as Bip39Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::ExposeSecret;
use zeroize::Zeroize;

use crate::secure::SecretString;

/// Default number of words for generated phrases (128 bits of entropy)
pub const DEFAULT_WORD_COUNT: usize = 12;

/// BIP-39 mnemonic phrase wrapper
///
/// The phrase is kept as a `SecretString` so it is zeroed on drop and never
/// shows up in `Debug` output.
///
/// # Example
///
/// ```rust
/// use walletgen_crypto::mnemonic::Mnemonic;
///
/// // Generate a new 12-word mnemonic
/// let mnemonic = Mnemonic::generate().unwrap();
/// assert_eq!(mnemonic.word_count(), 12);
///
/// // Import an existing mnemonic
/// let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
/// let imported = Mnemonic::from_phrase(phrase).unwrap();
/// assert_eq!(imported.phrase(), phrase);
/// ```
pub struct Mnemonic {
    inner: Bip39Mnemonic,
    phrase: SecretString,
}

impl Mnemonic {
    /// Generate a new random 12-word (128-bit entropy) mnemonic
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::EntropyUnavailable` if the OS entropy source fails
    pub fn generate() -> MnemonicResult<Self> {
        Self::generate_with_word_count(DEFAULT_WORD_COUNT)
    }

    /// Generate a mnemonic with a specific word count
    ///
    /// # Arguments
    ///
    /// * `word_count` - Number of words (12, 15, 18, 21, or 24)
    ///
    /// # Errors
    ///
    /// Returns error if word count is invalid or entropy generation fails
    pub fn generate_with_word_count(word_count: usize) -> MnemonicResult<Self> {
        let entropy_bytes = word_count_to_entropy_bytes(word_count)?;

        let mut entropy = vec![0u8; entropy_bytes];
        OsRng
            .try_fill_bytes(&mut entropy)
            .map_err(|e| MnemonicError::EntropyUnavailable(e.to_string()))?;

        let result = Bip39Mnemonic::from_entropy(&entropy);
        entropy.zeroize();

        let mnemonic = result?;
        let phrase = mnemonic.to_string();
        Ok(Self {
            inner: mnemonic,
            phrase: phrase.into(),
        })
    }

    /// Import a mnemonic from an existing phrase
    ///
    /// Case and surrounding/repeated whitespace are normalized before the
    /// words and checksum are validated.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidMnemonic` if:
    /// - The phrase contains invalid words
    /// - The word count is invalid (not 12, 15, 18, 21, or 24)
    /// - The checksum is invalid
    pub fn from_phrase(phrase: &str) -> MnemonicResult<Self> {
        let normalized = normalize_phrase(phrase);
        let mnemonic = Bip39Mnemonic::parse_normalized(&normalized)?;

        Ok(Self {
            phrase: normalized.into(),
            inner: mnemonic,
        })
    }

    /// Validate that a phrase is a valid BIP-39 mnemonic
    pub fn validate(phrase: &str) -> MnemonicResult<()> {
        Bip39Mnemonic::parse_normalized(&normalize_phrase(phrase))?;
        Ok(())
    }

    /// Get the mnemonic phrase
    pub fn phrase(&self) -> &str {
        self.phrase.expose_secret()
    }

    /// Iterate over the words of the phrase
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase().split(' ')
    }

    /// Get the number of words in the mnemonic
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// Get the raw entropy bytes encoded by the phrase
    pub fn entropy(&self) -> Vec<u8> {
        self.inner.to_entropy()
    }

    /// Expand into the 64-byte BIP-39 seed with an empty passphrase
    pub fn to_seed(&self) -> Seed {
        self.to_seed_with_passphrase("")
    }

    /// Expand into the 64-byte BIP-39 seed
    ///
    /// PBKDF2-HMAC-SHA512, 2048 rounds, salt `"mnemonic" || passphrase`.
    pub fn to_seed_with_passphrase(&self, passphrase: &str) -> Seed {
        Seed::from_bytes(self.inner.to_seed(passphrase))
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert word count to entropy bytes
fn word_count_to_entropy_bytes(word_count: usize) -> MnemonicResult<usize> {
    match word_count {
        12 => Ok(16), // 128 bits
        15 => Ok(20), // 160 bits
        18 => Ok(24), // 192 bits
        21 => Ok(28), // 224 bits
        24 => Ok(32), // 256 bits
        _ => Err(MnemonicError::InvalidWordCount(word_count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generate_default_is_12_words() {
        let mnemonic = Mnemonic::generate().unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        assert_eq!(mnemonic.words().count(), 12);
        assert_eq!(mnemonic.entropy().len(), 16);
    }

    #[test]
    fn test_generate_24_word_mnemonic() {
        let mnemonic = Mnemonic::generate_with_word_count(24).unwrap();
        assert_eq!(mnemonic.word_count(), 24);
        assert_eq!(mnemonic.entropy().len(), 32);
    }

    #[test]
    fn test_generated_phrase_validates() {
        let mnemonic = Mnemonic::generate().unwrap();
        assert!(Mnemonic::validate(mnemonic.phrase()).is_ok());
    }

    #[test]
    fn test_generate_is_random() {
        let a = Mnemonic::generate().unwrap();
        let b = Mnemonic::generate().unwrap();
        assert_ne!(a.phrase(), b.phrase());
    }

    #[test]
    fn test_invalid_word_count() {
        let result = Mnemonic::generate_with_word_count(13);
        assert_eq!(result.unwrap_err(), MnemonicError::InvalidWordCount(13));
    }

    #[test]
    fn test_from_phrase_valid() {
        let mnemonic = Mnemonic::from_phrase(TEST_PHRASE).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        assert_eq!(mnemonic.phrase(), TEST_PHRASE);
        assert_eq!(mnemonic.entropy(), vec![0u8; 16]);
    }

    #[test]
    fn test_from_phrase_normalizes_whitespace_and_case() {
        let messy = "  ABANDON  abandon Abandon abandon abandon abandon\tabandon abandon abandon abandon abandon about  ";
        let mnemonic = Mnemonic::from_phrase(messy).unwrap();
        assert_eq!(mnemonic.phrase(), TEST_PHRASE);
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(matches!(
            Mnemonic::from_phrase(bad),
            Err(MnemonicError::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_unknown_word_rejected() {
        let invalid = "this is not a valid mnemonic phrase at all";
        assert!(Mnemonic::validate(invalid).is_err());
    }

    #[test]
    fn test_seed_vector() {
        // BIP-39 reference seed for the all-"abandon" phrase, empty passphrase
        let mnemonic = Mnemonic::from_phrase(TEST_PHRASE).unwrap();
        assert_eq!(
            mnemonic.to_seed().to_hex(),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_passphrase_changes_seed() {
        let mnemonic = Mnemonic::from_phrase(TEST_PHRASE).unwrap();
        assert_ne!(mnemonic.to_seed(), mnemonic.to_seed_with_passphrase("TREZOR"));
    }

    #[test]
    fn test_debug_output_redacted() {
        let mnemonic = Mnemonic::from_phrase(TEST_PHRASE).unwrap();
        let debug = format!("{:?}", mnemonic);

        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("word_count"));
        assert!(!debug.contains("abandon"));
    }
}
