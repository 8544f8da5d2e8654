//! Ed25519 key pairs for Solana wallets
//!
//! A Solana account is an Ed25519 key pair:
//! - the address is the base-58 encoding of the 32-byte public key
//! - the exported secret key is the 64-byte `seed || public key`, base-58 encoded
//!   (the layout `Keypair::to_bytes()` produces in the Solana SDKs)

use ed25519_consensus::{SigningKey as Ed25519Secret, VerificationKey as Ed25519Pubkey};

/// Ed25519 secret key (32 bytes seed)
#[derive(Clone)]
pub struct Ed25519SecretKey(Ed25519Secret);

impl Ed25519SecretKey {
    /// Create from seed bytes (32 bytes)
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self(Ed25519Secret::from(*seed))
    }

    /// Serialize to bytes (32-byte seed)
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Get the corresponding public key
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.0.verification_key())
    }
}

impl std::fmt::Debug for Ed25519SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Ed25519 public key (32 bytes)
#[derive(Clone, PartialEq, Eq)]
pub struct Ed25519PublicKey(Ed25519Pubkey);

impl Ed25519PublicKey {
    /// Serialize to bytes (32 bytes)
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Solana address: base-58 of the public key bytes
    pub fn solana_address(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }
}

impl std::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519PublicKey({})", self.solana_address())
    }
}

/// Ed25519 key pair (convenience wrapper)
#[derive(Clone)]
pub struct Ed25519KeyPair {
    pub secret_key: Ed25519SecretKey,
    pub public_key: Ed25519PublicKey,
}

impl Ed25519KeyPair {
    /// Create from a 32-byte seed
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self::from_secret_key(Ed25519SecretKey::from_seed(seed))
    }

    /// Create from secret key
    pub fn from_secret_key(secret_key: Ed25519SecretKey) -> Self {
        let public_key = secret_key.public_key();
        Self {
            secret_key,
            public_key,
        }
    }

    /// 64-byte keypair encoding: `seed || public key`
    pub fn to_keypair_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.secret_key.to_bytes());
        bytes[32..].copy_from_slice(&self.public_key.to_bytes());
        bytes
    }

    /// Solana address of this key pair
    pub fn solana_address(&self) -> String {
        self.public_key.solana_address()
    }

    /// Solana secret key export: base-58 of the 64-byte keypair encoding
    pub fn solana_secret(&self) -> String {
        bs58::encode(self.to_keypair_bytes()).into_string()
    }
}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519KeyPair")
            .field("public_key", &self.public_key)
            .finish()
    }
}
