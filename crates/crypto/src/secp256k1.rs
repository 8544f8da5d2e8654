//! Secp256k1 key pairs for Ethereum wallets
//!
//! This module provides:
//! - EVM address derivation (keccak256(uncompressed_pubkey[1..])[12..])
//! - EIP-55 checksummed address rendering
//!
//! Uses the k256 crate for secp256k1 curve operations.

use crate::error::CryptoError;
use alloy_primitives::{keccak256, Address};
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey as K256SecretKey};

/// Secp256k1 secret key (32 bytes scalar)
#[derive(Clone)]
pub struct Secp256k1SecretKey(K256SecretKey);

impl Secp256k1SecretKey {
    /// Load from raw bytes (32 bytes scalar)
    ///
    /// Fails if the scalar is zero or not below the curve order.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        K256SecretKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidSecretKey)
    }

    /// Serialize to bytes (32 bytes scalar)
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes().into()
    }

    /// Get the corresponding public key
    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey(self.0.public_key())
    }
}

impl std::fmt::Debug for Secp256k1SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Secp256k1 public key
#[derive(Clone, PartialEq, Eq)]
pub struct Secp256k1PublicKey(k256::PublicKey);

impl Secp256k1PublicKey {
    /// Serialize to compressed bytes (33 bytes)
    pub fn to_bytes(&self) -> [u8; 33] {
        let encoded = self.0.to_encoded_point(true);
        let mut result = [0u8; 33];
        result.copy_from_slice(encoded.as_bytes());
        result
    }

    /// Serialize to uncompressed bytes (65 bytes, with 0x04 prefix)
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        let encoded = self.0.to_encoded_point(false);
        let mut result = [0u8; 65];
        result.copy_from_slice(encoded.as_bytes());
        result
    }

    /// Derive EVM address from this public key
    ///
    /// Uses keccak256(uncompressed_pubkey[1..])[12..] (20 bytes)
    pub fn evm_address(&self) -> Address {
        let uncompressed = self.to_uncompressed_bytes();
        // Skip the 0x04 prefix byte
        let hash = keccak256(&uncompressed[1..]);
        Address::from_slice(&hash[12..])
    }
}

impl std::fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Secp256k1PublicKey({})", hex::encode(&bytes[..8]))
    }
}

/// Secp256k1 key pair (convenience wrapper)
#[derive(Clone)]
pub struct Secp256k1KeyPair {
    pub secret_key: Secp256k1SecretKey,
    pub public_key: Secp256k1PublicKey,
}

impl Secp256k1KeyPair {
    /// Create from secret key
    pub fn from_secret_key(secret_key: Secp256k1SecretKey) -> Self {
        let public_key = secret_key.public_key();
        Self {
            secret_key,
            public_key,
        }
    }

    /// Get the EVM address derived from this key pair
    pub fn evm_address(&self) -> Address {
        self.public_key.evm_address()
    }

    /// EIP-55 mixed-case address, `0x`-prefixed
    pub fn checksum_address(&self) -> String {
        self.evm_address().to_checksum(None)
    }

    /// Private key as `0x`-prefixed lowercase hex
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.secret_key.to_bytes()))
    }
}

impl std::fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1KeyPair")
            .field("public_key", &self.public_key)
            .field("evm_address", &self.evm_address())
            .finish()
    }
}
