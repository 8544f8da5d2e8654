//! Hierarchical deterministic key derivation from a BIP-39 seed
//!
//! - secp256k1 (Ethereum): BIP-32 via the `bip32` crate, any path
//! - Ed25519 (Solana): SLIP-0010, hardened components only

use super::error::{MnemonicError, MnemonicResult};
use super::seed::Seed;
use crate::ed25519::Ed25519KeyPair;
use crate::secp256k1::{Secp256k1KeyPair, Secp256k1SecretKey};
use bip32::XPrv;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use tracing::debug;
use walletgen_types::{Chain, Curve, DerivationPath, PrivateKey, Wallet};
use zeroize::Zeroize;

type HmacSha512 = Hmac<Sha512>;

/// HMAC key for the SLIP-0010 Ed25519 master node
const ED25519_MASTER_KEY: &[u8] = b"ed25519 seed";

/// Private key and chain code of one SLIP-0010 node
#[derive(Zeroize)]
#[zeroize(drop)]
struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    /// Split `I = IL || IR` into key and chain code
    fn from_hmac_output(mut output: [u8; 64]) -> Self {
        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);
        output.zeroize();
        Self { key, chain_code }
    }
}

/// Derive the wallet at `index` for `chain` along `m/44'/{coin}'/{index}'/0'`
///
/// This is the main entry point used by wallet sets.
///
/// # Example
///
/// ```rust
/// use walletgen_crypto::mnemonic::{derive_wallet, Seed};
/// use walletgen_types::Chain;
///
/// let seed = Seed::from_phrase(
///     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
/// ).unwrap();
///
/// let wallet = derive_wallet(&seed, Chain::Solana, 0).unwrap();
/// assert_eq!(wallet.address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
/// ```
///
/// # Errors
///
/// Returns `MnemonicError::InvalidPath` if `index >= 2^31` and
/// `MnemonicError::DerivationFailed` if an intermediate key is invalid.
pub fn derive_wallet(seed: &Seed, chain: Chain, index: u32) -> MnemonicResult<Wallet> {
    let path = DerivationPath::for_account(chain, index)?;

    let (address, private_key) = match chain.curve() {
        Curve::Ed25519 => {
            let keypair = derive_ed25519_key(seed, &path)?;
            (keypair.solana_address(), keypair.solana_secret())
        }
        Curve::Secp256k1 => {
            let keypair = derive_secp256k1_key(seed, &path)?;
            (keypair.checksum_address(), keypair.private_key_hex())
        }
    };

    debug!(%chain, index, %path, %address, "derived wallet");

    Ok(Wallet {
        chain,
        index,
        path,
        address,
        private_key: PrivateKey::new(private_key),
    })
}

/// Derive an Ed25519 key pair along a fully hardened path (SLIP-0010)
///
/// # Errors
///
/// Returns `MnemonicError::InvalidPath` if any component is not hardened
pub fn derive_ed25519_key(seed: &Seed, path: &DerivationPath) -> MnemonicResult<Ed25519KeyPair> {
    if !path.is_fully_hardened() {
        return Err(MnemonicError::InvalidPath(format!(
            "ed25519 derivation supports hardened components only: {}",
            path
        )));
    }

    let mut node = ExtendedKey::from_hmac_output(hmac_sha512(
        ED25519_MASTER_KEY,
        &[seed.as_bytes()],
    )?);
    for component in path.components() {
        let index = u32::from(component).to_be_bytes();
        let output = hmac_sha512(&node.chain_code, &[&[0u8], &node.key, &index])?;
        node = ExtendedKey::from_hmac_output(output);
    }

    Ok(Ed25519KeyPair::from_seed(&node.key))
}

/// Derive a secp256k1 key pair along any BIP-32 path
///
/// # Errors
///
/// Returns `MnemonicError::DerivationFailed` if the master key or an
/// intermediate key falls outside `[1, n)`
pub fn derive_secp256k1_key(
    seed: &Seed,
    path: &DerivationPath,
) -> MnemonicResult<Secp256k1KeyPair> {
    let xprv = XPrv::derive_from_path(seed.as_bytes(), path.as_bip32())
        .map_err(|e| MnemonicError::DerivationFailed(format!("{} at {}", e, path)))?;

    let mut bytes = xprv.to_bytes();
    let secret = Secp256k1SecretKey::from_bytes(&bytes).map_err(|_| {
        MnemonicError::DerivationFailed(format!("leaf key at {} is not a valid scalar", path))
    });
    bytes.zeroize();

    Ok(Secp256k1KeyPair::from_secret_key(secret?))
}

fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> MnemonicResult<[u8; 64]> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| MnemonicError::DerivationFailed(e.to_string()))?;
    for part in parts {
        mac.update(part);
    }
    let mut output = [0u8; 64];
    output.copy_from_slice(&mac.finalize().into_bytes());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test mnemonic (DO NOT USE IN PRODUCTION)
    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_seed() -> Seed {
        Seed::from_phrase(TEST_MNEMONIC).unwrap()
    }

    #[test]
    fn test_ethereum_standard_path_vector() {
        // m/44'/60'/0'/0/0 mixes hardened and normal steps
        let path: DerivationPath = "m/44'/60'/0'/0/0".parse().unwrap();
        let keypair = derive_secp256k1_key(&test_seed(), &path).unwrap();

        assert_eq!(
            keypair.checksum_address(),
            "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
        );
        assert_eq!(
            keypair.private_key_hex(),
            "0x1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
    }

    #[test]
    fn test_derive_wallet_ethereum() {
        let wallet = derive_wallet(&test_seed(), Chain::Ethereum, 0).unwrap();

        assert_eq!(wallet.chain, Chain::Ethereum);
        assert_eq!(wallet.index, 0);
        assert_eq!(wallet.path.to_string(), "m/44'/60'/0'/0'");
        assert_eq!(wallet.address, "0x1cC31E180CCA3a8698fD6f13765209EC7CB9E755");
        assert_eq!(
            wallet.private_key.expose(),
            "0x43ff9ebfdccfa25e3921d9500db2f946d46a525fa08004af7f98976d9706cd5c"
        );
    }

    #[test]
    fn test_derive_wallet_solana() {
        let wallet = derive_wallet(&test_seed(), Chain::Solana, 0).unwrap();

        assert_eq!(wallet.path.to_string(), "m/44'/501'/0'/0'");
        assert_eq!(wallet.address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");

        let secret = bs58::decode(wallet.private_key.expose()).into_vec().unwrap();
        assert_eq!(secret.len(), 64);
        assert_eq!(bs58::encode(&secret[32..]).into_string(), wallet.address);
    }

    #[test]
    fn test_deterministic_derivation() {
        let seed = test_seed();
        for chain in Chain::ALL {
            let a = derive_wallet(&seed, chain, 3).unwrap();
            let b = derive_wallet(&seed, chain, 3).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_different_indices_different_keys() {
        let seed = test_seed();
        let mut addresses = Vec::new();
        for index in 0..5 {
            let wallet = derive_wallet(&seed, Chain::Ethereum, index).unwrap();
            assert!(
                !addresses.contains(&wallet.address),
                "duplicate address for index {}",
                index
            );
            addresses.push(wallet.address);
        }
    }

    #[test]
    fn test_index_out_of_range() {
        let result = derive_wallet(&test_seed(), Chain::Solana, 0x8000_0000);
        assert!(matches!(result, Err(MnemonicError::InvalidPath(_))));
    }

    #[test]
    fn test_ed25519_rejects_normal_components() {
        let path: DerivationPath = "m/44'/501'/0'/0".parse().unwrap();
        let result = derive_ed25519_key(&test_seed(), &path);
        assert!(matches!(result, Err(MnemonicError::InvalidPath(_))));
    }

    #[test]
    fn test_secp256k1_normal_children() {
        // m/44'/60'/0'/0/1 is the second address of the common Ethereum layout
        let path: DerivationPath = "m/44'/60'/0'/0/1".parse().unwrap();
        let keypair = derive_secp256k1_key(&test_seed(), &path).unwrap();
        assert_eq!(
            keypair.checksum_address(),
            "0x6Fac4D18c912343BF86fa7049364Dd4E424Ab9C0"
        );
    }

    #[test]
    fn test_master_only_path() {
        let path: DerivationPath = "m".parse().unwrap();
        assert!(derive_secp256k1_key(&test_seed(), &path).is_ok());
        assert!(derive_ed25519_key(&test_seed(), &path).is_ok());
    }
}
