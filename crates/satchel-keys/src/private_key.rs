//! Network-scoped secp256k1 private key with WIF serialization.
//!
//! Wraps a k256 signing key and binds it to the network it was generated
//! for; the binding survives serialization through the WIF version byte.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;

use crate::address::Address;
use crate::hash::sha256d;
use crate::network::Network;
use crate::public_key::PublicKey;
use crate::KeyError;

/// Length of the raw private key scalar in bytes.
const SCALAR_LEN: usize = 32;

/// Compression flag byte appended to the WIF payload; this wallet only
/// produces compressed public keys.
const COMPRESS_MAGIC: u8 = 0x01;

/// A secp256k1 private key bound to a network.
///
/// The canonical string form is compressed WIF; `from_wif` recovers both
/// the scalar and the network it was serialized for.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    inner: SigningKey,
    network: Network,
}

impl PrivateKey {
    /// Generate a new random key for `network` using the OS RNG.
    pub fn generate(network: Network) -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
            network,
        }
    }

    /// Create a key from a raw 32-byte scalar.
    ///
    /// Fails if the scalar is zero or not below the curve order.
    pub fn from_bytes(bytes: &[u8], network: Network) -> Result<Self, KeyError> {
        if bytes.len() != SCALAR_LEN {
            return Err(KeyError::InvalidKey(format!(
                "expected {} bytes, got {}",
                SCALAR_LEN,
                bytes.len()
            )));
        }
        let inner = SigningKey::from_bytes(bytes.into())
            .map_err(|e| KeyError::InvalidKey(e.to_string()))?;
        Ok(PrivateKey { inner, network })
    }

    /// Parse a compressed or uncompressed WIF string.
    ///
    /// Validates the Base58Check checksum and recovers the network from
    /// the version byte.
    pub fn from_wif(wif: &str) -> Result<Self, KeyError> {
        let decoded = bs58::decode(wif)
            .into_vec()
            .map_err(|e| KeyError::InvalidWif(e.to_string()))?;

        // prefix(1) + scalar(32) + [compress flag(1)] + checksum(4)
        let compressed = match decoded.len() {
            38 => {
                if decoded[33] != COMPRESS_MAGIC {
                    return Err(KeyError::InvalidWif(
                        "invalid compression flag".to_string(),
                    ));
                }
                true
            }
            37 => false,
            other => {
                return Err(KeyError::InvalidWif(format!("invalid length {other}")));
            }
        };

        let payload_end = if compressed { 34 } else { 33 };
        let checksum = sha256d(&decoded[..payload_end]);
        if checksum[..4] != decoded[payload_end..] {
            return Err(KeyError::ChecksumMismatch);
        }

        let network = Network::from_wif_prefix(decoded[0]).ok_or_else(|| {
            KeyError::InvalidWif(format!("unknown version byte 0x{:02x}", decoded[0]))
        })?;

        Self::from_bytes(&decoded[1..1 + SCALAR_LEN], network)
    }

    /// Encode as a compressed WIF string with this key's network prefix.
    ///
    /// This is the canonical serialized form; `from_wif` round-trips it.
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(1 + SCALAR_LEN + 1 + 4);
        payload.push(self.network.wif_prefix());
        payload.extend_from_slice(&self.to_bytes());
        payload.push(COMPRESS_MAGIC);

        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum[..4]);

        bs58::encode(payload).into_string()
    }

    /// The raw 32-byte big-endian scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// The network this key is scoped to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(*self.inner.verifying_key())
    }

    /// The P2PKH address for this key on its network.
    ///
    /// Pure function of the key; equal keys yield equal addresses.
    pub fn address(&self) -> Address {
        Address::from_public_key(&self.public_key(), self.network)
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        let mut bytes = self.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network && self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wif_roundtrip_both_networks() {
        for network in [Network::Mainnet, Network::Testnet] {
            let key = PrivateKey::generate(network);
            let wif = key.to_wif();
            let parsed = PrivateKey::from_wif(&wif).unwrap();
            assert_eq!(parsed, key);
            assert_eq!(parsed.network(), network);
            assert_eq!(parsed.to_wif(), wif);
        }
    }

    #[test]
    fn test_network_recovered_from_wif_prefix() {
        let key = PrivateKey::generate(Network::Testnet);
        let parsed = PrivateKey::from_wif(&key.to_wif()).unwrap();
        assert_eq!(parsed.network(), Network::Testnet);
    }

    #[test]
    fn test_from_wif_rejects_malformed_input() {
        // not base58
        assert!(PrivateKey::from_wif("0OIl").is_err());
        // valid base58, wrong length
        assert!(PrivateKey::from_wif("3yZe7d").is_err());
        // corrupted character breaks the checksum
        let wif = PrivateKey::generate(Network::Mainnet).to_wif();
        let mut corrupted = wif.into_bytes();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == b'a' { b'b' } else { b'a' };
        assert!(PrivateKey::from_wif(std::str::from_utf8(&corrupted).unwrap()).is_err());
    }

    #[test]
    fn test_zero_scalar_rejected() {
        assert!(PrivateKey::from_bytes(&[0u8; 32], Network::Mainnet).is_err());
    }

    #[test]
    fn test_known_wif_vector() {
        // Key of scalar 1, mainnet, compressed
        let mut scalar = [0u8; 32];
        scalar[31] = 1;
        let key = PrivateKey::from_bytes(&scalar, Network::Mainnet).unwrap();
        assert_eq!(
            key.to_wif(),
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
        );
    }

    #[test]
    fn test_equal_keys_equal_addresses() {
        let key = PrivateKey::generate(Network::Mainnet);
        let same = PrivateKey::from_wif(&key.to_wif()).unwrap();
        assert_eq!(key.address(), same.address());

        let other = PrivateKey::generate(Network::Mainnet);
        assert_ne!(key.address(), other.address());
    }
}
