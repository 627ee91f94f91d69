//! secp256k1 public key in compressed SEC1 form.

use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::hash::hash160;
use crate::KeyError;

/// A secp256k1 public key.
///
/// Always serialized compressed (33 bytes); addresses are derived from
/// the hash160 of that encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse a public key from SEC1 bytes (compressed or uncompressed).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let inner = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| KeyError::InvalidKey(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    /// The 33-byte compressed SEC1 encoding.
    pub fn to_compressed(&self) -> [u8; 33] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; 33];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// hash160 of the compressed encoding, the P2PKH public key hash.
    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.to_compressed())
    }

    pub(crate) fn from_verifying_key(inner: VerifyingKey) -> Self {
        PublicKey { inner }
    }
}
