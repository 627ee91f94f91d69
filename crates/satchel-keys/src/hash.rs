//! Hash primitives used for addresses, WIF checksums, and message digests.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 of the input.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Double SHA-256, the checksum and message-digest hash.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160(SHA-256(data)), the public-key-hash function behind
/// P2PKH addresses.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(sha256(data));
    let digest = hasher.finalize();
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest);
    out
}
