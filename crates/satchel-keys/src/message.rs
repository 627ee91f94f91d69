//! Bitcoin signed-message scheme.
//!
//! Messages are framed with the `"Bitcoin Signed Message:\n"` magic and
//! varint lengths, hashed with SHA-256d, and signed with a 65-byte
//! compact recoverable ECDSA signature carried as base64. Verification
//! recovers the public key and compares its hash160 against the
//! claimed address, so a signature proves control of the address.

use base64::Engine;
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, VerifyingKey};

use crate::address::Address;
use crate::hash::sha256d;
use crate::private_key::PrivateKey;
use crate::public_key::PublicKey;
use crate::KeyError;

/// Magic prefix mixed into every signed-message digest.
const MESSAGE_MAGIC: &[u8] = b"Bitcoin Signed Message:\n";

/// Compact-signature header base: 27, plus the recovery id, plus 4 for
/// compressed public keys.
const COMPACT_HEADER_BASE: u8 = 27;
const COMPACT_COMPRESSED_FLAG: u8 = 4;

/// Sign `message` with `key`, returning the base64 compact signature.
pub fn sign(message: &[u8], key: &PrivateKey) -> Result<String, KeyError> {
    let digest = message_digest(message);

    let (signature, recovery_id) = key
        .signing_key()
        .sign_prehash_recoverable(&digest)
        .map_err(|e| KeyError::InvalidSignature(e.to_string()))?;

    let mut compact = [0u8; 65];
    compact[0] = COMPACT_HEADER_BASE + recovery_id.to_byte() + COMPACT_COMPRESSED_FLAG;
    compact[1..].copy_from_slice(&signature.to_bytes());

    Ok(base64::engine::general_purpose::STANDARD.encode(compact))
}

/// Verify a base64 compact signature over `message` against `address`.
///
/// Returns `Ok(false)` when the signature is well-formed but was not
/// produced by the address's key; structural problems are errors.
pub fn verify(message: &[u8], signature: &str, address: &Address) -> Result<bool, KeyError> {
    let compact = base64::engine::general_purpose::STANDARD
        .decode(signature)
        .map_err(|e| KeyError::InvalidSignature(e.to_string()))?;

    if compact.len() != 65 {
        return Err(KeyError::InvalidSignature(format!(
            "compact signature is {} bytes, expected 65",
            compact.len()
        )));
    }

    let header = compact[0];
    if header < COMPACT_HEADER_BASE {
        return Err(KeyError::InvalidSignature(format!(
            "invalid header byte {header}"
        )));
    }
    let recovery_id = RecoveryId::from_byte((header - COMPACT_HEADER_BASE) & !COMPACT_COMPRESSED_FLAG)
        .ok_or_else(|| KeyError::InvalidSignature("invalid recovery id".to_string()))?;

    let signature = EcdsaSignature::from_slice(&compact[1..])
        .map_err(|e| KeyError::InvalidSignature(e.to_string()))?;

    let digest = message_digest(message);
    let recovered = VerifyingKey::recover_from_prehash(&digest, &signature, recovery_id)
        .map_err(|e| KeyError::InvalidSignature(e.to_string()))?;

    let public_key = PublicKey::from_verifying_key(recovered);
    Ok(&public_key.hash160() == address.public_key_hash())
}

/// SHA-256d over the magic-framed message.
fn message_digest(message: &[u8]) -> [u8; 32] {
    let mut framed = Vec::with_capacity(1 + MESSAGE_MAGIC.len() + 9 + message.len());
    write_varint(&mut framed, MESSAGE_MAGIC.len() as u64);
    framed.extend_from_slice(MESSAGE_MAGIC);
    write_varint(&mut framed, message.len() as u64);
    framed.extend_from_slice(message);
    sha256d(&framed)
}

/// Bitcoin variable-length integer encoding.
fn write_varint(out: &mut Vec<u8>, value: u64) {
    match value {
        0..=0xfc => out.push(value as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x10000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}
