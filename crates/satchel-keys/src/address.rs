//! P2PKH address handling.
//!
//! Base58Check encoding with SHA-256d checksums, network discrimination
//! via the version byte, and construction of the canonical P2PKH locking
//! script for an address.

use std::fmt;

use crate::hash::sha256d;
use crate::network::Network;
use crate::public_key::PublicKey;
use crate::KeyError;

const OP_DUP: u8 = 0x76;
const OP_HASH160: u8 = 0xa9;
const OP_DATA_20: u8 = 0x14;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_CHECKSIG: u8 = 0xac;

/// A P2PKH address: a 20-byte public key hash plus its network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// The Base58Check string form.
    string: String,
    /// RIPEMD-160(SHA-256(compressed pubkey)).
    public_key_hash: [u8; 20],
    /// The network the version byte encodes.
    network: Network,
}

impl Address {
    /// Parse a Base58Check address string, validating length, checksum,
    /// and version byte.
    pub fn from_string(addr: &str) -> Result<Self, KeyError> {
        let decoded = bs58::decode(addr)
            .into_vec()
            .map_err(|_| KeyError::InvalidAddress(format!("bad character in '{addr}'")))?;

        if decoded.len() != 25 {
            return Err(KeyError::InvalidAddress(format!(
                "'{addr}' decodes to {} bytes, expected 25",
                decoded.len()
            )));
        }

        let checksum = sha256d(&decoded[..21]);
        if decoded[21..] != checksum[..4] {
            return Err(KeyError::ChecksumMismatch);
        }

        let network = Network::from_p2pkh_prefix(decoded[0]).ok_or_else(|| {
            KeyError::InvalidAddress(format!("unsupported version byte 0x{:02x}", decoded[0]))
        })?;

        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&decoded[1..21]);

        Ok(Address {
            string: addr.to_string(),
            public_key_hash: pkh,
            network,
        })
    }

    /// Derive the address for a public key on the given network.
    pub fn from_public_key(public_key: &PublicKey, network: Network) -> Self {
        Self::from_public_key_hash(public_key.hash160(), network)
    }

    /// Build an address directly from a 20-byte public key hash.
    pub fn from_public_key_hash(hash: [u8; 20], network: Network) -> Self {
        let mut payload = Vec::with_capacity(25);
        payload.push(network.p2pkh_prefix());
        payload.extend_from_slice(&hash);
        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum[..4]);

        Address {
            string: bs58::encode(&payload).into_string(),
            public_key_hash: hash,
            network,
        }
    }

    /// The 20-byte public key hash.
    pub fn public_key_hash(&self) -> &[u8; 20] {
        &self.public_key_hash
    }

    /// The network this address belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The Base58Check string form.
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// The canonical 25-byte P2PKH locking script for this address:
    /// `OP_DUP OP_HASH160 <pkh> OP_EQUALVERIFY OP_CHECKSIG`.
    pub fn locking_script(&self) -> Vec<u8> {
        let mut script = Vec::with_capacity(25);
        script.push(OP_DUP);
        script.push(OP_HASH160);
        script.push(OP_DATA_20);
        script.extend_from_slice(&self.public_key_hash);
        script.push(OP_EQUALVERIFY);
        script.push(OP_CHECKSIG);
        script
    }

    /// The locking script as lowercase hex.
    pub fn locking_script_hex(&self) -> String {
        hex::encode(self.locking_script())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}
