//! Explorer data types: configuration, wire shapes, and the canonical
//! unspent-output record.

use serde::{Deserialize, Serialize};

use satchel_keys::Network;

/// Configuration for an [`ExplorerClient`](crate::ExplorerClient).
///
/// Endpoints are static per network; the same provider and response
/// shape serve both networks.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Base URL for mainnet lookups.
    pub mainnet_url: String,
    /// Base URL for testnet lookups.
    pub testnet_url: String,
}

impl ExplorerConfig {
    /// The base URL serving the given network.
    pub fn base_url(&self, network: Network) -> &str {
        match network {
            Network::Mainnet => &self.mainnet_url,
            Network::Testnet => &self.testnet_url,
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            mainnet_url: "https://api.whatsonchain.com/v1/bsv/main".to_string(),
            testnet_url: "https://api.whatsonchain.com/v1/bsv/test".to_string(),
        }
    }
}

/// One unspent output as the explorer reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnspentOutput {
    /// Funding transaction id.
    pub tx_hash: String,
    /// Output index within the funding transaction.
    pub tx_pos: u32,
    /// Value in satoshis.
    pub value: u64,
    /// Block height the output was confirmed at; 0 while unconfirmed.
    #[serde(default)]
    pub height: u64,
}

/// A canonical unspent output, immutable once produced.
///
/// The `script` is always reconstructed from the owning address, never
/// copied from the remote response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    /// Funding transaction id.
    pub txid: String,
    /// Output index within the funding transaction.
    pub vout: u32,
    /// Value in satoshis.
    pub satoshis: u64,
    /// Hex-encoded P2PKH locking script for the owning address.
    pub script: String,
}
