//! Explorer HTTP client and the injectable unspent-output capability.

use satchel_keys::Address;

use crate::error::ExplorerError;
use crate::types::{ExplorerConfig, UnspentOutput, Utxo};

/// Async unspent-output lookup, the capability a wallet needs from its
/// chain view. Implemented by [`ExplorerClient`]; substitute an
/// in-memory implementation in tests.
pub trait UtxoProvider {
    /// Fetch the unspent outputs funding `address`, sorted ascending by
    /// value.
    fn unspent(
        &self,
        address: &Address,
    ) -> impl std::future::Future<Output = Result<Vec<Utxo>, ExplorerError>> + Send;
}

/// HTTP client for the WhatsOnChain explorer API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    /// Client configuration.
    config: ExplorerConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl ExplorerClient {
    /// Create a new explorer client with the given configuration.
    pub fn new(config: ExplorerConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// The configured base URL for the network `address` belongs to.
    pub fn endpoint(&self, address: &Address) -> &str {
        self.config.base_url(address.network())
    }

    /// Fetch the unspent outputs funding `address`.
    ///
    /// The result is sorted ascending by satoshi value, and each
    /// output's locking script is rebuilt from the address rather than
    /// taken from the response. An address with no outputs yields an
    /// empty vector, not an error.
    pub async fn fetch_unspent(&self, address: &Address) -> Result<Vec<Utxo>, ExplorerError> {
        let url = format!("{}/address/{}/unspent", self.endpoint(address), address);
        tracing::debug!(%address, %url, "fetching unspent outputs");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ExplorerError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let mut outputs: Vec<UnspentOutput> = serde_json::from_str(&text)?;

        outputs.sort_by_key(|o| o.value);

        let script = address.locking_script_hex();
        Ok(outputs
            .into_iter()
            .map(|o| Utxo {
                txid: o.tx_hash,
                vout: o.tx_pos,
                satoshis: o.value,
                script: script.clone(),
            })
            .collect())
    }

    /// Sum of satoshi values over the current unspent snapshot.
    ///
    /// Always computed from [`fetch_unspent`](Self::fetch_unspent),
    /// never cached; zero for an address with no outputs.
    pub async fn balance(&self, address: &Address) -> Result<u64, ExplorerError> {
        let utxos = self.fetch_unspent(address).await?;
        Ok(utxos.iter().map(|u| u.satoshis).sum())
    }
}

impl UtxoProvider for ExplorerClient {
    async fn unspent(&self, address: &Address) -> Result<Vec<Utxo>, ExplorerError> {
        self.fetch_unspent(address).await
    }
}
