//! The wallet entity: key lifecycle, identity, balance, and
//! transaction delegation over injected collaborators.

use satchel_explorer::{ExplorerConfig, Utxo, UtxoProvider};
use satchel_keys::{message, Address, Network, PrivateKey};
use satchel_store::{KeyStore, Storage};

use crate::builder::TxBuilder;
use crate::error::WalletError;
use crate::types::{BuildOptions, BuildRequest, Pay, Payee};

/// Default fee rate in satoshis per byte.
///
/// Accepted as-is and forwarded to the builder; fee policy (including
/// any minimum relay rate) belongs to the builder.
pub const DEFAULT_FEE_RATE: f64 = 0.5;

/// How to construct a [`Wallet`].
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Network the wallet operates on.
    pub network: Network,
    /// Fee rate in satoshis per byte.
    pub feeb: f64,
    /// A WIF key to restore at construction, replacing whatever the
    /// storage holds for this network.
    pub private_key: Option<String>,
    /// Explorer endpoint forwarded to the builder; defaults to the
    /// public endpoint for `network`.
    pub rpc: Option<String>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            feeb: DEFAULT_FEE_RATE,
            private_key: None,
            rpc: None,
        }
    }
}

/// A single-key wallet.
///
/// Owns the lifecycle of its private key (creation, persistence,
/// retrieval) but not the storage medium, chain view, or transaction
/// assembly, which are injected. The active key for the configured
/// network is stable across calls until [`restore`](Wallet::restore)
/// overwrites it.
#[derive(Debug)]
pub struct Wallet<S, P, B> {
    store: KeyStore<S>,
    provider: P,
    builder: B,
    network: Network,
    feeb: f64,
    rpc: String,
    /// Transient: whether the unrecoverable-key warning fired for this
    /// instance. Distinct from the persisted backup flag.
    warned: bool,
}

impl<S: Storage, P: UtxoProvider, B: TxBuilder> Wallet<S, P, B> {
    /// Build a wallet over its collaborators.
    ///
    /// When `config.private_key` is set, it is restored into the
    /// network's storage slot before first use.
    pub fn new(
        config: WalletConfig,
        storage: S,
        provider: P,
        builder: B,
    ) -> Result<Self, WalletError> {
        let rpc = config.rpc.unwrap_or_else(|| {
            ExplorerConfig::default()
                .base_url(config.network)
                .to_string()
        });

        let mut wallet = Wallet {
            store: KeyStore::new(storage),
            provider,
            builder,
            network: config.network,
            feeb: config.feeb,
            rpc,
            warned: false,
        };

        if let Some(wif) = config.private_key {
            wallet.restore(&wif)?;
        }

        Ok(wallet)
    }

    /// The network this wallet operates on.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The fee rate in satoshis per byte.
    pub fn fee_rate(&self) -> f64 {
        self.feeb
    }

    /// The explorer endpoint forwarded to the builder.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// Access to the injected transaction builder.
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// The active private key, created and persisted on first access.
    ///
    /// The first retrieval of a wallet instance's lifetime warns that
    /// key loss is unrecoverable, unless a backup has been recorded.
    /// The warning fires at most once per instance.
    pub fn private_key(&mut self) -> Result<PrivateKey, WalletError> {
        let key = self.store.get_or_create(self.network)?;

        if !self.warned && !self.store.is_backed_up() {
            self.warned = true;
            tracing::warn!(
                network = %self.network,
                "no backup recorded for this wallet; if the private key is lost the funds \
                 are unrecoverable. Keep only small amounts here. Call backup() to record \
                 the key, or restore() to load an existing one"
            );
        }

        Ok(key)
    }

    /// The wallet's address. A pure function of the current key.
    pub fn address(&mut self) -> Result<Address, WalletError> {
        Ok(self.private_key()?.address())
    }

    /// Sign `message` with the wallet key, returning the base64
    /// signed-message signature verifiable against [`address`](Wallet::address).
    pub fn sign(&mut self, message: &[u8]) -> Result<String, WalletError> {
        let key = self.private_key()?;
        Ok(message::sign(message, &key)?)
    }

    /// Record the backup acknowledgement and return the WIF for the
    /// caller to write down somewhere safe.
    pub fn backup(&mut self) -> Result<String, WalletError> {
        let wif = self.private_key()?.to_wif();
        self.store.mark_backed_up();
        Ok(wif)
    }

    /// Whether a backup has ever been recorded on this storage.
    pub fn is_backed_up(&self) -> bool {
        self.store.is_backed_up()
    }

    /// Replace the active key with `wif`.
    pub fn restore(&mut self, wif: &str) -> Result<(), WalletError> {
        self.store.restore(wif, self.network)?;
        Ok(())
    }

    /// The current unspent snapshot for the wallet address, sorted
    /// ascending by value.
    pub async fn utxos(&mut self) -> Result<Vec<Utxo>, WalletError> {
        let address = self.address()?;
        Ok(self.provider.unspent(&address).await?)
    }

    /// Sum of satoshis over the current unspent snapshot. Never
    /// persisted; zero for an unfunded address.
    pub async fn balance(&mut self) -> Result<u64, WalletError> {
        Ok(self.utxos().await?.iter().map(|u| u.satoshis).sum())
    }

    /// Assemble a transaction through the injected builder.
    ///
    /// Converts `payees` to satoshis, takes `options.utxos` as the
    /// input set when provided (bypassing the fetch entirely), fetches
    /// the current snapshot otherwise, and forwards the request. The
    /// builder's result is returned without inspection.
    pub async fn build_tx(
        &mut self,
        data: Option<serde_json::Value>,
        payees: &[Payee],
        options: BuildOptions,
    ) -> Result<B::Tx, WalletError> {
        let to = payees.iter().map(Payee::pay_to).collect();
        let key = self.private_key()?;

        let utxos = match options.utxos {
            Some(utxos) => utxos,
            None => self.utxos().await?,
        };

        let request = BuildRequest {
            data,
            pay: Pay {
                rpc: self.rpc.clone(),
                key: key.to_wif(),
                to,
                feeb: self.feeb,
                utxos,
            },
            overrides: options.overrides,
        };

        Ok(self.builder.build_transaction(request).await?)
    }
}
