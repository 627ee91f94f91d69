#![deny(missing_docs)]

//! # satchel-explorer
//!
//! Async HTTP client for the WhatsOnChain block explorer, used to look
//! up the unspent outputs funding a wallet address.
//!
//! Responses are normalized into the canonical [`Utxo`] form: sorted
//! ascending by value (so downstream coin selection can spend smallest
//! first) with the locking script rebuilt from the address instead of
//! trusted from the remote payload.
//!
//! # Example
//!
//! ```no_run
//! use satchel_explorer::{ExplorerClient, ExplorerConfig};
//! use satchel_keys::Address;
//!
//! # async fn example() -> Result<(), satchel_explorer::ExplorerError> {
//! let client = ExplorerClient::new(ExplorerConfig::default());
//! let address = Address::from_string("mtdruWYVEV1wz5yL7GvpBj4MgifCB7yhPd").unwrap();
//!
//! let utxos = client.fetch_unspent(&address).await?;
//! println!("spendable outputs: {}", utxos.len());
//!
//! let balance = client.balance(&address).await?;
//! println!("balance: {balance} satoshis");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::{ExplorerClient, UtxoProvider};
pub use error::ExplorerError;
pub use types::{ExplorerConfig, UnspentOutput, Utxo};
