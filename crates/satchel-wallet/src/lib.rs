//! Single-key wallet built from injected collaborators.
//!
//! A [`Wallet`] owns the lifecycle of one private key per network
//! (created lazily, persisted through a [`satchel_store::Storage`]
//! medium, replaceable via restore), derives its address, signs
//! messages, reads its balance through a [`satchel_explorer::UtxoProvider`],
//! and delegates transaction assembly to a [`TxBuilder`].
//!
//! One logical thread of control per wallet instance: the async
//! operations suspend only on the outbound network request and no
//! internal locking is provided. Callers needing concurrent access
//! serialize it externally.

pub mod builder;
pub mod types;
pub mod wallet;

mod error;
pub use error::WalletError;

pub use builder::{BuilderError, TxBuilder};
pub use types::{BuildOptions, BuildRequest, Pay, PayTo, Payee};
pub use wallet::{Wallet, WalletConfig};
