//! Error type for wallet operations.
//!
//! Every collaborator failure is passed through unmodified; the wallet
//! performs no retries and swallows nothing.

use satchel_explorer::ExplorerError;
use satchel_keys::KeyError;
use satchel_store::StoreError;

use crate::builder::BuilderError;

/// Errors that can occur during wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// A key, address, or signature operation failed.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// The key store rejected a read or write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The explorer could not be reached or answered nonsense.
    #[error(transparent)]
    Explorer(#[from] ExplorerError),

    /// The transaction builder failed; surfaced unchanged.
    #[error(transparent)]
    Builder(#[from] BuilderError),
}
