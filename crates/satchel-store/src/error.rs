//! Error types for key-store operations.

use satchel_keys::{KeyError, Network};

/// Errors that can occur when persisting or retrieving keys.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input (or a stored value) could not be parsed as a valid key.
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(#[from] KeyError),

    /// A valid key was presented for the wrong network slot.
    #[error("key belongs to {found}, not {requested}")]
    WrongNetwork {
        /// The network slot being written or read.
        requested: Network,
        /// The network the key's serialized form encodes.
        found: Network,
    },
}
