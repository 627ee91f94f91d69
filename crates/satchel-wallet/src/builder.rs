//! The transaction-builder capability.
//!
//! Transaction assembly (input selection against the provided UTXOs,
//! fee computation, signing, serialization) happens entirely behind
//! this boundary; the wallet only prepares the request and passes the
//! result through.

use crate::types::BuildRequest;

/// An opaque failure from the transaction builder, surfaced unchanged.
#[derive(Debug, thiserror::Error)]
#[error("builder failure: {0}")]
pub struct BuilderError(#[from] pub Box<dyn std::error::Error + Send + Sync>);

impl BuilderError {
    /// Wrap any error (or message) as a builder failure.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        BuilderError(err.into())
    }
}

/// Async transaction assembly from a [`BuildRequest`].
///
/// The produced transaction type is the builder's own; the wallet
/// returns it without inspection.
pub trait TxBuilder {
    /// The transaction type this builder produces.
    type Tx;

    /// Assemble a transaction for `request`.
    fn build_transaction(
        &self,
        request: BuildRequest,
    ) -> impl std::future::Future<Output = Result<Self::Tx, BuilderError>> + Send;
}
