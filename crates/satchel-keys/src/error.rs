//! Error types for key and address operations.

/// Errors that can occur when handling keys, addresses, or signatures.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The scalar is zero, out of range, or otherwise not a valid key.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// A WIF string could not be decoded.
    #[error("invalid WIF: {0}")]
    InvalidWif(String),

    /// Base58Check checksum did not match.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// An address string could not be decoded.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A signature could not be parsed or recovered.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
}
