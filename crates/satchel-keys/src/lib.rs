//! Key, address, and message-signing primitives for the satchel wallet.
//!
//! A deliberately small surface over secp256k1: network-scoped private
//! keys with WIF serialization, P2PKH addresses, and the Bitcoin
//! signed-message scheme. Everything a single-key wallet needs and
//! nothing more.

pub mod address;
pub mod hash;
pub mod message;
pub mod network;
pub mod private_key;
pub mod public_key;

mod error;
pub use error::KeyError;

pub use address::Address;
pub use network::Network;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
