#![deny(missing_docs)]

//! satchel - minimal single-key BSV wallet SDK.
//!
//! Re-exports all satchel components for convenient single-crate usage.

pub use satchel_explorer as explorer;
pub use satchel_keys as keys;
pub use satchel_store as store;
pub use satchel_wallet as wallet;
