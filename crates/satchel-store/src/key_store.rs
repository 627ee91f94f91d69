//! Network-scoped key lifecycle on top of a [`Storage`] medium.

use satchel_keys::{Network, PrivateKey};

use crate::error::StoreError;
use crate::storage::Storage;

/// Storage key for the one-way backup flag.
const BACKUP_FLAG: &str = "didBackup";

/// Persists one private key per network and the backup acknowledgement.
///
/// Keys live under `"<network>PrivateKey"` in their canonical WIF form.
/// `get_or_create` is idempotent: absent an intervening [`restore`],
/// repeated calls return the byte-identical key.
///
/// [`restore`]: KeyStore::restore
#[derive(Debug)]
pub struct KeyStore<S> {
    storage: S,
}

impl<S: Storage> KeyStore<S> {
    /// Wrap a storage medium.
    pub fn new(storage: S) -> Self {
        KeyStore { storage }
    }

    /// Retrieve the key for `network`, generating and persisting a fresh
    /// one on first access.
    ///
    /// A stored value that no longer parses, or that encodes a different
    /// network than its slot claims, is an error rather than a trigger
    /// for silent regeneration.
    pub fn get_or_create(&mut self, network: Network) -> Result<PrivateKey, StoreError> {
        let slot = Self::key_slot(network);

        match self.storage.get_item(&slot) {
            Some(wif) => {
                let key = PrivateKey::from_wif(&wif)?;
                if key.network() != network {
                    return Err(StoreError::WrongNetwork {
                        requested: network,
                        found: key.network(),
                    });
                }
                Ok(key)
            }
            None => {
                let key = PrivateKey::generate(network);
                self.storage.set_item(&slot, &key.to_wif());
                Ok(key)
            }
        }
    }

    /// Overwrite the stored key for `network` with `wif`.
    ///
    /// The input must parse as a valid key and must encode the network
    /// of the slot it is restored into.
    pub fn restore(&mut self, wif: &str, network: Network) -> Result<(), StoreError> {
        let key = PrivateKey::from_wif(wif)?;
        if key.network() != network {
            return Err(StoreError::WrongNetwork {
                requested: network,
                found: key.network(),
            });
        }
        // Re-serialize so the slot always holds the canonical form.
        self.storage.set_item(&Self::key_slot(network), &key.to_wif());
        Ok(())
    }

    /// Set the persisted backup flag. One-way: there is no unset.
    pub fn mark_backed_up(&mut self) {
        self.storage.set_item(BACKUP_FLAG, "true");
    }

    /// Whether the backup flag has ever been set on this storage.
    pub fn is_backed_up(&self) -> bool {
        self.storage.get_item(BACKUP_FLAG).as_deref() == Some("true")
    }

    fn key_slot(network: Network) -> String {
        format!("{network}PrivateKey")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut store = KeyStore::new(MemoryStorage::new());
        for network in [Network::Mainnet, Network::Testnet] {
            let first = store.get_or_create(network).unwrap();
            let second = store.get_or_create(network).unwrap();
            assert_eq!(first.to_wif(), second.to_wif());
        }
    }

    #[test]
    fn test_networks_have_distinct_slots() {
        let mut store = KeyStore::new(MemoryStorage::new());
        let mainnet = store.get_or_create(Network::Mainnet).unwrap();
        let testnet = store.get_or_create(Network::Testnet).unwrap();
        assert_ne!(mainnet.to_bytes(), testnet.to_bytes());

        // Neither creation disturbed the other slot.
        assert_eq!(
            store.get_or_create(Network::Mainnet).unwrap().to_wif(),
            mainnet.to_wif()
        );
    }

    #[test]
    fn test_restore_overrides_stored_key() {
        let mut store = KeyStore::new(MemoryStorage::new());
        let original = store.get_or_create(Network::Testnet).unwrap();

        let replacement = PrivateKey::generate(Network::Testnet);
        store.restore(&replacement.to_wif(), Network::Testnet).unwrap();

        let current = store.get_or_create(Network::Testnet).unwrap();
        assert_eq!(current.to_wif(), replacement.to_wif());
        assert_ne!(current.to_wif(), original.to_wif());
    }

    #[test]
    fn test_restore_rejects_garbage() {
        let mut store = KeyStore::new(MemoryStorage::new());
        let result = store.restore("definitely-not-a-key", Network::Mainnet);
        assert!(matches!(result, Err(StoreError::InvalidKeyFormat(_))));
    }

    #[test]
    fn test_restore_rejects_foreign_network_key() {
        let mut store = KeyStore::new(MemoryStorage::new());
        let mainnet_key = PrivateKey::generate(Network::Mainnet);
        let result = store.restore(&mainnet_key.to_wif(), Network::Testnet);
        assert!(matches!(
            result,
            Err(StoreError::WrongNetwork {
                requested: Network::Testnet,
                found: Network::Mainnet,
            })
        ));
    }

    #[test]
    fn test_corrupt_stored_value_surfaces_as_error() {
        let mut storage = MemoryStorage::new();
        storage.set_item("testnetPrivateKey", "corrupted");
        let mut store = KeyStore::new(storage);
        assert!(matches!(
            store.get_or_create(Network::Testnet),
            Err(StoreError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn test_backup_flag_is_one_way() {
        let mut store = KeyStore::new(MemoryStorage::new());
        assert!(!store.is_backed_up());
        store.mark_backed_up();
        assert!(store.is_backed_up());
        store.mark_backed_up();
        assert!(store.is_backed_up());
    }

    #[test]
    fn test_key_survives_across_store_handles() {
        let mut storage = MemoryStorage::new();
        let wif;
        {
            let mut store = KeyStore::new(&mut storage);
            wif = store.get_or_create(Network::Mainnet).unwrap().to_wif();
        }
        let mut reopened = KeyStore::new(&mut storage);
        assert_eq!(reopened.get_or_create(Network::Mainnet).unwrap().to_wif(), wif);
    }
}
