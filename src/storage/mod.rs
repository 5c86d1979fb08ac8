//! Key-value storage backends
//!
//! The bet store persists through the [`KeyValueStore`] trait so it can run
//! against an in-memory map in tests and a JSON file on disk in the CLI.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// String values stored by key
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any prior value
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_through<S: KeyValueStore>(mut store: S) {
        store.set("k", "v".to_string()).unwrap();
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut store = MemoryStore::new();
        write_through(&mut store);
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v".to_string()).unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }
}
