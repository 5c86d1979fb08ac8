use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::StoreError;

/// In-memory storage, lost on drop
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("SavedBets", "[]".to_string()).unwrap();
        store.set("SavedBets", "[1]".to_string()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("SavedBets").unwrap(), Some("[1]".to_string()));
    }
}
