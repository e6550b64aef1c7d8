//! In-memory storage adapter.

use std::collections::HashMap;

use serde_json::Value;

use super::Storage;
use crate::error::Result;

/// Storage backed by a `HashMap`; nothing outlives the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, Value>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access to a saved value, handy in assertions.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<()> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn copy(&mut self, from: &str, to: &str) -> Result<bool> {
        match self.entries.get(from).cloned() {
            Some(value) => {
                self.entries.insert(to.to_string(), value);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_load_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.load("careerData").unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites() {
        let mut storage = MemoryStorage::new();
        storage.save("k", &json!({ "a": 1 })).unwrap();
        storage.save("k", &json!({ "a": 2 })).unwrap();

        assert_eq!(storage.load("k").unwrap(), Some(json!({ "a": 2 })));
    }

    #[test]
    fn test_copy() {
        let mut storage = MemoryStorage::new();
        assert!(!storage.copy("missing", "backup").unwrap());
        assert!(storage.get("backup").is_none());

        storage.save("k", &json!([1, 2])).unwrap();
        assert!(storage.copy("k", "backup").unwrap());
        assert_eq!(storage.get("backup"), Some(&json!([1, 2])));
        assert_eq!(storage.get("k"), Some(&json!([1, 2])));
    }
}
