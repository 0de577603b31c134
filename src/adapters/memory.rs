use crate::domain::ports::Storage;
use crate::utils::error::{Result, ShopError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    values: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

/// In-memory `Storage`. Clones share the same map, so a test can keep a
/// handle while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Seeds a value without counting it as a write.
    pub fn put(&self, key: &str, value: &str) {
        self.lock().values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    /// Number of successful `write_value` calls.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Makes every following `write_value` fail until switched off again.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }
}

impl Storage for MemoryStorage {
    fn read_value(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write_value(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(ShopError::PersistenceError {
                key: key.to_string(),
                message: "storage is rejecting writes".to_string(),
            });
        }
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_values() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.write_value("cart", "{}").unwrap();
        assert_eq!(handle.read_value("cart").unwrap().as_deref(), Some("{}"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn test_failing_writes_leave_previous_value() {
        let storage = MemoryStorage::new();
        storage.put("cart", r#"{"1":1}"#);
        storage.fail_writes(true);
        assert!(storage.write_value("cart", r#"{"1":2}"#).is_err());
        assert_eq!(storage.get("cart").as_deref(), Some(r#"{"1":1}"#));
        assert_eq!(storage.write_count(), 0);
    }
}
