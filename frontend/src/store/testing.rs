use crate::store::{StorageBackend, StoreError, StoreResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Process-local map with the same contract as [`crate::store::WebStorage`].
#[derive(Default)]
pub struct MemoryBackend {
    items: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryBackend {
    fn check_available(&self) -> StoreResult<()> {
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, String> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}

/// Memory backend with failure injection and per-key write counters.
#[derive(Default)]
pub struct FlakyBackend {
    inner: MemoryBackend,
    unavailable: Cell<bool>,
    fail_writes_with_prefix: RefCell<Option<String>>,
    writes: RefCell<HashMap<String, usize>>,
}

impl FlakyBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Makes `set_item` and `remove_item` fail for keys starting with `prefix`.
    pub fn fail_writes_to(&self, prefix: &str) {
        *self.fail_writes_with_prefix.borrow_mut() = Some(prefix.to_string());
    }

    pub fn heal(&self) {
        *self.fail_writes_with_prefix.borrow_mut() = None;
        self.unavailable.set(false);
    }

    pub fn write_count(&self, key: &str) -> usize {
        self.writes.borrow().get(key).copied().unwrap_or(0)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).unwrap()
    }

    /// Writes straight into the map, bypassing counters and injected failures.
    pub fn plant(&self, key: &str, value: &str) {
        self.inner.set_item(key, value).unwrap();
    }

    fn check_write(&self, key: &str) -> Result<(), String> {
        if self.unavailable.get() {
            return Err("storage disabled".to_string());
        }
        match &*self.fail_writes_with_prefix.borrow() {
            Some(prefix) if key.starts_with(prefix.as_str()) => {
                Err("QuotaExceededError: the quota has been exceeded".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl StorageBackend for FlakyBackend {
    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.get() {
            Err(StoreError::StoreUnavailable("storage disabled".to_string()))
        } else {
            Ok(())
        }
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        if self.unavailable.get() {
            return Err("storage disabled".to_string());
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.check_write(key)?;
        *self.writes.borrow_mut().entry(key.to_string()).or_insert(0) += 1;
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.check_write(key)?;
        self.inner.remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>, String> {
        if self.unavailable.get() {
            return Err("storage disabled".to_string());
        }
        self.inner.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_overwrites_and_removes() {
        let backend = MemoryBackend::default();
        backend.set_item("a", "1").unwrap();
        backend.set_item("a", "2").unwrap();

        assert_eq!(backend.get_item("a").unwrap(), Some("2".to_string()));
        assert_eq!(backend.keys().unwrap(), vec!["a".to_string()]);

        backend.remove_item("a").unwrap();
        backend.remove_item("a").unwrap();
        assert_eq!(backend.get_item("a").unwrap(), None);
        assert!(backend.keys().unwrap().is_empty());
    }
}
