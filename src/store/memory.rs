//! Minneslager för tester

use std::collections::BTreeMap;

use super::{KeyValueStore, StoreError, StoreResult};

/// Lagrar allt i en map. Samma kvotbeteende som [`super::FsStore`]
/// så att kapacitetsfel kan provoceras fram i tester.
#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Skriv rå text direkt, utan kvotkontroll (för att simulera
    /// korrupt eller främmande innehåll)
    pub fn put_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn used_bytes_excluding(&self, excluded: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != excluded)
            .map(|(_, v)| v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(quota) = self.quota_bytes {
            let attempted = self.used_bytes_excluding(key) + value.len();
            if attempted > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    attempted,
                    quota,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota() {
        let mut store = MemoryStore::with_quota(8);
        store.save("a", "1234").unwrap();
        assert!(store.save("b", "12345").unwrap_err().is_quota());
        store.save("b", "1234").unwrap();
    }
}
