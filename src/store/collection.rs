//! Generisk collection ovanpå nyckel-värde-lagret
//!
//! En collection är en namngiven nyckel vars värde är en JSON-array.
//! Läsning som inte går att tolka ger en tom lista i stället för fel:
//! korrupt lagrat tillstånd får aldrig krascha anroparen, det loggas
//! och behandlas som om inget fanns sparat.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{KeyValueStore, StoreResult};

/// Delat handtag till det underliggande lagret
pub type SharedStore = Arc<Mutex<Box<dyn KeyValueStore>>>;

pub struct Collection<T> {
    store: SharedStore,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: SharedStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Läs hela collection. Saknad nyckel och korrupt JSON ger båda
    /// en tom lista; det senare loggas som en varning.
    pub fn load(&self) -> StoreResult<Vec<T>> {
        let store = self.store.lock().unwrap();
        let Some(raw) = store.load(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Korrupt collection kunde inte tolkas, behandlas som tom"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serialisera och skriv om hela collection
    pub fn save(&self, items: &[T]) -> StoreResult<()> {
        let json = serde_json::to_string(items)?;
        let mut store = self.store.lock().unwrap();
        store.save(&self.key, &json)
    }

    /// Ta bort hela collection ur lagret
    pub fn drop_all(&self) -> StoreResult<()> {
        let mut store = self.store.lock().unwrap();
        store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn shared() -> SharedStore {
        Arc::new(Mutex::new(Box::new(MemoryStore::new()) as Box<dyn KeyValueStore>))
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let coll: Collection<u32> = Collection::new(shared(), "numbers");
        assert!(coll.load().unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip() {
        let coll: Collection<u32> = Collection::new(shared(), "numbers");
        coll.save(&[1, 2, 3]).unwrap();
        assert_eq!(coll.load().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_corrupt_json_loads_empty() {
        let store = shared();
        {
            let mut guard = store.lock().unwrap();
            guard.save("numbers", "{inte json").unwrap();
        }

        let coll: Collection<u32> = Collection::new(store, "numbers");
        assert!(coll.load().unwrap().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let store = shared();
        {
            let mut guard = store.lock().unwrap();
            guard.save("numbers", "{\"a\": 1}").unwrap();
        }

        let coll: Collection<u32> = Collection::new(store, "numbers");
        assert!(coll.load().unwrap().is_empty());
    }
}
