//! Filbaserat lager: en fil per nyckel i en platt katalog

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError, StoreResult};

const FILE_EXT: &str = "json";

/// Produktionslager. Varje nyckel blir `<katalog>/<nyckel>.json`.
/// En valfri bytekvot delas av samtliga nycklar, likt en webblagrings-kvot.
pub struct FsStore {
    dir: PathBuf,
    quota_bytes: Option<usize>,
}

impl FsStore {
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, quota_bytes: None })
    }

    /// Öppna med total bytekvot över alla nycklar
    pub fn open_with_quota(dir: impl Into<PathBuf>, quota_bytes: usize) -> StoreResult<Self> {
        let mut store = Self::open(dir)?;
        store.quota_bytes = Some(quota_bytes);
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, FILE_EXT))
    }

    /// Totalt antal byte i lagret, exklusive en nyckel som ska skrivas om
    fn used_bytes_excluding(&self, excluded: &str) -> StoreResult<usize> {
        let mut total = 0usize;
        for key in self.keys()? {
            if key == excluded {
                continue;
            }
            if let Ok(meta) = fs::metadata(self.path_for(&key)) {
                total += meta.len() as usize;
            }
        }
        Ok(total)
    }
}

impl KeyValueStore for FsStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(quota) = self.quota_bytes {
            let attempted = self.used_bytes_excluding(key)? + value.len();
            if attempted > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    attempted,
                    quota,
                });
            }
        }

        // Skriv till temporär fil och byt namn, så att ett avbrott
        // aldrig lämnar en halvskriven collection
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut store = FsStore::open(dir.path()).unwrap();

        assert!(store.load("trips").unwrap().is_none());

        store.save("trips", "[]").unwrap();
        assert_eq!(store.load("trips").unwrap().as_deref(), Some("[]"));

        store.save("trips", "[1,2]").unwrap();
        assert_eq!(store.load("trips").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = FsStore::open(dir.path()).unwrap();

        store.save("meals", "[]").unwrap();
        store.remove("meals").unwrap();
        store.remove("meals").unwrap();
        assert!(store.load("meals").unwrap().is_none());
    }

    #[test]
    fn test_keys() {
        let dir = tempdir().unwrap();
        let mut store = FsStore::open(dir.path()).unwrap();

        store.save("trips", "[]").unwrap();
        store.save("albums", "[]").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["albums", "trips"]);
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let dir = tempdir().unwrap();
        let mut store = FsStore::open_with_quota(dir.path(), 16).unwrap();

        store.save("a", "0123456789").unwrap();

        let err = store.save("b", "0123456789").unwrap_err();
        assert!(err.is_quota());

        // Den gamla posten ska vara orörd och nyckeln osatt
        assert_eq!(store.load("a").unwrap().as_deref(), Some("0123456789"));
        assert!(store.load("b").unwrap().is_none());
    }

    #[test]
    fn test_quota_allows_rewriting_same_key() {
        let dir = tempdir().unwrap();
        let mut store = FsStore::open_with_quota(dir.path(), 16).unwrap();

        store.save("a", "0123456789").unwrap();
        // Omskrivning av samma nyckel räknar inte gamla värdet dubbelt
        store.save("a", "0123456789abcdef").unwrap();
    }
}
