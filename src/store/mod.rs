//! Lagringslager
//!
//! All persistens går genom [`KeyValueStore`]: en platt nyckel-värde-yta
//! där varje värde är en JSON-serialiserad array. Abstraktionen finns för
//! att tester ska kunna köra mot [`MemoryStore`] utan filsystem, med
//! oförändrad läs/skriv-semantik (hela collections skrivs om varje gång,
//! det finns inga partiella uppdateringar).
//!
//! Kapaciteten är ändlig och delad mellan alla nycklar. En skrivning som
//! spräcker kvoten ger [`StoreError::QuotaExceeded`] och lämnar den gamla
//! posten orörd.

use thiserror::Error;

pub mod collection;
pub mod fs;
pub mod memory;

pub use collection::Collection;
pub use fs::FsStore;
pub use memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO-fel: {0}")]
    Io(#[from] std::io::Error),

    #[error("Kvot överskriden för nyckel '{key}': {attempted} byte ryms inte (kvot {quota})")]
    QuotaExceeded {
        key: String,
        attempted: usize,
        quota: usize,
    },

    #[error("Serialiseringsfel: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Synkront nyckel-värde-lager med text som värdetyp.
///
/// `load` returnerar `None` för okända nycklar. `save` skriver om hela
/// värdet; sista skrivningen vinner om två operationer flätas.
pub trait KeyValueStore: Send {
    /// Läs rå text för en nyckel
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Skriv (eller skriv över) värdet för en nyckel
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Ta bort en nyckel; okänd nyckel är inte ett fel
    fn remove(&mut self, key: &str) -> StoreResult<()>;

    /// Alla nycklar som finns i lagret
    fn keys(&self) -> StoreResult<Vec<String>>;
}
