pub mod trip_repo;
pub mod itinerary_repo;
pub mod accommodation_repo;
pub mod transportation_repo;
pub mod meal_repo;
pub mod companion_repo;
pub mod document_repo;
pub mod visa_repo;
pub mod album_repo;

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::StoredRecord;
use crate::store::collection::SharedStore;
use crate::store::{Collection, FsStore, KeyValueStore, MemoryStore};
use crate::utils::error::{AppError, AppResult};
use crate::utils::ids;

pub use trip_repo::TripRepository;
pub use itinerary_repo::ItineraryRepository;
pub use accommodation_repo::AccommodationRepository;
pub use transportation_repo::TransportationRepository;
pub use meal_repo::MealRepository;
pub use companion_repo::CompanionRepository;
pub use document_repo::DocumentRepository;
pub use visa_repo::VisaRepository;
pub use album_repo::AlbumRepository;

/// Collection-nycklar i lagret
pub mod keys {
    pub const TRIPS: &str = "trips";
    pub const ITINERARY: &str = "itinerary";
    pub const ACCOMMODATIONS: &str = "accommodations";
    pub const TRANSPORTATIONS: &str = "transportations";
    pub const MEALS: &str = "meals";
    pub const COMPANIONS: &str = "companions";
    pub const PERSONAL_DOCUMENTS: &str = "personal_documents";
    pub const TRAVEL_VISAS: &str = "travel_visas";
    pub const ALBUMS: &str = "albums";

    /// Mediapartition för ett album: en egen nyckel per album-id
    pub fn media_for(album_id: &str) -> String {
        format!("media_{}", album_id)
    }
}

/// Huvudfasad mot lagret. Delar ut typade repositories som alla
/// arbetar mot samma underliggande nyckel-värde-lager.
///
/// Varje repositoryanrop gör en fullständig läs-ändra-skriv-cykel mot sin
/// collection. Två flätade anrop mot samma collection kan alltså skriva
/// över varandra (sista skrivningen vinner); det är en accepterad
/// begränsning, inte en garanti som ska byggas bort med låsning.
pub struct Database {
    store: SharedStore,
}

impl Database {
    /// Öppna eller skapa filbaserat lager
    pub fn open(dir: &Path) -> AppResult<Self> {
        let store = FsStore::open(dir)?;
        Ok(Self::with_store(Box::new(store)))
    }

    /// Öppna filbaserat lager med bytekvot
    pub fn open_with_quota(dir: &Path, quota_bytes: usize) -> AppResult<Self> {
        let store = FsStore::open_with_quota(dir, quota_bytes)?;
        Ok(Self::with_store(Box::new(store)))
    }

    /// Öppna in-memory-lager (för tester)
    pub fn open_in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Injicera godtyckligt lager
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub(crate) fn collection<T>(&self, key: impl Into<String>) -> Collection<T>
    where
        T: Serialize + DeserializeOwned,
    {
        Collection::new(Arc::clone(&self.store), key)
    }

    pub fn trips(&self) -> TripRepository {
        TripRepository::new(self)
    }

    pub fn itinerary(&self) -> ItineraryRepository {
        ItineraryRepository::new(self)
    }

    pub fn accommodations(&self) -> AccommodationRepository {
        AccommodationRepository::new(self)
    }

    pub fn transportations(&self) -> TransportationRepository {
        TransportationRepository::new(self)
    }

    pub fn meals(&self) -> MealRepository {
        MealRepository::new(self)
    }

    pub fn companions(&self) -> CompanionRepository {
        CompanionRepository::new(self)
    }

    pub fn documents(&self) -> DocumentRepository {
        DocumentRepository::new(self)
    }

    pub fn visas(&self) -> VisaRepository {
        VisaRepository::new(self)
    }

    pub fn albums(&self) -> AlbumRepository {
        AlbumRepository::new(self)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

/// Generisk create: tilldela id och tidsstämplar, läs in hela
/// collection, lägg till posten och skriv tillbaka allt
pub(crate) fn create_record<T>(coll: &Collection<T>, record: &mut T) -> AppResult<String>
where
    T: StoredRecord + Serialize + DeserializeOwned + Clone,
{
    let id = ids::new_id();
    let now = ids::now_iso();
    record.set_id(id.clone());
    record.set_created_at(now.clone());
    record.set_updated_at(now);

    let mut items = coll.load()?;
    items.push(record.clone());
    coll.save(&items)?;

    Ok(id)
}

/// Generisk update: skriv om posten i sin helhet men behåll
/// ursprungligt `created_at` och sätt nytt `updated_at`
pub(crate) fn update_record<T>(coll: &Collection<T>, record: &mut T) -> AppResult<()>
where
    T: StoredRecord + Serialize + DeserializeOwned + Clone,
{
    let id = record
        .id()
        .ok_or_else(|| AppError::validation("Posten saknar ID"))?
        .to_string();

    let mut items = coll.load()?;
    let Some(slot) = items.iter_mut().find(|item| item.id() == Some(id.as_str())) else {
        return Err(AppError::not_found(format!(
            "Post med ID {} finns inte i '{}'",
            id,
            coll.key()
        )));
    };

    if let Some(original) = slot.created_at() {
        record.set_created_at(original.to_string());
    }
    record.set_updated_at(ids::now_iso());

    *slot = record.clone();
    coll.save(&items)?;

    Ok(())
}

/// Generisk delete: filtrera bort posten och skriv tillbaka resten
pub(crate) fn delete_record<T>(coll: &Collection<T>, id: &str) -> AppResult<()>
where
    T: StoredRecord + Serialize + DeserializeOwned + Clone,
{
    let mut items = coll.load()?;
    let before = items.len();
    items.retain(|item| item.id() != Some(id));

    if items.len() == before {
        return Err(AppError::not_found(format!(
            "Post med ID {} finns inte i '{}'",
            id,
            coll.key()
        )));
    }

    coll.save(&items)?;
    Ok(())
}

pub(crate) fn find_record<T>(coll: &Collection<T>, id: &str) -> AppResult<Option<T>>
where
    T: StoredRecord + Serialize + DeserializeOwned,
{
    let items = coll.load()?;
    Ok(items.into_iter().find(|item| item.id() == Some(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Trip, TripStatus};
    use chrono::NaiveDate;

    fn trip() -> Trip {
        Trip::new(
            "Japan".into(),
            "Tokyo".into(),
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 14).unwrap(),
        )
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let db = Database::open_in_memory();
        let coll = db.collection::<Trip>(keys::TRIPS);

        let mut t = trip();
        let id = create_record(&coll, &mut t).unwrap();

        assert_eq!(t.id.as_deref(), Some(id.as_str()));
        assert!(t.created_at.is_some());
        assert_eq!(t.created_at, t.updated_at);
    }

    #[test]
    fn test_update_preserves_created_at() {
        let db = Database::open_in_memory();
        let coll = db.collection::<Trip>(keys::TRIPS);

        let mut t = trip();
        create_record(&coll, &mut t).unwrap();
        let created = t.created_at.clone();

        t.status = TripStatus::Ongoing;
        t.created_at = None; // vyer skickar inte alltid med tidsstämplar
        update_record(&coll, &mut t).unwrap();

        assert_eq!(t.created_at, created);

        let stored = find_record(&coll, t.id.as_deref().unwrap()).unwrap().unwrap();
        assert_eq!(stored.status, TripStatus::Ongoing);
        assert_eq!(stored.created_at, created);
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let db = Database::open_in_memory();
        let coll = db.collection::<Trip>(keys::TRIPS);

        assert!(delete_record(&coll, "saknas").is_err());
    }
}
