use crate::models::TravelVisa;
use crate::services::obfuscate;
use crate::store::Collection;
use crate::utils::error::AppResult;

use super::{keys, Database};

pub struct VisaRepository {
    coll: Collection<TravelVisa>,
}

impl VisaRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(keys::TRAVEL_VISAS),
        }
    }

    pub fn find_all(&self) -> AppResult<Vec<TravelVisa>> {
        self.coll.load().map_err(Into::into)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<TravelVisa>> {
        super::find_record(&self.coll, id)
    }

    pub fn find_by_trip(&self, trip_id: &str) -> AppResult<Vec<TravelVisa>> {
        Ok(self
            .coll
            .load()?
            .into_iter()
            .filter(|v| v.trip_id == trip_id)
            .collect())
    }

    pub fn create(&self, visa: &mut TravelVisa) -> AppResult<String> {
        super::create_record(&self.coll, visa)
    }

    pub fn update(&self, visa: &mut TravelVisa) -> AppResult<()> {
        super::update_record(&self.coll, visa)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        super::delete_record(&self.coll, id)
    }

    /// Samma maskering som för persondokument
    pub fn set_image(&self, visa: &mut TravelVisa, payload: &str) {
        visa.image = Some(obfuscate::encode(payload));
    }

    pub fn display_image(&self, visa: &TravelVisa) -> Option<String> {
        visa.image.as_deref().and_then(obfuscate::decode)
    }
}
