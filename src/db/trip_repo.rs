use crate::models::{Trip, TripStatus};
use crate::store::Collection;
use crate::utils::error::AppResult;

use super::{keys, Database};

pub struct TripRepository {
    coll: Collection<Trip>,
}

impl TripRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(keys::TRIPS),
        }
    }

    /// Hämta alla resor, senaste startdatum först
    pub fn find_all(&self) -> AppResult<Vec<Trip>> {
        let mut trips = self.coll.load()?;
        trips.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(trips)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Trip>> {
        super::find_record(&self.coll, id)
    }

    pub fn find_by_status(&self, status: TripStatus) -> AppResult<Vec<Trip>> {
        let trips = self.find_all()?;
        Ok(trips.into_iter().filter(|t| t.status == status).collect())
    }

    pub fn create(&self, trip: &mut Trip) -> AppResult<String> {
        trip.validate()?;
        let id = super::create_record(&self.coll, trip)?;
        tracing::info!(trip = %trip.title, "Skapade resa");
        Ok(id)
    }

    pub fn update(&self, trip: &mut Trip) -> AppResult<()> {
        trip.validate()?;
        super::update_record(&self.coll, trip)
    }

    /// Ta bort en resa. Beroende poster (resdagar, måltider, album m.fl.)
    /// lämnas kvar; hängande referenser fångas upp vid visning.
    pub fn delete(&self, id: &str) -> AppResult<()> {
        super::delete_record(&self.coll, id)
    }

    pub fn count(&self) -> AppResult<usize> {
        Ok(self.coll.load()?.len())
    }
}
