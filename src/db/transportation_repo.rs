use crate::models::Transportation;
use crate::store::Collection;
use crate::utils::error::AppResult;

use super::{keys, Database};

pub struct TransportationRepository {
    coll: Collection<Transportation>,
}

impl TransportationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(keys::TRANSPORTATIONS),
        }
    }

    pub fn find_all(&self) -> AppResult<Vec<Transportation>> {
        self.coll.load().map_err(Into::into)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Transportation>> {
        super::find_record(&self.coll, id)
    }

    /// Alla transporter för en resa, i avgångsordning
    pub fn find_by_trip(&self, trip_id: &str) -> AppResult<Vec<Transportation>> {
        let mut legs: Vec<Transportation> = self
            .coll
            .load()?
            .into_iter()
            .filter(|t| t.trip_id == trip_id)
            .collect();
        legs.sort_by(|a, b| a.departure_time.cmp(&b.departure_time));
        Ok(legs)
    }

    pub fn find_by_day(&self, day_id: &str) -> AppResult<Vec<Transportation>> {
        Ok(self
            .coll
            .load()?
            .into_iter()
            .filter(|t| t.itinerary_day_id.as_deref() == Some(day_id))
            .collect())
    }

    pub fn create(&self, transportation: &mut Transportation) -> AppResult<String> {
        transportation.validate()?;
        super::create_record(&self.coll, transportation)
    }

    pub fn update(&self, transportation: &mut Transportation) -> AppResult<()> {
        transportation.validate()?;
        super::update_record(&self.coll, transportation)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        super::delete_record(&self.coll, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlightDetails, TransportKind};

    #[test]
    fn test_sorted_by_departure() {
        let db = Database::open_in_memory();
        let repo = db.transportations();

        let mut late = Transportation::new(
            "trip-1".into(),
            TransportKind::Train,
            "Tokyo".into(),
            "Kyoto".into(),
            "2026-04-05T13:00".into(),
        );
        let mut early = Transportation::new(
            "trip-1".into(),
            TransportKind::Flight,
            "ARN".into(),
            "NRT".into(),
            "2026-04-01T10:25".into(),
        );
        repo.create(&mut late).unwrap();
        repo.create(&mut early).unwrap();

        let legs = repo.find_by_trip("trip-1").unwrap();
        assert_eq!(legs[0].kind, TransportKind::Flight);
        assert_eq!(legs[1].kind, TransportKind::Train);
    }

    #[test]
    fn test_detail_block_validated_on_create() {
        let db = Database::open_in_memory();
        let repo = db.transportations();

        let mut leg = Transportation::new(
            "trip-1".into(),
            TransportKind::Train,
            "Tokyo".into(),
            "Kyoto".into(),
            "2026-04-05T13:00".into(),
        );
        leg.flight_details = Some(FlightDetails::default());
        assert!(repo.create(&mut leg).is_err());
    }
}
