use crate::models::ItineraryDay;
use crate::store::Collection;
use crate::utils::error::AppResult;

use super::{keys, Database};

pub struct ItineraryRepository {
    coll: Collection<ItineraryDay>,
}

impl ItineraryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(keys::ITINERARY),
        }
    }

    pub fn find_all(&self) -> AppResult<Vec<ItineraryDay>> {
        self.coll.load().map_err(Into::into)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<ItineraryDay>> {
        super::find_record(&self.coll, id)
    }

    /// Alla dagar för en resa i dagordning
    pub fn find_by_trip(&self, trip_id: &str) -> AppResult<Vec<ItineraryDay>> {
        let mut days: Vec<ItineraryDay> = self
            .coll
            .load()?
            .into_iter()
            .filter(|d| d.trip_id == trip_id)
            .collect();
        days.sort_by_key(|d| d.day_number);
        Ok(days)
    }

    pub fn create(&self, day: &mut ItineraryDay) -> AppResult<String> {
        day.validate()?;
        super::create_record(&self.coll, day)
    }

    pub fn update(&self, day: &mut ItineraryDay) -> AppResult<()> {
        day.validate()?;
        super::update_record(&self.coll, day)
    }

    /// Ta bort en resdag. Måltider och transporter som pekar på dagen
    /// lämnas kvar och hamnar i restvyn för otilldelade poster.
    pub fn delete(&self, id: &str) -> AppResult<()> {
        super::delete_record(&self.coll, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    #[test]
    fn test_days_sorted_by_number() {
        let db = Database::open_in_memory();
        let repo = db.itinerary();

        let mut d2 = ItineraryDay::new("trip-1".into(), "2026-04-02".into(), 2);
        let mut d1 = ItineraryDay::new("trip-1".into(), "2026-04-01".into(), 1);
        let mut other = ItineraryDay::new("trip-2".into(), "2026-05-01".into(), 1);
        repo.create(&mut d2).unwrap();
        repo.create(&mut d1).unwrap();
        repo.create(&mut other).unwrap();

        let days = repo.find_by_trip("trip-1").unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day_number, 1);
        assert_eq!(days[1].day_number, 2);
    }

    #[test]
    fn test_embedded_activities_roundtrip() {
        let db = Database::open_in_memory();
        let repo = db.itinerary();

        let mut day = ItineraryDay::new("trip-1".into(), "2026-04-01".into(), 1);
        day.add_activity(Activity::new("09:00".into(), "Fiskmarknad".into()));
        let id = repo.create(&mut day).unwrap();

        let stored = repo.find_by_id(&id).unwrap().unwrap();
        assert_eq!(stored.activities.len(), 1);
        assert_eq!(stored.activities[0].title, "Fiskmarknad");
    }

    #[test]
    fn test_invalid_day_number_rejected() {
        let db = Database::open_in_memory();
        let repo = db.itinerary();

        let mut day = ItineraryDay::new("trip-1".into(), "2026-04-01".into(), 0);
        assert!(repo.create(&mut day).is_err());
    }
}
