use crate::models::Meal;
use crate::store::Collection;
use crate::utils::error::AppResult;

use super::{keys, Database};

pub struct MealRepository {
    coll: Collection<Meal>,
}

impl MealRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(keys::MEALS),
        }
    }

    pub fn find_all(&self) -> AppResult<Vec<Meal>> {
        self.coll.load().map_err(Into::into)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Meal>> {
        super::find_record(&self.coll, id)
    }

    pub fn find_by_trip(&self, trip_id: &str) -> AppResult<Vec<Meal>> {
        Ok(self
            .coll
            .load()?
            .into_iter()
            .filter(|m| m.trip_id == trip_id)
            .collect())
    }

    pub fn find_by_day(&self, day_id: &str) -> AppResult<Vec<Meal>> {
        Ok(self
            .coll
            .load()?
            .into_iter()
            .filter(|m| m.itinerary_day_id.as_deref() == Some(day_id))
            .collect())
    }

    /// Måltider för en resa som saknar resdagsreferens
    pub fn find_unassigned(&self, trip_id: &str) -> AppResult<Vec<Meal>> {
        Ok(self
            .find_by_trip(trip_id)?
            .into_iter()
            .filter(|m| m.is_unassigned())
            .collect())
    }

    pub fn create(&self, meal: &mut Meal) -> AppResult<String> {
        super::create_record(&self.coll, meal)
    }

    pub fn update(&self, meal: &mut Meal) -> AppResult<()> {
        super::update_record(&self.coll, meal)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        super::delete_record(&self.coll, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    #[test]
    fn test_unassigned_filter() {
        let db = Database::open_in_memory();
        let repo = db.meals();

        let mut assigned = Meal::new("trip-1".into(), MealType::Lunch, "Ichiran".into());
        assigned.itinerary_day_id = Some("day-1".into());
        let mut unassigned = Meal::new("trip-1".into(), MealType::Dinner, "Sushi Dai".into());
        let mut other_trip = Meal::new("trip-2".into(), MealType::Dinner, "Noma".into());

        repo.create(&mut assigned).unwrap();
        repo.create(&mut unassigned).unwrap();
        repo.create(&mut other_trip).unwrap();

        let rest = repo.find_unassigned("trip-1").unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].restaurant_name, "Sushi Dai");
    }
}
