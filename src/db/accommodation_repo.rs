use crate::models::Accommodation;
use crate::store::Collection;
use crate::utils::error::AppResult;

use super::{keys, Database};

pub struct AccommodationRepository {
    coll: Collection<Accommodation>,
}

impl AccommodationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(keys::ACCOMMODATIONS),
        }
    }

    pub fn find_all(&self) -> AppResult<Vec<Accommodation>> {
        self.coll.load().map_err(Into::into)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Accommodation>> {
        super::find_record(&self.coll, id)
    }

    pub fn create(&self, accommodation: &mut Accommodation) -> AppResult<String> {
        super::create_record(&self.coll, accommodation)
    }

    pub fn update(&self, accommodation: &mut Accommodation) -> AppResult<()> {
        super::update_record(&self.coll, accommodation)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        super::delete_record(&self.coll, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crud() {
        let db = Database::open_in_memory();
        let repo = db.accommodations();

        let mut hotel = Accommodation::new(
            "Hotel Gracery".into(),
            "Shinjuku, Tokyo".into(),
            "2026-04-01".into(),
            "2026-04-05".into(),
        );
        let id = repo.create(&mut hotel).unwrap();

        let mut stored = repo.find_by_id(&id).unwrap().unwrap();
        stored.price_per_night = Some(1450.0);
        repo.update(&mut stored).unwrap();

        let stored = repo.find_by_id(&id).unwrap().unwrap();
        assert_eq!(stored.price_per_night, Some(1450.0));

        repo.delete(&id).unwrap();
        assert!(repo.find_all().unwrap().is_empty());
    }
}
