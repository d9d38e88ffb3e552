use crate::models::Companion;
use crate::store::Collection;
use crate::utils::error::AppResult;

use super::{keys, Database};

pub struct CompanionRepository {
    coll: Collection<Companion>,
}

impl CompanionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(keys::COMPANIONS),
        }
    }

    pub fn find_all(&self) -> AppResult<Vec<Companion>> {
        let mut companions = self.coll.load()?;
        companions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companions)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Companion>> {
        super::find_record(&self.coll, id)
    }

    pub fn create(&self, companion: &mut Companion) -> AppResult<String> {
        super::create_record(&self.coll, companion)
    }

    pub fn update(&self, companion: &mut Companion) -> AppResult<()> {
        super::update_record(&self.coll, companion)
    }

    /// Ta bort en medresenär. Persondokument som refererar personen
    /// rensas inte; namnuppslag faller tillbaka på ett neutralt värde.
    pub fn delete(&self, id: &str) -> AppResult<()> {
        super::delete_record(&self.coll, id)
    }
}
