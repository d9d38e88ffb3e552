use crate::models::PersonalDocument;
use crate::services::obfuscate;
use crate::store::Collection;
use crate::utils::error::{AppError, AppResult};

use super::{keys, Database};

pub struct DocumentRepository {
    coll: Collection<PersonalDocument>,
}

impl DocumentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(keys::PERSONAL_DOCUMENTS),
        }
    }

    pub fn find_all(&self) -> AppResult<Vec<PersonalDocument>> {
        self.coll.load().map_err(Into::into)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<PersonalDocument>> {
        super::find_record(&self.coll, id)
    }

    /// Dokument som tillhör en viss medresenär
    pub fn find_by_companion(&self, companion_id: &str) -> AppResult<Vec<PersonalDocument>> {
        Ok(self
            .coll
            .load()?
            .into_iter()
            .filter(|d| d.belongs_to_companion() && d.owner_id.as_deref() == Some(companion_id))
            .collect())
    }

    pub fn create(&self, document: &mut PersonalDocument) -> AppResult<String> {
        self.validate(document)?;
        super::create_record(&self.coll, document)
    }

    pub fn update(&self, document: &mut PersonalDocument) -> AppResult<()> {
        self.validate(document)?;
        super::update_record(&self.coll, document)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        super::delete_record(&self.coll, id)
    }

    /// Maskera och sätt bildnyttolasten på ett dokument.
    /// Posten måste fortfarande sparas via `create`/`update`.
    pub fn set_image(&self, document: &mut PersonalDocument, payload: &str) {
        document.image = Some(obfuscate::encode(payload));
    }

    /// Avkoda bilden för visning. `None` betyder att nyttolasten är
    /// skadad och att vyn ska visa "kan inte visas", inte en trasig bild.
    pub fn display_image(&self, document: &PersonalDocument) -> Option<String> {
        document.image.as_deref().and_then(obfuscate::decode)
    }

    fn validate(&self, document: &PersonalDocument) -> AppResult<()> {
        if document.belongs_to_companion() && document.owner_id.is_none() {
            return Err(AppError::validation(
                "Medresenärsdokument måste ange vilken medresenär det tillhör",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentType, OwnerType};

    #[test]
    fn test_companion_document_requires_owner_id() {
        let db = Database::open_in_memory();
        let repo = db.documents();

        let mut doc = PersonalDocument::new(DocumentType::Passport, OwnerType::Companion);
        assert!(repo.create(&mut doc).is_err());

        doc.owner_id = Some("companion-1".into());
        assert!(repo.create(&mut doc).is_ok());
    }

    #[test]
    fn test_image_is_masked_in_storage() {
        let db = Database::open_in_memory();
        let repo = db.documents();

        let mut doc = PersonalDocument::new(DocumentType::Passport, OwnerType::Primary);
        repo.set_image(&mut doc, "data:image/jpeg;base64,AAAA");
        let id = repo.create(&mut doc).unwrap();

        let stored = repo.find_by_id(&id).unwrap().unwrap();
        let raw = stored.image.as_deref().unwrap();
        assert!(raw.starts_with("encrypted:"));
        assert!(!raw.contains("data:image"));

        assert_eq!(
            repo.display_image(&stored).as_deref(),
            Some("data:image/jpeg;base64,AAAA")
        );
    }

    #[test]
    fn test_find_by_companion() {
        let db = Database::open_in_memory();
        let repo = db.documents();

        let mut doc = PersonalDocument::new(DocumentType::IdCard, OwnerType::Companion);
        doc.owner_id = Some("companion-1".into());
        repo.create(&mut doc).unwrap();

        let mut own = PersonalDocument::new(DocumentType::Passport, OwnerType::Primary);
        repo.create(&mut own).unwrap();

        assert_eq!(repo.find_by_companion("companion-1").unwrap().len(), 1);
        assert!(repo.find_by_companion("companion-2").unwrap().is_empty());
    }
}
