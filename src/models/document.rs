use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    Passport,
    IdCard,
    DriverLicense,
    Other,
}

impl DocumentType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passport => "Pass",
            Self::IdCard => "ID-kort",
            Self::DriverLicense => "Körkort",
            Self::Other => "Övrigt",
        }
    }

    pub fn all() -> &'static [DocumentType] {
        &[Self::Passport, Self::IdCard, Self::DriverLicense, Self::Other]
    }
}

/// Vem dokumentet tillhör: huvudresenären eller en medresenär
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerType {
    #[default]
    Primary,
    Companion,
}

/// Persondokument (pass, ID-kort m.m.). Bildfältet lagras maskerat
/// via [`crate::services::obfuscate`] och avkodas först vid visning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDocument {
    #[serde(default)]
    pub id: Option<String>,
    pub doc_type: DocumentType,
    #[serde(default)]
    pub owner_type: OwnerType,
    /// Companion-id när `owner_type` är `Companion`, annars utelämnad
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub document_number: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// Maskerad bildnyttolast ("encrypted:..."-format)
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl PersonalDocument {
    pub fn new(doc_type: DocumentType, owner_type: OwnerType) -> Self {
        Self {
            id: None,
            doc_type,
            owner_type,
            owner_id: None,
            document_number: None,
            expiry_date: None,
            image: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn belongs_to_companion(&self) -> bool {
        self.owner_type == OwnerType::Companion
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaStatus {
    #[default]
    NotRequired,
    Required,
    Applied,
    Approved,
    Rejected,
}

impl VisaStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotRequired => "Krävs ej",
            Self::Required => "Krävs",
            Self::Applied => "Ansökt",
            Self::Approved => "Beviljat",
            Self::Rejected => "Avslaget",
        }
    }
}

/// Visum kopplat till en resa
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelVisa {
    #[serde(default)]
    pub id: Option<String>,
    pub trip_id: String,
    pub country: String,
    pub visa_type: String,
    #[serde(default)]
    pub status: VisaStatus,
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// Maskerad bildnyttolast, samma format som persondokument
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TravelVisa {
    pub fn new(trip_id: String, country: String, visa_type: String) -> Self {
        Self {
            id: None,
            trip_id,
            country,
            visa_type,
            status: VisaStatus::NotRequired,
            expiry_date: None,
            image: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_type() {
        let mut doc = PersonalDocument::new(DocumentType::Passport, OwnerType::Primary);
        assert!(!doc.belongs_to_companion());

        doc.owner_type = OwnerType::Companion;
        doc.owner_id = Some("companion-1".into());
        assert!(doc.belongs_to_companion());
    }

    #[test]
    fn test_doc_type_wire_format() {
        let json = serde_json::to_string(&DocumentType::IdCard).unwrap();
        assert_eq!(json, "\"id_card\"");
        let json = serde_json::to_string(&DocumentType::DriverLicense).unwrap();
        assert_eq!(json, "\"driver_license\"");
    }
}
