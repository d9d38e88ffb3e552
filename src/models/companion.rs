use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanionRelationship {
    Family,
    Friend,
    Partner,
    Colleague,
    #[default]
    Other,
}

impl CompanionRelationship {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Family => "Familj",
            Self::Friend => "Vän",
            Self::Partner => "Partner",
            Self::Colleague => "Kollega",
            Self::Other => "Övrig",
        }
    }

    pub fn all() -> &'static [CompanionRelationship] {
        &[
            Self::Family,
            Self::Friend,
            Self::Partner,
            Self::Colleague,
            Self::Other,
        ]
    }
}

/// Medresenär. Kan refereras från persondokument via `owner_id`;
/// borttagning lämnar sådana referenser hängande och de fångas
/// i stället upp vid visning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub relationship: CompanionRelationship,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Companion {
    pub fn new(name: String, relationship: CompanionRelationship) -> Self {
        Self {
            id: None,
            name,
            relationship,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }
}
