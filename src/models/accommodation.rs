use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    /// Incheckning, ISO-datum eller datum+tid
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub price_per_night: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Accommodation {
    pub fn new(name: String, address: String, check_in: String, check_out: String) -> Self {
        Self {
            id: None,
            name,
            address,
            check_in,
            check_out,
            price_per_night: None,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn price_display(&self) -> String {
        match self.price_per_night {
            Some(p) => format!("{:.0} kr/natt", p),
            None => "Pris saknas".to_string(),
        }
    }
}
