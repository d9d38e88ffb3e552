use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// Status för en resa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Kommande",
            Self::Ongoing => "Pågående",
            Self::Completed => "Avslutad",
            Self::Cancelled => "Inställd",
        }
    }

    pub fn all() -> &'static [TripStatus] {
        &[Self::Upcoming, Self::Ongoing, Self::Completed, Self::Cancelled]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: TripStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Trip {
    pub fn new(title: String, destination: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: None,
            title,
            destination,
            start_date,
            end_date,
            status: TripStatus::Upcoming,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Startdatum får inte ligga efter slutdatum
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("Resan saknar titel"));
        }
        if self.start_date > self.end_date {
            return Err(AppError::validation(format!(
                "Startdatum {} ligger efter slutdatum {}",
                self.start_date, self.end_date
            )));
        }
        Ok(())
    }

    /// Antal dagar inklusive start- och slutdag
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn date_range_display(&self) -> String {
        format!("{} – {}", self.start_date, self.end_date)
    }
}
