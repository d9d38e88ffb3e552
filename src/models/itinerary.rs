use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// Aktivitet under en resdag (inbäddad, ingen egen collection)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    /// Klockslag, t.ex. "09:30"
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Activity {
    pub fn new(time: String, title: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            time,
            title,
            location: None,
            notes: None,
        }
    }
}

/// En dag i resplanen med inbäddade aktiviteter och lösa referenser
/// till boende, transporter och måltider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    #[serde(default)]
    pub id: Option<String>,
    pub trip_id: String,
    pub date: String,
    pub day_number: u32,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub accommodation_id: Option<String>,
    #[serde(default)]
    pub transportation_ids: Vec<String>,
    #[serde(default)]
    pub meal_ids: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ItineraryDay {
    pub fn new(trip_id: String, date: String, day_number: u32) -> Self {
        Self {
            id: None,
            trip_id,
            date,
            day_number,
            activities: Vec::new(),
            accommodation_id: None,
            transportation_ids: Vec::new(),
            meal_ids: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.day_number < 1 {
            return Err(AppError::validation("Dagnummer måste vara minst 1"));
        }
        Ok(())
    }

    /// Aktiviteter sorterade på klockslag
    pub fn activities_sorted(&self) -> Vec<&Activity> {
        let mut activities: Vec<&Activity> = self.activities.iter().collect();
        activities.sort_by(|a, b| a.time.cmp(&b.time));
        activities
    }

    pub fn add_activity(&mut self, activity: Activity) {
        self.activities.push(activity);
    }

    pub fn remove_activity(&mut self, activity_id: &str) -> bool {
        let before = self.activities.len();
        self.activities.retain(|a| a.id != activity_id);
        self.activities.len() != before
    }
}
