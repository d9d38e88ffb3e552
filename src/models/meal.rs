use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Frukost",
            Self::Lunch => "Lunch",
            Self::Dinner => "Middag",
            Self::Snack => "Mellanmål",
        }
    }

    pub fn all() -> &'static [MealType] {
        &[Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealStatus {
    #[default]
    Planned,
    Reserved,
    Completed,
    Cancelled,
}

/// Kostalternativ för sällskapet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryOptions {
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub lactose_free: bool,
}

impl DietaryOptions {
    pub fn any(&self) -> bool {
        self.vegetarian || self.vegan || self.gluten_free || self.lactose_free
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(default)]
    pub id: Option<String>,
    pub trip_id: String,
    /// Saknas referensen är måltiden otilldelad och visas i restvyn
    #[serde(default)]
    pub itinerary_day_id: Option<String>,
    pub meal_type: MealType,
    pub restaurant_name: String,
    #[serde(default)]
    pub reservation_time: Option<String>,
    #[serde(default = "default_people")]
    pub number_of_people: u32,
    #[serde(default)]
    pub dietary_options: DietaryOptions,
    #[serde(default)]
    pub status: MealStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_people() -> u32 {
    1
}

impl Meal {
    pub fn new(trip_id: String, meal_type: MealType, restaurant_name: String) -> Self {
        Self {
            id: None,
            trip_id,
            itinerary_day_id: None,
            meal_type,
            restaurant_name,
            reservation_time: None,
            number_of_people: 1,
            dietary_options: DietaryOptions::default(),
            status: MealStatus::Planned,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.itinerary_day_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned() {
        let mut meal = Meal::new("trip-1".into(), MealType::Dinner, "Sushi Dai".into());
        assert!(meal.is_unassigned());

        meal.itinerary_day_id = Some("day-1".into());
        assert!(!meal.is_unassigned());
    }

    #[test]
    fn test_dietary_defaults_on_old_records() {
        // Äldre poster saknar fältet helt
        let json = r#"{"tripId":"t","mealType":"lunch","restaurantName":"Café"}"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert!(!meal.dietary_options.any());
        assert_eq!(meal.number_of_people, 1);
    }
}
