//! Referensuppslag mellan collections
//!
//! Collections lagras oberoende av varandra och referenser är bara
//! strängar; här finns den samlade policyn för vad som händer när en
//! referens inte går att slå upp. Svaret är alltid en neutral
//! reservvisning, aldrig ett fel: borttagna resdagar, medresenärer
//! och boenden får inte fälla sidan som visar dem.

use std::collections::HashSet;

use crate::db::Database;
use crate::models::{Accommodation, ItineraryDay, Meal, PersonalDocument, Transportation};
use crate::utils::error::AppResult;

/// Reservnamn när en refererad medresenär inte längre finns
pub const FALLBACK_COMPANION: &str = "Medresenär";

/// Ägarnamn för huvudresenärens egna dokument
pub const PRIMARY_OWNER: &str = "Huvudresenär";

/// Resans poster grupperade per resdag, plus resterna: poster vars
/// dagreferens saknas eller pekar på en borttagen dag. Varje post
/// hamnar i exakt en hink.
#[derive(Debug)]
pub struct DayGrouped<T> {
    /// (dag, dagens poster) i dagordning
    pub by_day: Vec<(ItineraryDay, Vec<T>)>,
    /// Otilldelade poster
    pub unassigned: Vec<T>,
}

impl<T> DayGrouped<T> {
    pub fn total(&self) -> usize {
        self.by_day.iter().map(|(_, items)| items.len()).sum::<usize>() + self.unassigned.len()
    }
}

pub struct RelationResolver<'a> {
    db: &'a Database,
}

impl<'a> RelationResolver<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Visningsnamn för ett dokuments ägare. Saknas den refererade
    /// medresenären visas ett neutralt reservnamn.
    pub fn document_owner_name(&self, document: &PersonalDocument) -> AppResult<String> {
        if !document.belongs_to_companion() {
            return Ok(PRIMARY_OWNER.to_string());
        }

        let Some(owner_id) = document.owner_id.as_deref() else {
            return Ok(FALLBACK_COMPANION.to_string());
        };

        match self.db.companions().find_by_id(owner_id)? {
            Some(companion) => Ok(companion.name),
            None => {
                tracing::warn!(owner = %owner_id, "Dokument refererar borttagen medresenär");
                Ok(FALLBACK_COMPANION.to_string())
            }
        }
    }

    /// Boendet för en resdag; `None` om referensen saknas eller inte
    /// längre går att slå upp ("inte satt")
    pub fn accommodation_for_day(&self, day: &ItineraryDay) -> AppResult<Option<Accommodation>> {
        let Some(ref id) = day.accommodation_id else {
            return Ok(None);
        };
        self.db.accommodations().find_by_id(id)
    }

    /// Resans måltider grupperade per resdag plus otilldelade
    pub fn meals_by_day(&self, trip_id: &str) -> AppResult<DayGrouped<Meal>> {
        let days = self.db.itinerary().find_by_trip(trip_id)?;
        let meals = self.db.meals().find_by_trip(trip_id)?;
        Ok(group_by_day(days, meals, |meal| meal.itinerary_day_id.as_deref()))
    }

    /// Resans transporter grupperade per resdag plus otilldelade
    pub fn transports_by_day(&self, trip_id: &str) -> AppResult<DayGrouped<Transportation>> {
        let days = self.db.itinerary().find_by_trip(trip_id)?;
        let legs = self.db.transportations().find_by_trip(trip_id)?;
        Ok(group_by_day(days, legs, |leg| leg.itinerary_day_id.as_deref()))
    }
}

/// Dela upp poster på resans dagar. Poster utan dagreferens, och
/// poster vars referens inte matchar någon av resans dagar, hamnar
/// bland de otilldelade.
fn group_by_day<T, F>(days: Vec<ItineraryDay>, items: Vec<T>, day_id_of: F) -> DayGrouped<T>
where
    F: Fn(&T) -> Option<&str>,
{
    let known_ids: HashSet<String> = days
        .iter()
        .filter_map(|d| d.id.clone())
        .collect();

    let mut by_day: Vec<(ItineraryDay, Vec<T>)> =
        days.into_iter().map(|d| (d, Vec::new())).collect();
    let mut unassigned = Vec::new();

    for item in items {
        match day_id_of(&item) {
            Some(day_id) if known_ids.contains(day_id) => {
                let slot = by_day
                    .iter_mut()
                    .find(|(day, _)| day.id.as_deref() == Some(day_id));
                if let Some((_, bucket)) = slot {
                    bucket.push(item);
                }
            }
            _ => unassigned.push(item),
        }
    }

    DayGrouped { by_day, unassigned }
}
