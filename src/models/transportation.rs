use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Flight,
    Train,
    RentalCar,
    Taxi,
    Charter,
    Ferry,
    Bus,
    Subway,
}

impl TransportKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flight => "Flyg",
            Self::Train => "Tåg",
            Self::RentalCar => "Hyrbil",
            Self::Taxi => "Taxi",
            Self::Charter => "Charter",
            Self::Ferry => "Färja",
            Self::Bus => "Buss",
            Self::Subway => "Tunnelbana",
        }
    }

    pub fn all() -> &'static [TransportKind] {
        &[
            Self::Flight,
            Self::Train,
            Self::RentalCar,
            Self::Taxi,
            Self::Charter,
            Self::Ferry,
            Self::Bus,
            Self::Subway,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportStatus {
    #[default]
    Planned,
    Booked,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetails {
    pub airline: String,
    pub flight_number: String,
    #[serde(default)]
    pub seat: Option<String>,
    #[serde(default)]
    pub booking_reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDetails {
    pub operator: String,
    pub train_number: String,
    #[serde(default)]
    pub carriage: Option<String>,
    #[serde(default)]
    pub seat: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCarDetails {
    pub company: String,
    #[serde(default)]
    pub car_model: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub dropoff_location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiDetails {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharterDetails {
    pub operator: String,
    #[serde(default)]
    pub booking_reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FerryDetails {
    pub operator: String,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub cabin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusDetails {
    pub operator: String,
    #[serde(default)]
    pub line: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubwayDetails {
    #[serde(default)]
    pub line: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

/// Transportsträcka inom en resa. Högst ett detaljblock får vara satt
/// och det måste i så fall matcha `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    #[serde(default)]
    pub id: Option<String>,
    pub trip_id: String,
    #[serde(default)]
    pub itinerary_day_id: Option<String>,
    pub kind: TransportKind,
    pub departure_place: String,
    pub arrival_place: String,
    pub departure_time: String,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: TransportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_details: Option<FlightDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_details: Option<TrainDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_car_details: Option<RentalCarDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxi_details: Option<TaxiDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charter_details: Option<CharterDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ferry_details: Option<FerryDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_details: Option<BusDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subway_details: Option<SubwayDetails>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Transportation {
    pub fn new(
        trip_id: String,
        kind: TransportKind,
        departure_place: String,
        arrival_place: String,
        departure_time: String,
    ) -> Self {
        Self {
            id: None,
            trip_id,
            itinerary_day_id: None,
            kind,
            departure_place,
            arrival_place,
            departure_time,
            arrival_time: None,
            price: None,
            status: TransportStatus::Planned,
            flight_details: None,
            train_details: None,
            rental_car_details: None,
            taxi_details: None,
            charter_details: None,
            ferry_details: None,
            bus_details: None,
            subway_details: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Vilka detaljblock som är satta, parade med det transportslag de hör till
    fn populated_details(&self) -> Vec<TransportKind> {
        let mut kinds = Vec::new();
        if self.flight_details.is_some() {
            kinds.push(TransportKind::Flight);
        }
        if self.train_details.is_some() {
            kinds.push(TransportKind::Train);
        }
        if self.rental_car_details.is_some() {
            kinds.push(TransportKind::RentalCar);
        }
        if self.taxi_details.is_some() {
            kinds.push(TransportKind::Taxi);
        }
        if self.charter_details.is_some() {
            kinds.push(TransportKind::Charter);
        }
        if self.ferry_details.is_some() {
            kinds.push(TransportKind::Ferry);
        }
        if self.bus_details.is_some() {
            kinds.push(TransportKind::Bus);
        }
        if self.subway_details.is_some() {
            kinds.push(TransportKind::Subway);
        }
        kinds
    }

    pub fn validate(&self) -> AppResult<()> {
        let populated = self.populated_details();
        match populated.as_slice() {
            [] => Ok(()),
            [kind] if *kind == self.kind => Ok(()),
            [kind] => Err(AppError::validation(format!(
                "Detaljblock för {} matchar inte transportslag {}",
                kind.label(),
                self.kind.label()
            ))),
            _ => Err(AppError::validation("Flera detaljblock är satta")),
        }
    }

    pub fn route_display(&self) -> String {
        format!("{} → {}", self.departure_place, self.arrival_place)
    }

    /// Transporter utan resdagsreferens räknas som otilldelade
    pub fn is_unassigned(&self) -> bool {
        self.itinerary_day_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight() -> Transportation {
        Transportation::new(
            "trip-1".into(),
            TransportKind::Flight,
            "ARN".into(),
            "NRT".into(),
            "2026-04-01T10:25".into(),
        )
    }

    #[test]
    fn test_no_details_is_valid() {
        assert!(flight().validate().is_ok());
    }

    #[test]
    fn test_matching_details_is_valid() {
        let mut t = flight();
        t.flight_details = Some(FlightDetails {
            airline: "SAS".into(),
            flight_number: "SK983".into(),
            ..Default::default()
        });
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_mismatched_details_is_rejected() {
        let mut t = flight();
        t.train_details = Some(TrainDetails {
            operator: "SJ".into(),
            train_number: "530".into(),
            ..Default::default()
        });
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_multiple_details_is_rejected() {
        let mut t = flight();
        t.flight_details = Some(FlightDetails::default());
        t.taxi_details = Some(TaxiDetails::default());
        assert!(t.validate().is_err());
    }
}
