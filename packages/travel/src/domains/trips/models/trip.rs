use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kernel::{BaseDiagnostics, DiagnosticEvent};

/// A generated travel plan.
///
/// This is the shape the itinerary generator returns inside a ```json block;
/// `id`, `image_urls` and `payment_link` are filled in after it is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-form, e.g. "$1,200"
    #[serde(default)]
    pub estimated_price: String,
    /// Length in days
    pub duration: u32,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub travel_style: String,
    pub country: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub group_type: String,
    #[serde(default)]
    pub best_time_to_visit: Vec<String>,
    #[serde(default)]
    pub weather_info: Vec<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub itinerary: Vec<DayPlan>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(
        default,
        rename = "payment_link",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    /// `[latitude, longitude]`
    pub coordinates: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_street_map: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub description: String,
}

/// Why a trip payload was rejected
#[derive(Debug, Error)]
pub enum TripDataError {
    /// Not JSON, or JSON that doesn't fit the Trip shape
    #[error("malformed trip JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("trip field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("trip duration must be at least one day, got {duration}")]
    InvalidDuration { duration: u32 },

    #[error("itinerary day {day} is outside the trip's {duration} day(s)")]
    ItineraryDayOutOfRange { day: u32, duration: u32 },
}

impl Trip {
    /// Check the invariants serde can't express.
    pub fn validate(&self) -> Result<(), TripDataError> {
        if self.name.trim().is_empty() {
            return Err(TripDataError::EmptyField { field: "name" });
        }
        if self.country.trim().is_empty() {
            return Err(TripDataError::EmptyField { field: "country" });
        }
        if self.duration == 0 {
            return Err(TripDataError::InvalidDuration {
                duration: self.duration,
            });
        }
        if let Some(plan) = self
            .itinerary
            .iter()
            .find(|plan| plan.day == 0 || plan.day > self.duration)
        {
            return Err(TripDataError::ItineraryDayOutOfRange {
                day: plan.day,
                duration: self.duration,
            });
        }
        Ok(())
    }
}

/// Decode and validate a trip from JSON text.
///
/// Failures are returned as values (never panics) and also reported to
/// `diagnostics`. Use `.ok()` when only "trip or nothing" matters.
pub fn parse_trip_data(
    json_string: &str,
    diagnostics: &dyn BaseDiagnostics,
) -> Result<Trip, TripDataError> {
    let result = serde_json::from_str::<Trip>(json_string)
        .map_err(TripDataError::from)
        .and_then(|trip| {
            trip.validate()?;
            Ok(trip)
        });

    if let Err(e) = &result {
        diagnostics.emit(DiagnosticEvent::TripParseFailed {
            error: e.to_string(),
        });
    }

    result
}
