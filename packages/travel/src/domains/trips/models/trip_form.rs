use serde::{Deserialize, Serialize};

use crate::common::utils::format_key;

/// What a user fills in to request a generated trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripFormData {
    pub country: String,
    pub travel_style: String,
    pub interest: String,
    pub budget: String,
    pub duration: u32,
    pub group_type: String,
}

/// Keys of [`TripFormData`] as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripFormField {
    Country,
    TravelStyle,
    Interest,
    Budget,
    Duration,
    GroupType,
}

impl TripFormField {
    pub const ALL: [TripFormField; 6] = [
        TripFormField::Country,
        TripFormField::TravelStyle,
        TripFormField::Interest,
        TripFormField::Budget,
        TripFormField::Duration,
        TripFormField::GroupType,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TripFormField::Country => "country",
            TripFormField::TravelStyle => "travelStyle",
            TripFormField::Interest => "interest",
            TripFormField::Budget => "budget",
            TripFormField::Duration => "duration",
            TripFormField::GroupType => "groupType",
        }
    }

    /// Display label, e.g. "Travel Style"
    pub fn label(self) -> String {
        format_key(self.key())
    }
}

impl TripFormData {
    pub fn value(&self, field: TripFormField) -> String {
        match field {
            TripFormField::Country => self.country.clone(),
            TripFormField::TravelStyle => self.travel_style.clone(),
            TripFormField::Interest => self.interest.clone(),
            TripFormField::Budget => self.budget.clone(),
            TripFormField::Duration => self.duration.to_string(),
            TripFormField::GroupType => self.group_type.clone(),
        }
    }

    /// `(label, value)` pairs in form order, for summaries and confirmation screens.
    pub fn labeled_values(&self) -> Vec<(String, String)> {
        TripFormField::ALL
            .iter()
            .map(|&field| (field.label(), self.value(field)))
            .collect()
    }
}
