//! Trips domain - generated travel plans and the form that requests them
//!
//! Responsibilities:
//! - Typed Trip / TripFormData records
//! - Decoding and validating generator output

pub mod models;

pub use models::{
    parse_trip_data, Activity, DayPlan, Location, Trip, TripDataError, TripFormData,
    TripFormField,
};
