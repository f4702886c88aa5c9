//! Payments domain actions - business logic functions

mod create_checkout_link;

pub use create_checkout_link::{CheckoutLinkBuilder, CURRENCY, TRIP_ID_METADATA_KEY};
