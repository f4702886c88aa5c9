//! Payments domain - selling trips through hosted checkout links
//!
//! Responsibilities:
//! - Converting trip prices to minor currency units
//! - Creating product, price and payment link on the commerce service
//! - Pointing the post-payment redirect back at the trip

pub mod actions;
pub mod error;
pub mod models;

pub use actions::CheckoutLinkBuilder;
pub use error::CheckoutError;
pub use models::{CheckoutConfig, CheckoutLink, CheckoutRequest};
