// Tourvisto - Travel Planning Core
//
// Checkout links for generated trips, plus the text and number helpers the
// dashboard and trip pages use to present them.
//
// Domains live in domains/*; infrastructure traits and their test doubles in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
