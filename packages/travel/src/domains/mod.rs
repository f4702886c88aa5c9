pub mod payments;
pub mod trips;
