pub mod trip;
pub mod trip_form;

pub use trip::*;
pub use trip_form::*;
