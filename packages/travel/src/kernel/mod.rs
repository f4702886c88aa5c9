//! Kernel module - infrastructure traits, adapters and test doubles.

pub mod deps;
pub mod diagnostics;
pub mod test_dependencies;
pub mod traits;

pub use deps::StripeAdapter;
pub use diagnostics::{DiagnosticEvent, TracingDiagnostics};
pub use test_dependencies::{CommerceCall, MockCommerceService, RecordingDiagnostics};
pub use traits::*;
