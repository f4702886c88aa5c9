// Diagnostic events and the tracing-backed sink

use std::fmt;

use tracing::{error, warn};

use super::traits::BaseDiagnostics;

/// A recoverable problem reported by one of the text utilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// No ```json fenced block in the input
    NoJsonBlock,
    /// A fenced block was found but its content is not valid JSON (or not the expected shape)
    MalformedJson { error: String },
    /// Trip data failed to decode or validate
    TripParseFailed { error: String },
    /// Expected a string, got another JSON type
    NonStringInput { found: &'static str },
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEvent::NoJsonBlock => write!(f, "No JSON block found in markdown"),
            DiagnosticEvent::MalformedJson { error } => {
                write!(f, "Error parsing JSON from markdown: {}", error)
            }
            DiagnosticEvent::TripParseFailed { error } => {
                write!(f, "Failed to parse trip data: {}", error)
            }
            DiagnosticEvent::NonStringInput { found } => {
                write!(f, "Expected a string but got: {}", found)
            }
        }
    }
}

/// Forwards diagnostics to `tracing`.
///
/// Misses and type mismatches are warnings; parse failures are errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl BaseDiagnostics for TracingDiagnostics {
    fn emit(&self, event: DiagnosticEvent) {
        match &event {
            DiagnosticEvent::NoJsonBlock => warn!("{}", event),
            DiagnosticEvent::NonStringInput { found } => {
                warn!(found = %found, "Expected a string in get_first_word")
            }
            DiagnosticEvent::MalformedJson { error } => {
                error!(error = %error, "Error parsing JSON from markdown")
            }
            DiagnosticEvent::TripParseFailed { error } => {
                error!(error = %error, "Failed to parse trip data")
            }
        }
    }
}
