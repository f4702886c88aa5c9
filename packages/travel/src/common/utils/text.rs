use serde_json::Value;

use crate::kernel::{BaseDiagnostics, DiagnosticEvent};

/// First whitespace-separated word of `input`.
///
/// Non-string input is not an error: it yields `""` and a `NonStringInput`
/// diagnostic naming the type that was received.
pub fn get_first_word(input: &Value, diagnostics: &dyn BaseDiagnostics) -> String {
    let Value::String(text) = input else {
        diagnostics.emit(DiagnosticEvent::NonStringInput {
            found: json_type_name(input),
        });
        return String::new();
    };

    text.split_whitespace().next().unwrap_or_default().to_string()
}

/// Turn a camelCase key into a label: `"startDate"` -> `"Start Date"`.
///
/// A space goes before every ASCII uppercase letter, then the first
/// character is uppercased. An input that already starts uppercase keeps the
/// inserted leading space (`"StartDate"` -> `" Start Date"`).
pub fn format_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
