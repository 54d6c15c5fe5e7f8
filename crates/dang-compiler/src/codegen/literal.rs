//! Literal value formatting

use dang_core::{Value, ValueType};

/// Format an output literal for embedding in a template.
///
/// `String` fields are wrapped in double quotes; every other declared type,
/// known or not, is embedded as-is.
pub fn format_literal(value: &Value, value_type: &ValueType) -> String {
    match value_type {
        ValueType::String => format!("\"{}\"", value),
        ValueType::Number | ValueType::Bool | ValueType::Other(_) => value.to_string(),
    }
}
