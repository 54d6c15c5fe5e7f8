//! Declared value types of form fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a form field's value
///
/// Unknown names are preserved verbatim so a decision round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    Number,
    Bool,
    String,
    Other(String),
}

impl ValueType {
    pub fn as_str(&self) -> &str {
        match self {
            ValueType::Number => "Number",
            ValueType::Bool => "Bool",
            ValueType::String => "String",
            ValueType::Other(name) => name,
        }
    }
}

impl Default for ValueType {
    fn default() -> Self {
        ValueType::Other(String::new())
    }
}

impl From<&str> for ValueType {
    fn from(name: &str) -> Self {
        match name {
            "Number" => ValueType::Number,
            "Bool" => ValueType::Bool,
            "String" => ValueType::String,
            other => ValueType::Other(other.to_string()),
        }
    }
}

impl From<String> for ValueType {
    fn from(name: String) -> Self {
        ValueType::from(name.as_str())
    }
}

impl From<ValueType> for String {
    fn from(value_type: ValueType) -> Self {
        value_type.as_str().to_string()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_from_known_names() {
        assert_eq!(ValueType::from("Number"), ValueType::Number);
        assert_eq!(ValueType::from("Bool"), ValueType::Bool);
        assert_eq!(ValueType::from("String"), ValueType::String);
    }

    #[test]
    fn test_value_type_preserves_unknown_names() {
        let value_type = ValueType::from("Date");
        assert_eq!(value_type, ValueType::Other("Date".to_string()));
        assert_eq!(value_type.as_str(), "Date");
    }

    #[test]
    fn test_value_type_serde_as_plain_string() {
        let json = serde_json::to_string(&ValueType::Number).unwrap();
        assert_eq!(json, r#""Number""#);

        let parsed: ValueType = serde_json::from_str(r#""Currency""#).unwrap();
        assert_eq!(parsed, ValueType::Other("Currency".to_string()));
    }
}
