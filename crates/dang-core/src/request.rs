//! Request types describing decisions to compile
//!
//! These mirror the JSON accepted at the service boundary. Every field is
//! optional on the wire and falls back to its zero value.

use crate::types::{Value, ValueType};
use serde::{Deserialize, Serialize};

/// A batch of decisions to compile and persist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveDecisionRequest {
    #[serde(default)]
    pub decisions: Vec<DecisionRequest>,
}

/// A single decision specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Decision name, also the persistence key
    #[serde(default)]
    pub name: String,

    /// Input fields, in declared order
    #[serde(default)]
    pub input_form: Vec<FormFieldRequest>,

    /// Output fields, in declared order
    #[serde(default)]
    pub output_form: Vec<FormFieldRequest>,
}

/// A form field specification
///
/// Input fields use `value` as a dotted source reference; output fields
/// use `rule`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormFieldRequest {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub unit: String,

    #[serde(rename = "type", default)]
    pub value_type: ValueType,

    /// Source reference such as `Decision.pricing.score`
    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub rule: RuleRequest,
}

/// Raw rule specification as received on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleRequest {
    /// Rule kind name (`IntervalMap`, `BoolMap`, `ThresholdMap`, `Func`)
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Operand keys, in declared order
    #[serde(default)]
    pub args: Vec<String>,

    /// Kind-dependent payload
    #[serde(default)]
    pub rule: Value,
}

impl SaveDecisionRequest {
    pub fn new(decisions: Vec<DecisionRequest>) -> Self {
        Self { decisions }
    }
}

impl DecisionRequest {
    /// Create an empty decision specification
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_form: Vec::new(),
            output_form: Vec::new(),
        }
    }

    /// Add an input field
    pub fn with_input(mut self, field: FormFieldRequest) -> Self {
        self.input_form.push(field);
        self
    }

    /// Add an output field
    pub fn with_output(mut self, field: FormFieldRequest) -> Self {
        self.output_form.push(field);
        self
    }
}

impl FormFieldRequest {
    /// Create a directly supplied input field
    pub fn input(key: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            key: key.into(),
            value_type,
            ..Self::default()
        }
    }

    /// Create an output field computed by `rule`
    pub fn output(key: impl Into<String>, value_type: ValueType, rule: RuleRequest) -> Self {
        Self {
            key: key.into(),
            value_type,
            rule,
            ..Self::default()
        }
    }

    /// Set the dotted source reference
    pub fn with_source(mut self, reference: impl Into<String>) -> Self {
        self.value = reference.into();
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the unit
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

impl RuleRequest {
    pub fn new(kind: impl Into<String>, args: Vec<String>, rule: Value) -> Self {
        Self {
            kind: kind.into(),
            args,
            rule,
        }
    }
}
