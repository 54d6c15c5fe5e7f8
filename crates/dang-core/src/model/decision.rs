//! Compiled decision definitions

use crate::types::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully resolved decision, ready for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Decision name
    pub name: String,

    /// Input fields, in declared order
    pub input_form: Vec<InputField>,

    /// Output fields, in declared order
    pub output_form: Vec<OutputField>,
}

/// Descriptive attributes shared by input and output fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub key: String,
    pub title: String,
    pub description: String,
    pub unit: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

/// An input field, either supplied directly or wired to another decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    #[serde(flatten)]
    pub meta: FieldMeta,

    /// Present only when the field declared a source reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_link: Option<ChainLink>,
}

/// An output field and the expression that computes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputField {
    #[serde(flatten)]
    pub meta: FieldMeta,

    pub rule: CompiledExpression,
}

/// Back-reference from an input field to another decision's output field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    /// Name of the decision that produces the value
    pub decision_name: String,

    /// Output key on the source decision
    pub source_key: String,

    /// Input key on this decision
    pub destination_key: String,
}

/// Conditional expression template emitted by the rule compiler
///
/// Opaque to this crate; it is evaluated downstream against live inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompiledExpression(String);

impl CompiledExpression {
    /// Template emitted for rule kinds the compiler does not recognise
    pub const UNSUPPORTED: &'static str = "unsupported rule type";

    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The inert fallback expression for unknown rule kinds
    pub fn unsupported() -> Self {
        Self(Self::UNSUPPORTED.to_string())
    }

    pub fn is_unsupported(&self) -> bool {
        self.0 == Self::UNSUPPORTED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Decision {
    /// Look up an output field by key
    pub fn output(&self, key: &str) -> Option<&OutputField> {
        self.output_form.iter().find(|field| field.meta.key == key)
    }

    /// Look up an input field by key
    pub fn input(&self, key: &str) -> Option<&InputField> {
        self.input_form.iter().find(|field| field.meta.key == key)
    }

    /// Chain links declared by this decision's inputs, in declared order
    pub fn chain_links(&self) -> impl Iterator<Item = &ChainLink> {
        self.input_form
            .iter()
            .filter_map(|field| field.chain_link.as_ref())
    }
}
