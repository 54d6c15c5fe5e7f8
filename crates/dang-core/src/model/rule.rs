//! Rule specifications
//!
//! `RuleSpec` is the strongly-typed form of a `RuleRequest`: each kind
//! carries exactly the payload shape it needs.

use crate::types::Value;
use std::collections::BTreeMap;

/// Rule kind as named on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    RangeLookup,
    BoolLookup,
    ThresholdLookup,
    FunctionCall,
    Unknown(String),
}

impl RuleKind {
    /// Parse a wire kind name; unrecognised names are kept as `Unknown`
    pub fn parse(name: &str) -> Self {
        match name {
            "IntervalMap" => RuleKind::RangeLookup,
            "BoolMap" => RuleKind::BoolLookup,
            "ThresholdMap" => RuleKind::ThresholdLookup,
            "Func" => RuleKind::FunctionCall,
            other => RuleKind::Unknown(other.to_string()),
        }
    }

    /// Wire name of this kind
    pub fn as_str(&self) -> &str {
        match self {
            RuleKind::RangeLookup => "IntervalMap",
            RuleKind::BoolLookup => "BoolMap",
            RuleKind::ThresholdLookup => "ThresholdMap",
            RuleKind::FunctionCall => "Func",
            RuleKind::Unknown(name) => name,
        }
    }
}

/// A validated-shape rule specification
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSpec {
    /// Select a literal by the interval the operand falls into
    RangeLookup {
        operand: String,
        /// Interval label -> output literal
        intervals: BTreeMap<String, Value>,
    },

    /// Select a literal by the operand's truthiness
    BoolLookup {
        operand: String,
        on_true: Option<Value>,
        on_false: Option<Value>,
    },

    /// Select between two literals by a single comparison
    ThresholdLookup {
        operand: String,
        /// Condition label (e.g. `>=18`) -> output literal
        conditions: BTreeMap<String, Value>,
    },

    /// Invoke a named function over the operands
    FunctionCall {
        function: String,
        operands: Vec<String>,
    },

    /// Unrecognised rule kind
    Unknown { kind: String },
}

impl RuleSpec {
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleSpec::RangeLookup { .. } => RuleKind::RangeLookup,
            RuleSpec::BoolLookup { .. } => RuleKind::BoolLookup,
            RuleSpec::ThresholdLookup { .. } => RuleKind::ThresholdLookup,
            RuleSpec::FunctionCall { .. } => RuleKind::FunctionCall,
            RuleSpec::Unknown { kind } => RuleKind::Unknown(kind.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_parse() {
        assert_eq!(RuleKind::parse("IntervalMap"), RuleKind::RangeLookup);
        assert_eq!(RuleKind::parse("BoolMap"), RuleKind::BoolLookup);
        assert_eq!(RuleKind::parse("ThresholdMap"), RuleKind::ThresholdLookup);
        assert_eq!(RuleKind::parse("Func"), RuleKind::FunctionCall);
        assert_eq!(
            RuleKind::parse("Lookup"),
            RuleKind::Unknown("Lookup".to_string())
        );
    }

    #[test]
    fn test_rule_kind_roundtrip_names() {
        for name in ["IntervalMap", "BoolMap", "ThresholdMap", "Func", "Custom"] {
            assert_eq!(RuleKind::parse(name).as_str(), name);
        }
    }

    #[test]
    fn test_rule_spec_kind() {
        let spec = RuleSpec::FunctionCall {
            function: "risk".to_string(),
            operands: vec!["age".to_string()],
        };
        assert_eq!(spec.kind(), RuleKind::FunctionCall);

        let spec = RuleSpec::Unknown {
            kind: "Matrix".to_string(),
        };
        assert_eq!(spec.kind(), RuleKind::Unknown("Matrix".to_string()));
    }
}
