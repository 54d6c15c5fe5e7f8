//! Lowering of wire rule requests into typed rule specifications
//!
//! Lookup kinds are checked for a usable operand first and for a mapping
//! payload second; function calls need a string payload.

use crate::error::{CompileError, Result};
use dang_core::{RuleKind, RuleRequest, RuleSpec, Value};
use std::collections::BTreeMap;

/// Convert `request`, declared on output field `field_key`, into a `RuleSpec`
pub fn lower_rule(field_key: &str, request: &RuleRequest) -> Result<RuleSpec> {
    match RuleKind::parse(&request.kind) {
        RuleKind::RangeLookup => {
            let operand = lookup_operand(field_key, request)?;
            let intervals = mapping_payload(field_key, request)?;
            Ok(RuleSpec::RangeLookup { operand, intervals })
        }
        RuleKind::BoolLookup => {
            let operand = lookup_operand(field_key, request)?;
            let mut payload = mapping_payload(field_key, request)?;
            Ok(RuleSpec::BoolLookup {
                operand,
                on_true: payload.remove("true"),
                on_false: payload.remove("false"),
            })
        }
        RuleKind::ThresholdLookup => {
            let operand = lookup_operand(field_key, request)?;
            let conditions = mapping_payload(field_key, request)?;
            Ok(RuleSpec::ThresholdLookup {
                operand,
                conditions,
            })
        }
        RuleKind::FunctionCall => match &request.rule {
            Value::String(function) => Ok(RuleSpec::FunctionCall {
                function: function.clone(),
                operands: request.args.clone(),
            }),
            other => Err(CompileError::InvalidRule {
                field: field_key.to_string(),
                reason: format!("expected a function name, found {}", other.type_name()),
            }),
        },
        RuleKind::Unknown(kind) => Ok(RuleSpec::Unknown { kind }),
    }
}

/// The first operand of a lookup rule, which must be non-empty
fn lookup_operand(field_key: &str, request: &RuleRequest) -> Result<String> {
    match request.args.first() {
        Some(operand) if !operand.is_empty() => Ok(operand.clone()),
        _ => Err(CompileError::InvalidArgs {
            field: field_key.to_string(),
        }),
    }
}

fn mapping_payload(field_key: &str, request: &RuleRequest) -> Result<BTreeMap<String, Value>> {
    match &request.rule {
        Value::Object(map) => Ok(map.clone()),
        other => Err(CompileError::InvalidRule {
            field: field_key.to_string(),
            reason: format!("expected a mapping, found {}", other.type_name()),
        }),
    }
}
