//! Rule compiler
//!
//! Compiles `RuleSpec` values into rendered expression templates.

use super::literal::format_literal;
use super::template::{Condition, Expr, Template};
use crate::error::{CompileError, Result};
use crate::operator::Comparator;
use crate::validation::{validate_intervals, validate_threshold, Interval};
use dang_core::{CompiledExpression, RuleSpec, Value, ValueType};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Rule compiler
pub struct RuleCompiler;

impl RuleCompiler {
    /// Compile a rule for the output field `field_key` of type `value_type`
    pub fn compile(
        field_key: &str,
        value_type: &ValueType,
        spec: &RuleSpec,
    ) -> Result<CompiledExpression> {
        let body = match spec {
            RuleSpec::RangeLookup { operand, intervals } => {
                Self::compile_range_lookup(operand, intervals, value_type)?
            }
            RuleSpec::BoolLookup {
                operand,
                on_true,
                on_false,
            } => Self::compile_bool_lookup(operand, on_true.as_ref(), on_false.as_ref(), value_type),
            RuleSpec::ThresholdLookup {
                operand,
                conditions,
            } => Self::compile_threshold_lookup(operand, conditions, value_type)?,
            RuleSpec::FunctionCall { function, operands } => Expr::Invocation {
                function: function.clone(),
                operands: operands.clone(),
            },
            RuleSpec::Unknown { .. } => return Ok(CompiledExpression::unsupported()),
        };

        Ok(CompiledExpression::new(
            Template::new(field_key, body).render(),
        ))
    }

    /// One branch per interval in ascending order; the upper-unbounded
    /// interval becomes the fallback.
    fn compile_range_lookup(
        operand: &str,
        intervals: &BTreeMap<String, Value>,
        value_type: &ValueType,
    ) -> Result<Expr> {
        let chain = validate_intervals(intervals.keys().map(String::as_str))?;

        let mut branches = Vec::with_capacity(chain.len());
        let mut fallback = None;

        for interval in &chain {
            let value = intervals.get(&interval.label).ok_or_else(|| {
                CompileError::InvalidInterval(format!("no value for '{}'", interval.label))
            })?;
            let literal = Expr::Literal(format_literal(value, value_type));

            match Self::interval_condition(interval, operand) {
                Some(condition) => branches.push((condition, literal)),
                None => fallback = Some(literal),
            }
        }

        // A validated chain always ends with an upper-unbounded interval.
        let fallback = fallback.ok_or(CompileError::NonExhaustiveIntervals)?;

        Ok(Expr::Conditional {
            branches,
            fallback: Box::new(fallback),
        })
    }

    /// Condition selecting `interval`, or `None` when it is upper-unbounded
    fn interval_condition(interval: &Interval, operand: &str) -> Option<Condition> {
        let upper = match interval.upper {
            Bound::Included(value) => {
                Condition::compare(Comparator::LessThanOrEquals, operand, value)
            }
            Bound::Excluded(value) => Condition::compare(Comparator::LessThan, operand, value),
            Bound::Unbounded => return None,
        };

        let lower = match interval.lower {
            Bound::Included(value) => Some(Condition::compare(
                Comparator::GreaterThanOrEquals,
                operand,
                value,
            )),
            Bound::Excluded(value) => {
                Some(Condition::compare(Comparator::GreaterThan, operand, value))
            }
            Bound::Unbounded => None,
        };

        Some(match lower {
            Some(lower) => Condition::and(lower, upper),
            None => upper,
        })
    }

    /// Missing branches render as `null`.
    fn compile_bool_lookup(
        operand: &str,
        on_true: Option<&Value>,
        on_false: Option<&Value>,
        value_type: &ValueType,
    ) -> Expr {
        let literal = |value: Option<&Value>| {
            Expr::Literal(format_literal(value.unwrap_or(&Value::Null), value_type))
        };

        Expr::Conditional {
            branches: vec![(
                Condition::Truthy {
                    operand: operand.to_string(),
                },
                literal(on_true),
            )],
            fallback: Box::new(literal(on_false)),
        }
    }

    fn compile_threshold_lookup(
        operand: &str,
        conditions: &BTreeMap<String, Value>,
        value_type: &ValueType,
    ) -> Result<Expr> {
        let threshold = validate_threshold(conditions.keys().map(String::as_str))?;

        let literal = |label: &str| -> Result<Expr> {
            let value = conditions.get(label).ok_or_else(|| {
                CompileError::InvalidThresholdMap(format!("no value for '{}'", label))
            })?;
            Ok(Expr::Literal(format_literal(value, value_type)))
        };

        Ok(Expr::Conditional {
            branches: vec![(
                Condition::compare(threshold.comparator, operand, threshold.pivot),
                literal(&threshold.true_label)?,
            )],
            fallback: Box::new(literal(&threshold.false_label)?),
        })
    }
}
