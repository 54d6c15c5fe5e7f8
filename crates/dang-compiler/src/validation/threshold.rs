//! Threshold pair validation
//!
//! A threshold lookup carries exactly two condition labels such as `>=18`
//! and `<18`. They must be complementary halves of the real line around the
//! same pivot, so that every input satisfies exactly one of them.

use crate::error::{CompileError, Result};
use crate::operator::Comparator;

/// A validated threshold pair
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    pub pivot: f64,
    /// Comparison applied to the operand; true selects `true_label`
    pub comparator: Comparator,
    pub true_label: String,
    pub false_label: String,
}

#[derive(Debug, Clone, Copy)]
struct LabeledCondition<'a> {
    label: &'a str,
    comparator: Comparator,
    pivot: f64,
}

impl<'a> LabeledCondition<'a> {
    fn parse(label: &'a str) -> Result<Self> {
        let (comparator, rest) = Comparator::strip_prefix(label).ok_or_else(|| {
            CompileError::InvalidThresholdMap(format!(
                "'{}' does not start with one of >, >=, <, <=",
                label
            ))
        })?;

        let pivot: f64 = rest.trim().parse().map_err(|_| {
            CompileError::InvalidThresholdMap(format!("'{}' has no numeric threshold", label))
        })?;

        if !pivot.is_finite() {
            return Err(CompileError::InvalidThresholdMap(format!(
                "'{}' has a non-finite threshold",
                label
            )));
        }

        Ok(Self {
            label,
            comparator,
            pivot,
        })
    }
}

/// Validate a threshold pair and decide which label is the "true" branch.
///
/// The accepted pairs are (`>`, `<=`), (`>=`, `<`), (`<`, `>=`) and
/// (`<=`, `>`) over the same pivot. Each pair reads correctly in either
/// assignment, so the label with the `>`/`>=` comparator is always chosen as
/// the true branch; the result does not depend on the order of `labels`.
///
/// # Errors
///
/// `InvalidThresholdMap` when there are not exactly two labels, a label does
/// not parse, the pivots differ, or the comparators are not complementary.
pub fn validate_threshold<'a, I>(labels: I) -> Result<Threshold>
where
    I: IntoIterator<Item = &'a str>,
{
    let labels: Vec<&str> = labels.into_iter().collect();
    if labels.len() != 2 {
        return Err(CompileError::InvalidThresholdMap(format!(
            "expected exactly 2 conditions, found {}",
            labels.len()
        )));
    }

    let first = LabeledCondition::parse(labels[0])?;
    let second = LabeledCondition::parse(labels[1])?;

    if first.pivot != second.pivot {
        return Err(CompileError::InvalidThresholdMap(format!(
            "'{}' and '{}' use different thresholds",
            first.label, second.label
        )));
    }

    if second.comparator != first.comparator.complement() {
        return Err(CompileError::InvalidThresholdMap(format!(
            "'{}' and '{}' are not complementary",
            first.label, second.label
        )));
    }

    let (on_true, on_false) = if first.comparator.is_greater() {
        (first, second)
    } else {
        (second, first)
    };

    Ok(Threshold {
        pivot: on_true.pivot,
        comparator: on_true.comparator,
        true_label: on_true.label.to_string(),
        false_label: on_false.label.to_string(),
    })
}
