//! Interval partition validation
//!
//! A range lookup is only compilable when its interval labels tile the real
//! line exactly once. Labels use the notation
//!
//! ```text
//! (...B]  (...B)          lower-unbounded
//! [A...B] [A...B) (A...B] (A...B)
//! (A...)                  upper-unbounded
//! ```
//!
//! where a bracket includes its endpoint and a parenthesis excludes it.
//! Validation walks the chain from the lower-unbounded interval upwards:
//! every interval must start exactly where the previous one stopped, with
//! the boundary point owned by exactly one of the two.

use crate::error::{CompileError, Result};
use std::ops::Bound;

const SEPARATOR: &str = "...";

/// A parsed interval label
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    /// Label exactly as written in the rule payload
    pub label: String,
    pub lower: Bound<f64>,
    pub upper: Bound<f64>,
}

impl Interval {
    /// Parse an interval label
    pub fn parse(label: &str) -> Result<Self> {
        let (lower_text, upper_text) = label
            .split_once(SEPARATOR)
            .ok_or_else(|| invalid(label, "missing '...' separator"))?;

        let lower = if let Some(rest) = lower_text.strip_prefix('(') {
            if rest.is_empty() {
                Bound::Unbounded
            } else {
                Bound::Excluded(parse_endpoint(rest, label)?)
            }
        } else if let Some(rest) = lower_text.strip_prefix('[') {
            Bound::Included(parse_endpoint(rest, label)?)
        } else {
            return Err(invalid(label, "lower bound must start with '(' or '['"));
        };

        let upper = if let Some(rest) = upper_text.strip_suffix(')') {
            if rest.is_empty() {
                Bound::Unbounded
            } else {
                Bound::Excluded(parse_endpoint(rest, label)?)
            }
        } else if let Some(rest) = upper_text.strip_suffix(']') {
            Bound::Included(parse_endpoint(rest, label)?)
        } else {
            return Err(invalid(label, "upper bound must end with ')' or ']'"));
        };

        let interval = Self {
            label: label.to_string(),
            lower,
            upper,
        };

        if interval.is_empty() {
            return Err(invalid(label, "interval contains no values"));
        }

        Ok(interval)
    }

    pub fn is_lower_unbounded(&self) -> bool {
        matches!(self.lower, Bound::Unbounded)
    }

    pub fn is_upper_unbounded(&self) -> bool {
        matches!(self.upper, Bound::Unbounded)
    }

    fn is_empty(&self) -> bool {
        match (self.lower, self.upper) {
            (Bound::Included(lo), Bound::Included(hi)) => lo > hi,
            (Bound::Included(lo), Bound::Excluded(hi))
            | (Bound::Excluded(lo), Bound::Included(hi))
            | (Bound::Excluded(lo), Bound::Excluded(hi)) => lo >= hi,
            _ => false,
        }
    }

    /// The opening the next interval in the chain must have, or `None` when
    /// this interval runs to positive infinity.
    ///
    /// A closed upper bound hands the boundary point to this interval, so the
    /// next one must open just above it; an open upper bound leaves the point
    /// to the next interval.
    fn next_opening(&self) -> Option<Bound<f64>> {
        match self.upper {
            Bound::Included(value) => Some(Bound::Excluded(value)),
            Bound::Excluded(value) => Some(Bound::Included(value)),
            Bound::Unbounded => None,
        }
    }
}

/// Validate that `labels` form a contiguous, non-overlapping partition of the
/// real line, returning the parsed intervals in ascending order.
///
/// # Errors
///
/// - `InvalidInterval` for malformed or empty labels, for a single label, and
///   for a lower-unbounded label that is also upper-unbounded
/// - `NonExhaustiveIntervals` when the chain breaks before reaching `+inf`
/// - `OverlappingIntervals` when two labels share an opening or some labels
///   are never reached
pub fn validate_intervals<'a, I>(labels: I) -> Result<Vec<Interval>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut remaining = labels
        .into_iter()
        .map(Interval::parse)
        .collect::<Result<Vec<_>>>()?;

    let total = remaining.len();
    if total == 1 {
        return Err(CompileError::InvalidInterval(format!(
            "a single interval '{}' cannot cover the real line",
            remaining[0].label
        )));
    }

    let mut chain = Vec::with_capacity(total);
    let mut opening = Bound::Unbounded;

    loop {
        let mut candidates = remaining
            .iter()
            .enumerate()
            .filter(|(_, interval)| interval.lower == opening)
            .map(|(index, _)| index);

        let index = match (candidates.next(), candidates.next()) {
            (None, _) => return Err(CompileError::NonExhaustiveIntervals),
            (Some(_), Some(_)) => return Err(CompileError::OverlappingIntervals),
            (Some(index), None) => index,
        };

        let interval = remaining.swap_remove(index);
        let next = interval.next_opening();

        if chain.is_empty() && next.is_none() {
            return Err(invalid(
                &interval.label,
                "an unbounded interval cannot share the line with others",
            ));
        }

        chain.push(interval);

        match next {
            Some(bound) => opening = bound,
            None => break,
        }
    }

    // Labels left over were never reachable from the chain.
    if chain.len() != total {
        return Err(CompileError::OverlappingIntervals);
    }

    Ok(chain)
}

fn parse_endpoint(text: &str, label: &str) -> Result<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| invalid(label, &format!("'{}' is not a number", text)))?;

    if !value.is_finite() {
        return Err(invalid(label, "bounds must be finite"));
    }

    Ok(value)
}

fn invalid(label: &str, reason: &str) -> CompileError {
    CompileError::InvalidInterval(format!("'{}': {}", label, reason))
}
