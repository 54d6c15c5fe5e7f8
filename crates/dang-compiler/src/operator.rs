//! Comparison operators understood by the template evaluator

use std::fmt;

/// Numeric comparison between an operand and a constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    GreaterThan,
    GreaterThanOrEquals,
    LessThan,
    LessThanOrEquals,
}

impl Comparator {
    /// Function name used in the emitted template
    pub fn template_name(&self) -> &'static str {
        match self {
            Comparator::GreaterThan => "greater_than",
            Comparator::GreaterThanOrEquals => "greater_than_or_equals",
            Comparator::LessThan => "less_than",
            Comparator::LessThanOrEquals => "less_than_or_equals",
        }
    }

    /// Symbol used in threshold labels
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::GreaterThan => ">",
            Comparator::GreaterThanOrEquals => ">=",
            Comparator::LessThan => "<",
            Comparator::LessThanOrEquals => "<=",
        }
    }

    /// The comparator that holds exactly when this one does not
    pub fn complement(&self) -> Self {
        match self {
            Comparator::GreaterThan => Comparator::LessThanOrEquals,
            Comparator::GreaterThanOrEquals => Comparator::LessThan,
            Comparator::LessThan => Comparator::GreaterThanOrEquals,
            Comparator::LessThanOrEquals => Comparator::GreaterThan,
        }
    }

    /// True for `>` and `>=`
    pub fn is_greater(&self) -> bool {
        matches!(
            self,
            Comparator::GreaterThan | Comparator::GreaterThanOrEquals
        )
    }

    /// Split a leading comparator symbol off `label`, longest symbol first
    pub fn strip_prefix(label: &str) -> Option<(Self, &str)> {
        const BY_LENGTH: [Comparator; 4] = [
            Comparator::GreaterThanOrEquals,
            Comparator::LessThanOrEquals,
            Comparator::GreaterThan,
            Comparator::LessThan,
        ];

        BY_LENGTH.iter().find_map(|comparator| {
            label
                .strip_prefix(comparator.symbol())
                .map(|rest| (*comparator, rest))
        })
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}
