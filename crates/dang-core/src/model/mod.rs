//! Compiled decision model and rule specifications

pub mod decision;
pub mod rule;

pub use decision::{ChainLink, CompiledExpression, Decision, FieldMeta, InputField, OutputField};
pub use rule::{RuleKind, RuleSpec};
