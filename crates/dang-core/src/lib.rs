//! DANG Core - Core types and definitions for the DANG decision compiler
//!
//! This crate provides the fundamental types shared by every other crate:
//! - Literal values and declared value types
//! - Request types describing decisions to compile
//! - The rule specification sum type
//! - The compiled decision model handed to persistence

pub mod model;
pub mod request;
pub mod types;

// Re-export commonly used types
pub use model::{ChainLink, CompiledExpression, Decision, FieldMeta, InputField, OutputField};
pub use model::{RuleKind, RuleSpec};
pub use request::{DecisionRequest, FormFieldRequest, RuleRequest, SaveDecisionRequest};
pub use types::{Value, ValueType};
