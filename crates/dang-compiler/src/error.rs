//! Compiler error types

use thiserror::Error;

/// Compiler error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Lookup rule without a usable operand
    #[error("invalid args for field '{field}'")]
    InvalidArgs { field: String },

    /// Rule payload has the wrong shape for its kind
    #[error("invalid rule for field '{field}': {reason}")]
    InvalidRule { field: String, reason: String },

    /// Malformed or degenerate interval label
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// Intervals leave part of the real line uncovered
    #[error("non-exhaustive intervals")]
    NonExhaustiveIntervals,

    /// Intervals cover some point more than once
    #[error("overlapping intervals")]
    OverlappingIntervals,

    /// Threshold conditions are not two complementary halves
    #[error("invalid threshold map: {0}")]
    InvalidThresholdMap(String),

    /// Source reference is not of the form `Decision.<name>.<key>`
    #[error("unrecognized source component in '{0}'")]
    UnrecognizedSourceComponent(String),

    /// Unknown rule kind, raised only when unknown kinds are rejected
    #[error("unsupported rule type '{0}'")]
    UnsupportedRuleKind(String),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
