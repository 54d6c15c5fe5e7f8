//! DANG Compiler - decision rule compiler
//!
//! This crate validates declarative rule specifications and compiles them
//! into conditional expression templates for a downstream evaluator.

pub mod assembler;
pub mod chain_link;
pub mod codegen;
pub mod compiler;
pub mod error;
pub mod lowering;
pub mod operator;
pub mod validation;

// Re-export main types
pub use assembler::DecisionAssembler;
pub use chain_link::resolve_chain_link;
pub use compiler::{Compiler, CompilerOptions};
pub use error::{CompileError, Result};
pub use operator::Comparator;

// Re-export codegen types
pub use codegen::{format_literal, Condition, Expr, RuleCompiler, Template};

// Re-export validation types
pub use validation::{validate_intervals, validate_threshold, Interval, Threshold};
