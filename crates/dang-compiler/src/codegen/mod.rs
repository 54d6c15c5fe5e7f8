//! Code generation module
//!
//! Rule specifications are lowered into a small template IR, which is then
//! rendered into the text the downstream evaluator consumes.

pub mod literal;
pub mod rule_codegen;
pub mod template;

pub use literal::format_literal;
pub use rule_codegen::RuleCompiler;
pub use template::{Condition, Expr, Template};
