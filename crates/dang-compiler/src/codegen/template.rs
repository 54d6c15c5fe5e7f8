//! Template IR and renderer
//!
//! Rendered templates follow this grammar:
//!
//! ```text
//! Template     := '{' '"' fieldKey '"' ':' Expr '}'
//! Expr         := Literal | Conditional | Invocation
//! Conditional  := '{{if' Cond '}}' Expr ('{{else if' Cond '}}' Expr)* '{{else}}' Expr '{{end}}'
//! Cond         := '.' operandKey
//!               | Operator '.' operandKey Number
//!               | '(and' '(' Cond ')' '(' Cond ')' ')'
//! Invocation   := '{{' functionName ('.' operandKey)* '}}'
//! ```

use crate::operator::Comparator;
use std::fmt::{self, Write};

/// A branch condition
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The operand itself, evaluated for truthiness
    Truthy { operand: String },

    /// `<comparator> .<operand> <value>`
    Compare {
        comparator: Comparator,
        operand: String,
        value: f64,
    },

    /// Both conditions hold
    And(Box<Condition>, Box<Condition>),
}

/// A template expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Pre-formatted literal text
    Literal(String),

    /// Call of a named function over operands
    Invocation {
        function: String,
        operands: Vec<String>,
    },

    /// `if / else if ... / else` chain
    Conditional {
        branches: Vec<(Condition, Expr)>,
        fallback: Box<Expr>,
    },
}

/// A complete template binding one output field to an expression
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub field_key: String,
    pub body: Expr,
}

impl Condition {
    pub fn compare(comparator: Comparator, operand: &str, value: f64) -> Self {
        Condition::Compare {
            comparator,
            operand: operand.to_string(),
            value,
        }
    }

    pub fn and(left: Condition, right: Condition) -> Self {
        Condition::And(Box::new(left), Box::new(right))
    }
}

impl Template {
    pub fn new(field_key: impl Into<String>, body: Expr) -> Self {
        Self {
            field_key: field_key.into(),
            body,
        }
    }

    /// Render the template text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Truthy { operand } => write!(f, ".{}", operand),
            Condition::Compare {
                comparator,
                operand,
                value,
            } => write!(f, "{} .{} {}", comparator, operand, value),
            Condition::And(left, right) => write!(f, "(and ({}) ({}))", left, right),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(text) => f.write_str(text),
            Expr::Invocation { function, operands } => {
                write!(f, "{{{{{}", function)?;
                for operand in operands {
                    write!(f, " .{}", operand)?;
                }
                f.write_str("}}")
            }
            Expr::Conditional { branches, fallback } => {
                for (index, (condition, expr)) in branches.iter().enumerate() {
                    let keyword = if index == 0 { "if" } else { "else if" };
                    write!(f, "{{{{{} {}}}}}{}", keyword, condition, expr)?;
                }
                write!(f, "{{{{else}}}}{}{{{{end}}}}", fallback)
            }
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // serde_json quotes and escapes the key
        let key = serde_json::Value::String(self.field_key.clone());
        f.write_char('{')?;
        write!(f, "{}:{}", key, self.body)?;
        f.write_char('}')
    }
}
