//! Main compiler
//!
//! Provides a unified interface from wire rule requests to compiled
//! expressions.

use crate::chain_link::resolve_chain_link;
use crate::codegen::RuleCompiler;
use crate::error::{CompileError, Result};
use crate::lowering::lower_rule;
use dang_core::{ChainLink, CompiledExpression, RuleRequest, RuleSpec, ValueType};
use serde::{Deserialize, Serialize};

/// Compiler options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Fail on unknown rule kinds instead of emitting the inert
    /// `unsupported rule type` expression
    pub reject_unknown_rules: bool,
}

/// The DANG rule compiler
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompilerOptions,
}

impl Compiler {
    /// Create a new compiler instance with default options
    pub fn new() -> Self {
        Self::with_options(CompilerOptions::default())
    }

    /// Create a new compiler instance with custom options
    pub fn with_options(options: CompilerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compile the rule of output field `field_key`
    pub fn compile_rule(
        &self,
        field_key: &str,
        value_type: &ValueType,
        request: &RuleRequest,
    ) -> Result<CompiledExpression> {
        let spec = lower_rule(field_key, request)?;
        self.compile_spec(field_key, value_type, &spec)
    }

    /// Compile an already lowered rule specification
    pub fn compile_spec(
        &self,
        field_key: &str,
        value_type: &ValueType,
        spec: &RuleSpec,
    ) -> Result<CompiledExpression> {
        let rule_kind = spec.kind();
        tracing::debug!(field = field_key, kind = rule_kind.as_str(), "Compiling rule");

        if let RuleSpec::Unknown { kind } = spec {
            if self.options.reject_unknown_rules {
                return Err(CompileError::UnsupportedRuleKind(kind.clone()));
            }
            tracing::warn!(
                field = field_key,
                kind = kind.as_str(),
                "Unknown rule type, emitting inert expression"
            );
        }

        RuleCompiler::compile(field_key, value_type, spec)
    }

    /// Resolve the source reference of input field `field_key`
    pub fn resolve_source(&self, field_key: &str, reference: &str) -> Result<Option<ChainLink>> {
        resolve_chain_link(reference, field_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dang_core::Value;

    fn func_request(kind: &str) -> RuleRequest {
        RuleRequest::new(kind, vec!["age".to_string()], Value::from("risk"))
    }

    #[test]
    fn test_compiler_compile_rule() {
        let compiler = Compiler::new();
        let expr = compiler
            .compile_rule("score", &ValueType::Number, &func_request("Func"))
            .unwrap();
        assert_eq!(expr.as_str(), r#"{"score":{{risk .age}}}"#);
    }

    #[test]
    fn test_compiler_tolerates_unknown_kind_by_default() {
        let compiler = Compiler::default();
        let expr = compiler
            .compile_rule("score", &ValueType::Number, &func_request("Matrix"))
            .unwrap();
        assert!(expr.is_unsupported());
    }

    #[test]
    fn test_compiler_rejects_unknown_kind_when_configured() {
        let compiler = Compiler::with_options(CompilerOptions {
            reject_unknown_rules: true,
        });
        assert_eq!(
            compiler.compile_rule("score", &ValueType::Number, &func_request("Matrix")),
            Err(CompileError::UnsupportedRuleKind("Matrix".to_string()))
        );
    }

    #[test]
    fn test_compiler_compile_lowered_spec() {
        let compiler = Compiler::new();
        let spec = lower_rule("score", &func_request("Func")).unwrap();
        assert_eq!(spec.kind().as_str(), "Func");

        let expr = compiler
            .compile_spec("score", &ValueType::Number, &spec)
            .unwrap();
        assert_eq!(expr.as_str(), r#"{"score":{{risk .age}}}"#);

        let unknown = RuleSpec::Unknown {
            kind: "Matrix".to_string(),
        };
        assert_eq!(unknown.kind().as_str(), "Matrix");
        assert!(compiler
            .compile_spec("score", &ValueType::Number, &unknown)
            .unwrap()
            .is_unsupported());
    }

    #[test]
    fn test_compiler_resolve_source() {
        let compiler = Compiler::new();
        let link = compiler
            .resolve_source("base", "Decision.pricing.score")
            .unwrap()
            .unwrap();
        assert_eq!(link.destination_key, "base");
        assert!(compiler.resolve_source("base", "").unwrap().is_none());
    }

    #[test]
    fn test_compiler_options_deserialize_with_defaults() {
        let options: CompilerOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.reject_unknown_rules);

        let options: CompilerOptions =
            serde_json::from_str(r#"{"reject_unknown_rules": true}"#).unwrap();
        assert!(options.reject_unknown_rules);
    }
}
