//! Decision assembler
//!
//! Turns decision requests into fully resolved `Decision` values. Assembly is
//! pure; persisting the result is left to the caller.

use crate::compiler::Compiler;
use crate::error::Result;
use dang_core::{
    Decision, DecisionRequest, FieldMeta, FormFieldRequest, InputField, OutputField,
    SaveDecisionRequest,
};

/// Assembles decisions from their request specifications
#[derive(Debug, Clone, Default)]
pub struct DecisionAssembler {
    compiler: Compiler,
}

impl DecisionAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compiler(compiler: Compiler) -> Self {
        Self { compiler }
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    /// Assemble a single decision.
    ///
    /// Input fields are resolved before output fields, each in declared
    /// order; the first failure is returned.
    pub fn assemble(&self, request: &DecisionRequest) -> Result<Decision> {
        let input_form = request
            .input_form
            .iter()
            .map(|field| self.input_field(field))
            .collect::<Result<Vec<_>>>()?;

        let output_form = request
            .output_form
            .iter()
            .map(|field| self.output_field(field))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            decision = request.name.as_str(),
            inputs = input_form.len(),
            outputs = output_form.len(),
            "Assembled decision"
        );

        Ok(Decision {
            name: request.name.clone(),
            input_form,
            output_form,
        })
    }

    /// Assemble every decision of a batch without persisting anything,
    /// stopping at the first failure
    pub fn assemble_batch(&self, request: &SaveDecisionRequest) -> Result<Vec<Decision>> {
        request
            .decisions
            .iter()
            .map(|decision| self.assemble(decision))
            .collect()
    }

    fn input_field(&self, field: &FormFieldRequest) -> Result<InputField> {
        let chain_link = self.compiler.resolve_source(&field.key, &field.value)?;
        Ok(InputField {
            meta: field_meta(field),
            chain_link,
        })
    }

    fn output_field(&self, field: &FormFieldRequest) -> Result<OutputField> {
        let rule = self
            .compiler
            .compile_rule(&field.key, &field.value_type, &field.rule)?;
        Ok(OutputField {
            meta: field_meta(field),
            rule,
        })
    }
}

fn field_meta(field: &FormFieldRequest) -> FieldMeta {
    FieldMeta {
        key: field.key.clone(),
        title: field.title.clone(),
        description: field.description.clone(),
        unit: field.unit.clone(),
        value_type: field.value_type.clone(),
    }
}
