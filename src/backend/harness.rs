//! Compose the complete test program.
//!
//! ```text
//! ExperimentDescription ─┬─ validate ──────────────────────────────┐
//!                        └─ reference::acquire → ReferenceOutcome ─┴─ build_program → Program → String
//! ```

use std::path::Path;

use lemng_codeir::{Block, EmitConfig, Function, Param, Program};
use miette::Diagnostic;
use thiserror::Error;

use super::emit::{
    emit_calculate, emit_checks, emit_complex_generator, emit_concentration_map, emit_constituent,
};
use super::vocab;
use crate::model::{Composition, Corrections, ExperimentDescription, Strictness, ValidationError, validate};
use crate::reference::{self, ReferenceConfig, ReferenceError, ReferenceOutcome};

/// Error while producing a test program.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Reference(#[from] ReferenceError),
}

/// Build the program for a description and the reference outcome obtained for it.
///
/// Functions are ordered as the harness needs them declared: complex generators in constituent order, then `main`.
#[tracing::instrument(skip_all, fields(constituents = description.constituents.len(), oscillating = outcome.is_oscillating()))]
pub fn build_program(
    description: &ExperimentDescription,
    outcome: &ReferenceOutcome,
    corrections: Corrections,
) -> Result<Program, ValidationError> {
    let composition = Composition::from_description(description)?;

    let mut main = Function::new("int", "main", vec![Param::new("int", ""), Param::new("char **", "")]);
    for constituent in &description.constituents {
        main.add_block(emit_constituent(constituent));
    }
    main.add_block(emit_concentration_map(vocab::BGE_MAP, &composition.background_concentrations));
    main.add_block(emit_concentration_map(vocab::SAMPLE_MAP, &composition.sample_concentrations));

    match outcome {
        ReferenceOutcome::Oscillating => {
            main.add_block(emit_calculate(&composition.background, &composition.sample, corrections, true));
            main.add_block(Block::from_lines([vocab::DISCARD_RESULT_STATEMENT]));
        }
        ReferenceOutcome::Normal(expected) => {
            main.add_block(emit_calculate(&composition.background, &composition.sample, corrections, false));
            for check in emit_checks(expected) {
                main.add_block(check);
            }
        }
    }
    main.add_block(Block::from_lines([vocab::SUCCESS_STATEMENT]));

    let mut program = Program::new();
    for include in vocab::INCLUDES {
        program.add_include(include);
    }
    for statement in vocab::PRELUDE {
        program.add_prelude(statement);
    }
    for generator in description.constituents.iter().filter_map(emit_complex_generator) {
        program.add_function(generator);
    }
    program.add_function(main);

    tracing::debug!(functions = program.functions().len(), "composed test program");
    Ok(program)
}

/// Validates, acquires reference data and renders test programs.
#[derive(Debug, Clone, Default)]
pub struct HarnessGenerator {
    emit_config: EmitConfig,
    strictness: Strictness,
}

impl HarnessGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_emit_config(mut self, config: EmitConfig) -> Self {
        self.emit_config = config;
        self
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Full pipeline for a description stored at `description_path`.
    ///
    /// The description is validated before the reference generator runs, so an invalid input never starts it.
    pub fn generate(
        &self,
        description: &ExperimentDescription,
        description_path: &Path,
        reference: &ReferenceConfig,
    ) -> Result<String, GenerationError> {
        validate(description, self.strictness)?;
        let outcome = reference::acquire(reference, description_path)?;
        self.render(description, &outcome, reference.corrections)
    }

    /// Render the program for an already acquired outcome. Does not validate.
    pub fn render(
        &self,
        description: &ExperimentDescription,
        outcome: &ReferenceOutcome,
        corrections: Corrections,
    ) -> Result<String, GenerationError> {
        let program = build_program(description, outcome, corrections)?;
        Ok(program.render(&self.emit_config))
    }
}
