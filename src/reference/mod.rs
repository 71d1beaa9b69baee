//! Reference-output acquisition
//!
//! Runs the external reference generator on an experiment description and turns its exit
//! status and result file into a [`ReferenceOutcome`].
//!
//! The generator is invoked as
//!
//! ```text
//! <generator> <description> <results> <debye-huckel> <onsager-fuoss> <viscosity>
//! ```
//!
//! with every path absolute and each correction flag spelled `0` or `1`. The ECHMET library
//! directories are appended to the child's library search path. Exit code `0x66` marks a
//! system whose solution oscillates; the result file is not consulted in that case.

mod errors;
mod invocation;
mod parser;

use std::path::{Path, PathBuf};

pub use errors::ReferenceError;
pub use invocation::{Invocation, LIBRARY_PATH_VAR, RESULTS_SUFFIX, ResultFile, augmented_library_path};
pub use parser::{BgeProperties, EigenzoneProperties, ExpectedResults, parse_results};

use crate::model::Corrections;

/// Exit code the generator uses for oscillating systems.
pub const OSCILLATION_EXIT_CODE: i32 = 0x66;

/// Where the generator lives and how to run it.
#[derive(Debug, Clone)]
pub struct ReferenceConfig {
    pub generator: PathBuf,
    pub ecl_dir: PathBuf,
    pub lemng_dir: PathBuf,
    pub corrections: Corrections,
    /// Discard the generator's stdout and stderr
    pub silent: bool,
    /// Directory receiving the result file; the working directory when unset
    pub results_dir: Option<PathBuf>,
}

impl ReferenceConfig {
    pub fn new(generator: impl Into<PathBuf>, ecl_dir: impl Into<PathBuf>, lemng_dir: impl Into<PathBuf>) -> Self {
        Self {
            generator: generator.into(),
            ecl_dir: ecl_dir.into(),
            lemng_dir: lemng_dir.into(),
            corrections: Corrections::none(),
            silent: false,
            results_dir: None,
        }
    }

    pub fn with_corrections(mut self, corrections: Corrections) -> Self {
        self.corrections = corrections;
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = Some(dir.into());
        self
    }
}

/// What the reference generator concluded.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceOutcome {
    Normal(ExpectedResults),
    Oscillating,
}

impl ReferenceOutcome {
    pub fn expected(&self) -> Option<&ExpectedResults> {
        match self {
            ReferenceOutcome::Normal(results) => Some(results),
            ReferenceOutcome::Oscillating => None,
        }
    }

    pub fn is_oscillating(&self) -> bool {
        matches!(self, ReferenceOutcome::Oscillating)
    }
}

/// How an exit code is to be interpreted before any result file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    Success,
    Oscillating,
    Failure(Option<i32>),
}

/// `None` means the process did not exit normally.
pub fn classify_exit_code(code: Option<i32>) -> ExitClass {
    match code {
        Some(0) => ExitClass::Success,
        Some(OSCILLATION_EXIT_CODE) => ExitClass::Oscillating,
        other => ExitClass::Failure(other),
    }
}

/// Run the generator once and collect its outcome.
///
/// The result file is removed before this returns, whether or not it was parsed.
#[tracing::instrument(skip_all, fields(description = %description.display(), corrections = %config.corrections))]
pub fn acquire(config: &ReferenceConfig, description: &Path) -> Result<ReferenceOutcome, ReferenceError> {
    let invocation = Invocation::resolve(config, description)?;
    let results = ResultFile::new(invocation.results.clone());

    tracing::info!(
        generator = %invocation.generator.display(),
        results = %results.path().display(),
        "running reference generator"
    );
    let status = invocation
        .command()
        .status()
        .map_err(|source| ReferenceError::Spawn {
            path: invocation.generator.clone(),
            source,
        })?;

    match classify_exit_code(status.code()) {
        ExitClass::Oscillating => {
            tracing::info!("reference generator reports an oscillating system");
            Ok(ReferenceOutcome::Oscillating)
        }
        ExitClass::Failure(code) => Err(ReferenceError::ExitStatus { code }),
        ExitClass::Success => {
            let expected = parse_results(&results.read()?)?;
            tracing::debug!(eigenzones = expected.eigenzones.len(), "parsed reference results");
            Ok(ReferenceOutcome::Normal(expected))
        }
    }
}
