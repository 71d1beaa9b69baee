//! Validate experiment descriptions before any code is generated.
//!
//! Structural problems (bad JSON, unknown constituent type, missing keys, a background constituent without a
//! background concentration) are always fatal. Consistency problems that the harness would silently accept are
//! collected as [`ValidationIssue`]s and either rejected or logged depending on [`Strictness`].

use miette::Diagnostic;
use thiserror::Error;

use super::description::{Constituent, ExperimentDescription};
use super::ident::{Identifier, find_collisions};

/// How consistency issues are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Any issue aborts the run
    #[default]
    Strict,
    /// Issues are logged as warnings and generation continues
    Lenient,
}

/// A consistency problem in an otherwise well-formed description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("constituent name '{name}' is used more than once")]
    DuplicateName { name: String },

    #[error("constituents '{first}' and '{second}' both map to identifier '{identifier}'")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("constituent '{name}' maps to '{identifier}', which is not a valid C++ identifier")]
    InvalidIdentifier { name: String, identifier: String },

    #[error("constituent '{name}': chargeLow {low} is greater than chargeHigh {high}")]
    ChargeOrder { name: String, low: i32, high: i32 },

    #[error("constituent '{name}': expected {expected} pKa values for its charge span, found {found}")]
    PkaCount { name: String, expected: usize, found: usize },

    #[error("constituent '{name}': expected {expected} mobilities (one per charge state), found {found}")]
    MobilityCount { name: String, expected: usize, found: usize },

    #[error("constituent '{constituent}', ligand '{ligand}': maxCount must be at least 1")]
    LigandMaxCount { constituent: String, ligand: String },

    #[error(
        "constituent '{constituent}', ligand '{ligand}': maxCount is {max_count} but there are {pbs} pBs and {mobilities} mobilities"
    )]
    LigandVectorLength {
        constituent: String,
        ligand: String,
        max_count: u32,
        pbs: usize,
        mobilities: usize,
    },
}

/// Errors that reject an experiment description.
#[derive(Debug, Error, Diagnostic)]
pub enum ValidationError {
    #[error("malformed experiment description: {0}")]
    #[diagnostic(
        code(lemng_testgen::input::malformed),
        help("constituent `type` must be \"N\" or \"L\" and every numeric key is required")
    )]
    Malformed(#[from] serde_json::Error),

    #[error("constituent '{name}' has role \"B\" but no concentrationBGE")]
    #[diagnostic(code(lemng_testgen::input::missing_bge_concentration))]
    MissingBgeConcentration { name: String },

    #[error("experiment description rejected:{}", render_issues(.issues))]
    #[diagnostic(
        code(lemng_testgen::input::rejected),
        help("use --lenient to report these as warnings instead")
    )]
    Rejected { issues: Vec<ValidationIssue> },
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues.iter().map(|issue| format!("\n  - {issue}")).collect()
}

/// Check a description.
///
/// Returns the issues that were tolerated (always empty under [`Strictness::Strict`]).
#[tracing::instrument(skip_all, fields(constituents = desc.constituents.len(), ?strictness))]
pub fn validate(desc: &ExperimentDescription, strictness: Strictness) -> Result<Vec<ValidationIssue>, ValidationError> {
    if let Some(c) = desc
        .constituents
        .iter()
        .find(|c| c.is_background() && c.concentration_bge.is_none())
    {
        return Err(ValidationError::MissingBgeConcentration { name: c.name.clone() });
    }

    let issues = find_issues(desc);
    if issues.is_empty() {
        return Ok(issues);
    }

    match strictness {
        Strictness::Strict => Err(ValidationError::Rejected { issues }),
        Strictness::Lenient => {
            for issue in &issues {
                tracing::warn!("{issue}");
            }
            Ok(issues)
        }
    }
}

/// Collect every consistency issue, in description order.
pub fn find_issues(desc: &ExperimentDescription) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut seen: Vec<&str> = Vec::new();
    for c in &desc.constituents {
        if seen.contains(&c.name.as_str()) {
            if !issues
                .iter()
                .any(|i| matches!(i, ValidationIssue::DuplicateName { name } if *name == c.name))
            {
                issues.push(ValidationIssue::DuplicateName { name: c.name.clone() });
            }
        } else {
            seen.push(&c.name);
        }
    }

    for collision in find_collisions(desc.constituents.iter().map(|c| c.name.as_str())) {
        issues.push(ValidationIssue::IdentifierCollision {
            identifier: collision.identifier.to_string(),
            first: collision.first,
            second: collision.second,
        });
    }

    for c in &desc.constituents {
        check_constituent(c, &mut issues);
    }

    issues
}

fn check_constituent(c: &Constituent, issues: &mut Vec<ValidationIssue>) {
    let identifier = Identifier::from_name(&c.name);
    if !identifier.is_valid_cpp() {
        issues.push(ValidationIssue::InvalidIdentifier {
            name: c.name.clone(),
            identifier: identifier.to_string(),
        });
    }

    if c.charge_low > c.charge_high {
        issues.push(ValidationIssue::ChargeOrder {
            name: c.name.clone(),
            low: c.charge_low,
            high: c.charge_high,
        });
    } else {
        let span = c.charge_high.abs_diff(c.charge_low) as usize;
        if c.pkas.len() != span {
            issues.push(ValidationIssue::PkaCount {
                name: c.name.clone(),
                expected: span,
                found: c.pkas.len(),
            });
        }
        if c.mobilities.len() != span + 1 {
            issues.push(ValidationIssue::MobilityCount {
                name: c.name.clone(),
                expected: span + 1,
                found: c.mobilities.len(),
            });
        }
    }

    let ligands = c
        .complex_forms
        .iter()
        .flatten()
        .flat_map(|form| &form.ligand_groups)
        .flat_map(|group| &group.ligands);
    for ligand in ligands {
        if ligand.max_count < 1 {
            issues.push(ValidationIssue::LigandMaxCount {
                constituent: c.name.clone(),
                ligand: ligand.name.clone(),
            });
            continue;
        }
        let expected = ligand.max_count as usize;
        if ligand.pbs.len() != expected || ligand.mobilities.len() != expected {
            issues.push(ValidationIssue::LigandVectorLength {
                constituent: c.name.clone(),
                ligand: ligand.name.clone(),
                max_count: ligand.max_count,
                pbs: ligand.pbs.len(),
                mobilities: ligand.mobilities.len(),
            });
        }
    }
}
