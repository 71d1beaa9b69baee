//! `SysComp::InConstituent` declarations.

use lemng_codeir::StructInitializer;
use lemng_codeir::seq::initializer_list;

use crate::backend::vocab::{self, string_literal};
use crate::model::{Constituent, ConstituentKind, Real};

use super::complexes::generator_name;

pub fn kind_tag(kind: ConstituentKind) -> &'static str {
    match kind {
        ConstituentKind::Nucleus => vocab::NUCLEUS_TAG,
        ConstituentKind::Ligand => vocab::LIGAND_TAG,
    }
}

/// How the constituent refers to its complexation data.
///
/// A missing `complexForms` key and an empty list have different run-time meaning in the harness, so they map to
/// different expressions.
pub fn complex_reference(constituent: &Constituent) -> String {
    match constituent.complex_forms.as_deref() {
        None => vocab::NO_COMPLEX_DATA.to_string(),
        Some([]) => vocab::NO_COMPLEXES.to_string(),
        Some(_) => format!("{}()", generator_name(&constituent.identifier())),
    }
}

fn real_vec(values: &[Real]) -> String {
    format!("mkRealVec( {} )", initializer_list(values))
}

/// Emit the declaration of one constituent.
pub fn emit_constituent(constituent: &Constituent) -> StructInitializer {
    StructInitializer::new(vocab::CONSTITUENT_TYPE, constituent.identifier().as_str())
        .with_item(kind_tag(constituent.kind))
        .with_item(format!("createFixedString({})", string_literal(&constituent.name)))
        .with_item(constituent.charge_low.to_string())
        .with_item(constituent.charge_high.to_string())
        .with_item(real_vec(&constituent.pkas))
        .with_item(real_vec(&constituent.mobilities))
        .with_item(complex_reference(constituent))
        .with_item(constituent.viscosity_coefficient.to_string())
}
