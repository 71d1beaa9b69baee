//! The `calculate(...)` call that runs LEMNG on the declared system.

use lemng_codeir::Block;
use lemng_codeir::seq::suffix_all_but_last;

use crate::backend::vocab::{self, bool_literal};
use crate::model::{Constituent, Corrections};

/// Emit the call.
///
/// Arguments are the BGE identifier vector, the sample identifier vector, both concentration maps, the three
/// correction flags, and whether the system is expected to oscillate.
pub fn emit_calculate(
    background: &[&Constituent],
    sample: &[&Constituent],
    corrections: Corrections,
    oscillating: bool,
) -> Block {
    let [debye_huckel, onsager_fuoss, viscosity] = corrections.flags();

    let mut arguments = Block::new();
    push_identifier_vector(&mut arguments, background);
    push_identifier_vector(&mut arguments, sample);
    arguments.push_line(format!("{}, {},", vocab::BGE_MAP, vocab::SAMPLE_MAP));
    arguments.push_line(format!(
        "{}, {}, {}, {});",
        bool_literal(debye_huckel),
        bool_literal(onsager_fuoss),
        bool_literal(viscosity),
        bool_literal(oscillating),
    ));

    let mut block = Block::from_lines([format!("const auto {} = calculate(", vocab::RESULT_VAR)]);
    block.push_block(arguments);
    block
}

/// `{`, one identifier per line one level deeper, then `},`.
fn push_identifier_vector(arguments: &mut Block, constituents: &[&Constituent]) {
    let identifiers: Vec<String> = constituents.iter().map(|c| c.identifier().to_string()).collect();

    arguments.push_line("{");
    arguments.push_block(Block::from_lines(suffix_all_but_last(&identifiers, ",")));
    arguments.push_line("},");
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemng_codeir::EmitConfig;

    fn constituent(name: &str) -> Constituent {
        let json = format!(
            r#"{{ "name": "{name}", "type": "N", "role": "A", "chargeLow": 0, "chargeHigh": 0, "pKas": [],
                 "mobilities": [0], "viscosityCoefficient": 0, "concentrationSample": 1 }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_calculate_layout() {
        let acid = constituent("Acetic Acid");
        let base = constituent("tris-base");
        let analyte = constituent("Analyte");

        let block = emit_calculate(&[&acid, &base], &[&acid, &base, &analyte], Corrections::from_bits(3), false);
        let expected = "\tconst auto r = calculate(\n\
                        \t\t{\n\
                        \t\t\tacetic_acid,\n\
                        \t\t\ttris__base\n\
                        \t\t},\n\
                        \t\t{\n\
                        \t\t\tacetic_acid,\n\
                        \t\t\ttris__base,\n\
                        \t\t\tanalyte\n\
                        \t\t},\n\
                        \t\tcBGE, cSample,\n\
                        \t\ttrue, true, false, false);";
        assert_eq!(block.render(1, &EmitConfig::default()), expected);
    }

    #[test]
    fn test_oscillating_flag_is_last() {
        let block = emit_calculate(&[], &[], Corrections::from_bits(4), true);
        let rendered = block.render(1, &EmitConfig::default());
        assert!(rendered.ends_with("\t\tfalse, false, true, true);"), "{rendered}");
    }

    #[test]
    fn test_empty_identifier_vectors_keep_braces() {
        let block = emit_calculate(&[], &[], Corrections::none(), false);
        assert_eq!(
            block.render(1, &EmitConfig::default()),
            "\tconst auto r = calculate(\n\t\t{\n\t\t},\n\t\t{\n\t\t},\n\t\tcBGE, cSample,\n\t\tfalse, false, false, false);"
        );
    }
}
