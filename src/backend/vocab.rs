//! Names and fixed statements of the Barsarkagang test harness.
//!
//! The generated sources compile against `barsarkagang_tests.h`; everything here must match that header.

pub const INCLUDES: [&str; 2] = ["<cstdlib>", "\"barsarkagang_tests.h\""];

pub const PRELUDE: [&str; 2] = ["using namespace ECHMET;", "using namespace ECHMET::Barsarkagang;"];

pub const CONSTITUENT_TYPE: &str = "SysComp::InConstituent";
pub const NUCLEUS_TAG: &str = "SysComp::ConstituentType::NUCLEUS";
pub const LIGAND_TAG: &str = "SysComp::ConstituentType::LIGAND";

/// Complex reference for a constituent without a `complexForms` key.
pub const NO_COMPLEX_DATA: &str = "nullptr";
/// Complex reference for a constituent with an empty `complexForms` list.
pub const NO_COMPLEXES: &str = "noComplexes()";

pub const COMPLEX_GENERATOR_TYPE: &str = "SysComp::InCFVec *";
pub const COMPLEX_GENERATOR_PREFIX: &str = "gen_complexforms_";
pub const COMPLEX_DEF: &str = "cDef";

pub const BGE_MAP: &str = "cBGE";
pub const SAMPLE_MAP: &str = "cSample";
pub const MAP_TYPE: &str = "CMapping";

pub const RESULT_VAR: &str = "r";

pub const SUCCESS_STATEMENT: &str = "return EXIT_SUCCESS;";
pub const DISCARD_RESULT_STATEMENT: &str = "(void)r;";

/// Render a C++ string literal.
pub fn string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            literal.push('\\');
        }
        literal.push(ch);
    }
    literal.push('"');
    literal
}

/// Render a C++ boolean literal.
pub fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_plain() {
        assert_eq!(string_literal("Sebacic acid"), "\"Sebacic acid\"");
    }

    #[test]
    fn test_string_literal_escapes_quote_and_backslash() {
        assert_eq!(string_literal(r#"a"b\c"#), r#""a\"b\\c""#);
    }

    #[test]
    fn test_bool_literal() {
        assert_eq!(bool_literal(true), "true");
        assert_eq!(bool_literal(false), "false");
    }
}
