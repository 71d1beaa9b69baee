//! `CMapping` literals.

use lemng_codeir::Block;
use lemng_codeir::seq::suffix_all_but_last;

use crate::backend::vocab::{self, string_literal};
use crate::model::ConcentrationMap;

/// Emit `CMapping <name> = { { "key", value }, ... };` with one entry per line, in insertion order.
pub fn emit_concentration_map(name: &str, map: &ConcentrationMap) -> Block {
    let entries: Vec<String> = map
        .entries()
        .iter()
        .map(|(key, value)| format!("{{ {}, {} }}", string_literal(key), value))
        .collect();

    let mut block = Block::from_lines([format!("{} {} = {{", vocab::MAP_TYPE, name)]);
    block.push_block(Block::from_lines(suffix_all_but_last(&entries, ",")));
    block.push_line("};");
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Real;
    use lemng_codeir::EmitConfig;

    fn map(entries: &[(&str, &str)]) -> ConcentrationMap {
        let mut map = ConcentrationMap::new();
        for (key, value) in entries {
            map.insert(*key, value.parse::<Real>().unwrap());
        }
        map
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let block = emit_concentration_map("cBGE", &map(&[("C", "3"), ("A", "1.5"), ("B", "0.25")]));
        assert_eq!(
            block.render(1, &EmitConfig::default()),
            "\tCMapping cBGE = {\n\t\t{ \"C\", 3 },\n\t\t{ \"A\", 1.5 },\n\t\t{ \"B\", 0.25 }\n\t};"
        );
    }

    #[test]
    fn test_single_entry_has_no_comma() {
        let block = emit_concentration_map("cSample", &map(&[("Analyte", "0.01")]));
        assert_eq!(
            block.render(0, &EmitConfig::default()),
            "CMapping cSample = {\n\t{ \"Analyte\", 0.01 }\n};"
        );
    }

    #[test]
    fn test_empty_map() {
        let block = emit_concentration_map("cBGE", &ConcentrationMap::new());
        assert_eq!(block.render(1, &EmitConfig::default()), "\tCMapping cBGE = {\n\t};");
    }
}
