//! `checkBGE` / `checkEigenzone` assertions.

use lemng_codeir::Block;
use lemng_codeir::seq::separated;

use crate::backend::vocab;
use crate::reference::{BgeProperties, EigenzoneProperties, ExpectedResults};

pub fn emit_check_bge(bge: &BgeProperties) -> Block {
    Block::from_lines([format!("checkBGE({}, {});", vocab::RESULT_VAR, separated(&bge.values(), ", "))])
}

/// `index` is 1-based.
pub fn emit_check_eigenzone(index: usize, zone: &EigenzoneProperties) -> Block {
    Block::from_lines([format!(
        "checkEigenzone({index}, {}.eigenzones, {});",
        vocab::RESULT_VAR,
        separated(&zone.values(), ", ")
    )])
}

/// One block for the BGE followed by one block per eigenzone, numbered from 1.
pub fn emit_checks(expected: &ExpectedResults) -> Vec<Block> {
    std::iter::once(emit_check_bge(&expected.bge))
        .chain(
            expected
                .eigenzones
                .iter()
                .enumerate()
                .map(|(i, zone)| emit_check_eigenzone(i + 1, zone)),
        )
        .collect()
}
