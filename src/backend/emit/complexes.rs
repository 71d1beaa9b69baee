//! Complexation generator functions.
//!
//! A nucleus with complex forms gets a function that fills a `ComplexDef` literal and hands it to `buildComplexes`:
//!
//! ```text
//! SysComp::InCFVec * gen_complexforms_<identifier>()
//! {
//!     const ComplexDef cDef = {
//!         { /* InComplexForm c-tor begin */      one block per complex form
//!             <nucleus charge>,
//!             /* InLGVec */
//!             {
//!                 { /* InLigandGroup c-tor begin */      one block per ligand group
//!                     /* InLFVec */
//!                     {
//!                         { /* InLigandForm c-tor begin */      one block per ligand form
//!                             ...
//! ```
//!
//! At each of the three levels only the last element's closing line omits the comma.

use lemng_codeir::seq::{initializer_list, map_with_last};
use lemng_codeir::{Block, Function};

use crate::backend::vocab::{self, string_literal};
use crate::model::{ComplexForm, Constituent, Identifier, LigandForm, LigandGroup};

/// Name of the generator function for a constituent identifier.
pub fn generator_name(identifier: &Identifier) -> String {
    format!("{}{}", vocab::COMPLEX_GENERATOR_PREFIX, identifier)
}

/// Emit the generator function, or `None` when the constituent has no complex forms to build.
pub fn emit_complex_generator(constituent: &Constituent) -> Option<Function> {
    let forms = constituent.complex_forms.as_deref().filter(|forms| !forms.is_empty())?;

    let mut definition = Block::from_lines([format!("const ComplexDef {} = {{", vocab::COMPLEX_DEF)]);
    definition.extend_blocks(map_with_last(forms, |f| complex_form(f, ","), |f| complex_form(f, "")));
    definition.push_line("};");

    let mut function = Function::new(
        vocab::COMPLEX_GENERATOR_TYPE,
        generator_name(&constituent.identifier()),
        Vec::new(),
    );
    function.add_block(definition);
    function.add_block(Block::from_lines([format!("return buildComplexes({});", vocab::COMPLEX_DEF)]));
    Some(function)
}

fn complex_form(form: &ComplexForm, separator: &str) -> Block {
    let mut body = Block::from_lines([format!("{},", form.nucleus_charge), "/* InLGVec */".to_string(), "{".to_string()]);
    body.extend_blocks(map_with_last(
        &form.ligand_groups,
        |g| ligand_group(g, ","),
        |g| ligand_group(g, ""),
    ));
    body.push_line("}");

    wrapped("InComplexForm", body, separator)
}

fn ligand_group(group: &LigandGroup, separator: &str) -> Block {
    let mut body = Block::from_lines(["/* InLFVec */", "{"]);
    body.extend_blocks(map_with_last(&group.ligands, |l| ligand_form(l, ","), |l| ligand_form(l, "")));
    body.push_line("}");

    wrapped("InLigandGroup", body, separator)
}

fn ligand_form(ligand: &LigandForm, separator: &str) -> Block {
    let body = Block::from_lines([
        format!("{},", string_literal(&ligand.name)),
        format!("{},", ligand.charge),
        format!("{},", ligand.max_count),
        format!("{},", initializer_list(&ligand.pbs)),
        initializer_list(&ligand.mobilities),
    ]);

    wrapped("InLigandForm", body, separator)
}

/// `{ /* <ctor> c-tor begin */`, the body one level deeper, then the closing line.
fn wrapped(ctor: &str, body: Block, separator: &str) -> Block {
    let mut block = Block::from_lines([format!("{{ /* {ctor} c-tor begin */")]);
    block.push_block(body);
    block.push_line(format!("}}{separator} /* {ctor} c-tor end */"));
    block
}
