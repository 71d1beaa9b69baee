//! Whole translation units.

use crate::config::EmitConfig;
use crate::function::Function;

/// A translation unit: include directives, prelude statements, then function definitions.
///
/// Sections render in that fixed order. Each section is followed by two blank lines (includes, prelude) or one
/// blank line per function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    includes: Vec<String>,
    prelude: Vec<String>,
    functions: Vec<Function>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include target, including its delimiters (`<cstdlib>` or `"header.h"`).
    pub fn add_include(&mut self, target: impl Into<String>) {
        self.includes.push(target.into());
    }

    /// Add a statement emitted between the includes and the functions.
    pub fn add_prelude(&mut self, statement: impl Into<String>) {
        self.prelude.push(statement.into());
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn render(&self, config: &EmitConfig) -> String {
        let mut out = String::new();

        for include in &self.includes {
            out.push_str(&format!("#include {include}\n"));
        }
        out.push_str("\n\n");

        for statement in &self.prelude {
            out.push_str(statement);
            out.push('\n');
        }
        out.push_str("\n\n");

        for function in &self.functions {
            out.push_str(&function.render(config));
            out.push_str("\n\n");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;

    #[test]
    fn test_empty_program_keeps_section_breaks() {
        assert_eq!(Program::new().render(&EmitConfig::default()), "\n\n\n\n");
    }

    #[test]
    fn test_section_order() {
        let mut program = Program::new();
        program.add_include("<cstdlib>");
        program.add_include("\"tests.h\"");
        program.add_prelude("using namespace ECHMET;");

        let mut main = Function::new("int", "main", vec![]);
        main.add_block(Block::from_lines(["return EXIT_SUCCESS;"]));
        program.add_function(main);

        let expected = "#include <cstdlib>\n#include \"tests.h\"\n\n\nusing namespace ECHMET;\n\n\nint main()\n{\n\treturn EXIT_SUCCESS;\n}\n\n";
        assert_eq!(program.render(&EmitConfig::default()), expected);
    }

    #[test]
    fn test_functions_keep_insertion_order() {
        let mut program = Program::new();
        program.add_function(Function::new("void", "b", vec![]));
        program.add_function(Function::new("void", "a", vec![]));
        let names: Vec<&str> = program.functions().iter().map(Function::name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
