//! Function definitions.

use std::fmt;

use crate::block::Item;
use crate::config::EmitConfig;
use crate::seq::join_with_last;

/// A typed parameter. The name may be empty for unnamed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A function definition whose body is a sequence of blocks separated by blank lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    return_type: String,
    name: String,
    params: Vec<Param>,
    body: Vec<Item>,
}

impl Function {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
            params,
            body: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a body block. Body blocks render one level inside the braces.
    pub fn add_block(&mut self, block: impl Into<Item>) {
        self.body.push(block.into());
    }

    pub fn block_count(&self) -> usize {
        self.body.len()
    }

    /// Render the signature line, the braces and every body block.
    pub fn render(&self, config: &EmitConfig) -> String {
        let params = join_with_last(&self.params, |p| format!("{p}, "), |p| p.to_string());
        let blocks = join_with_last(
            &self.body,
            |block| format!("{}\n\n", block.render(1, config)),
            |block| format!("{}\n", block.render(1, config)),
        );

        format!("{} {}({})\n{{\n{}}}", self.return_type, self.name, params, blocks)
    }
}
