//! Indentation-aware blocks of generated source text.
//!
//! A [`Block`] is an ordered list of [`Item`]s. Lines render at the block's own level; nested blocks and struct
//! initializers render one level deeper. Items are joined by `\n` and the rendered block never ends with a newline,
//! so the caller decides how blocks are separated.
//!
//! ## Notes
//!
//! - Rendering borrows the tree immutably, so rendering twice produces the same text.
//! - A nested block without items contributes nothing (not even an empty line). This keeps generated lists such as
//!   an empty identifier vector down to their brackets.

use crate::config::EmitConfig;
use crate::seq::map_with_last;

/// One element of a [`Block`].
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Literal text, prefixed with the indentation of its level
    Line(String),
    /// A nested block
    Nested(Block),
    /// An aggregate initialization statement
    Struct(StructInitializer),
}

impl Item {
    /// Render this item with its first line at `level`.
    pub fn render(&self, level: usize, config: &EmitConfig) -> String {
        match self {
            Item::Line(text) => format!("{}{}", config.indent(level), text),
            Item::Nested(block) => block.render(level, config),
            Item::Struct(init) => init.render(level, config),
        }
    }

    fn is_empty_nested(&self) -> bool {
        match self {
            Item::Nested(block) => block.is_blank(),
            Item::Line(_) | Item::Struct(_) => false,
        }
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Item::Line(text.to_string())
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::Line(text)
    }
}

impl From<Block> for Item {
    fn from(block: Block) -> Self {
        Item::Nested(block)
    }
}

impl From<StructInitializer> for Item {
    fn from(init: StructInitializer) -> Self {
        Item::Struct(init)
    }
}

/// An ordered, nestable sequence of lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    items: Vec<Item>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a block from a list of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut block = Self::new();
        block.extend_lines(lines);
        block
    }

    /// Append a line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.items.push(Item::Line(line.into()));
    }

    /// Append several lines, in order.
    pub fn extend_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(lines.into_iter().map(|line| Item::Line(line.into())));
    }

    /// Append a block rendered one level deeper.
    pub fn push_block(&mut self, block: Block) {
        self.items.push(Item::Nested(block));
    }

    /// Append several nested blocks, in order.
    pub fn extend_blocks(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.items.extend(blocks.into_iter().map(Item::Nested));
    }

    /// Append any item.
    pub fn push(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether rendering produces no text at all.
    fn is_blank(&self) -> bool {
        self.items.iter().all(Item::is_empty_nested)
    }

    /// Render the block with its lines at `level`.
    pub fn render(&self, level: usize, config: &EmitConfig) -> String {
        let visible: Vec<&Item> = self.items.iter().filter(|item| !item.is_empty_nested()).collect();

        let render_item = |item: &&Item| match item {
            Item::Line(_) => item.render(level, config),
            Item::Nested(_) | Item::Struct(_) => item.render(level + 1, config),
        };

        map_with_last(&visible, |item| format!("{}\n", render_item(item)), &render_item).concat()
    }
}

/// Aggregate initialization: `<Type> <name>{ item, ..., item };` with one item per line.
#[derive(Debug, Clone, PartialEq)]
pub struct StructInitializer {
    type_name: String,
    instance_name: String,
    items: Vec<String>,
}

impl StructInitializer {
    pub fn new(type_name: impl Into<String>, instance_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            instance_name: instance_name.into(),
            items: Vec::new(),
        }
    }

    /// Append an initializer item (without separator).
    pub fn push_item(&mut self, code: impl Into<String>) {
        self.items.push(code.into());
    }

    /// Builder form of [`StructInitializer::push_item`].
    pub fn with_item(mut self, code: impl Into<String>) -> Self {
        self.push_item(code);
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Render with the declaration line at `level` and the items one level deeper.
    pub fn render(&self, level: usize, config: &EmitConfig) -> String {
        let outer = config.indent(level);
        let inner = config.indent(level + 1);

        let mut out = format!("{outer}{} {}{{\n", self.type_name, self.instance_name);
        for line in map_with_last(&self.items, |code| format!("{inner}{code},\n"), |code| format!("{inner}{code}\n")) {
            out.push_str(&line);
        }
        out.push_str(&outer);
        out.push_str("};");
        out
    }
}
