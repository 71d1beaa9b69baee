//! Rendering configuration for the code IR.
//!
//! The harness headers are indented with tabs, so that is the default.

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Text prepended once per indentation level
    pub indent_unit: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_unit: "\t".to_string(),
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Indentation prefix for the given nesting level.
    pub fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}
