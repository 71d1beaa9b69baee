//! Provide the intermediate representation used to generate LEMNG regression-test sources.
//!
//! The IR is a small tree of value objects ([`Program`] → [`Function`] → [`Block`] / [`StructInitializer`]) with a
//! deterministic, whitespace-exact renderer. The generated text is fed unchanged to a C++ compiler together with the
//! existing test harness headers, so every separator and indentation character is part of the contract.
//!
//! ## Notes
//!
//! - This crate knows nothing about constituents or electrophoresis: **no IO**, no global state, no domain types.
//! - Every "all items but the last get a separator" decision goes through [`seq::map_with_last`].
//!
//! ## Examples
//! ```rust
//! use lemng_codeir::{Block, EmitConfig, Function, Param};
//!
//! let mut f = Function::new("int", "main", vec![Param::new("int", ""), Param::new("char **", "")]);
//! f.add_block(Block::from_lines(["return EXIT_SUCCESS;"]));
//! assert_eq!(
//!     f.render(&EmitConfig::default()),
//!     "int main(int , char ** )\n{\n\treturn EXIT_SUCCESS;\n}"
//! );
//! ```

pub mod block;
pub mod config;
pub mod function;
pub mod program;
pub mod seq;

pub use block::{Block, Item, StructInitializer};
pub use config::EmitConfig;
pub use function::{Function, Param};
pub use program::Program;
