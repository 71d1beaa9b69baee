//! Domain emitters: experiment entities → code IR nodes.
//!
//! Every emitter is a pure function. Identifiers are derived from display names through
//! [`Identifier`](crate::model::Identifier), so a constituent is referred to by the same name in its declaration,
//! its complex generator and the `calculate` call.

pub mod assertions;
pub mod calculate;
pub mod complexes;
pub mod concentrations;
pub mod constituent;

pub use assertions::{emit_check_bge, emit_check_eigenzone, emit_checks};
pub use calculate::emit_calculate;
pub use complexes::{emit_complex_generator, generator_name};
pub use concentrations::emit_concentration_map;
pub use constituent::{complex_reference, emit_constituent};
