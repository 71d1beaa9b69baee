//! Experiment model
//!
//! Decoded experiment descriptions and the derived data the emitters consume.
//!
//! ## Modules
//!
//! - `description` - serde types mirroring the input JSON
//! - `real` - numbers that keep their source spelling
//! - `ident` - constituent name → C++ identifier normalization
//! - `concentrations` - insertion-ordered concentration maps
//! - `corrections` - non-ideality correction selector
//! - `composition` - BGE / sample split of a description
//! - `validate` - structural and consistency checks

pub mod composition;
pub mod concentrations;
pub mod corrections;
pub mod description;
pub mod ident;
pub mod real;
pub mod validate;

pub use composition::Composition;
pub use concentrations::ConcentrationMap;
pub use corrections::Corrections;
pub use description::{ComplexForm, Constituent, ConstituentKind, ExperimentDescription, LigandForm, LigandGroup, Role};
pub use ident::Identifier;
pub use real::Real;
pub use validate::{Strictness, ValidationError, ValidationIssue, validate};
