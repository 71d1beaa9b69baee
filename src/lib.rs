#![forbid(unsafe_code)]
//! LEMNG regression test generator
//!
//! Turns a JSON description of an electrophoretic separation system into a C++ regression test for LEMNG. The
//! expected values the test asserts against come from an independent reference generator that is run once per
//! description.
//!
//! ## Layout
//!
//! - `model` - experiment descriptions, identifiers, validation
//! - `reference` - running the reference generator and parsing its results
//! - `backend` - emitting the test program through [`lemng_codeir`]
//! - `cli` - command-line front end
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod model;
pub mod reference;
pub mod version;

pub use backend::{GenerationError, HarnessGenerator, build_program};
pub use model::{Corrections, ExperimentDescription, Strictness, ValidationError};
pub use reference::{ReferenceConfig, ReferenceError, ReferenceOutcome, acquire, parse_results};
