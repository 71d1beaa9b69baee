//! Test program generation
//!
//! This module turns an experiment description plus its reference outcome into the C++ source of a LEMNG
//! regression test.
//!
//! ## Module Organization
//!
//! - `vocab` - names and fixed statements of the Barsarkagang harness
//! - `emit/` - one emitter per harness construct
//!   - `constituent.rs` - `SysComp::InConstituent` declarations
//!   - `complexes.rs` - complex-form generator functions
//!   - `concentrations.rs` - `CMapping` literals
//!   - `calculate.rs` - the `calculate(...)` call
//!   - `assertions.rs` - `checkBGE` / `checkEigenzone`
//! - `harness.rs` - program composition and the [`HarnessGenerator`] entry point

pub mod emit;
pub mod harness;
pub mod vocab;

pub use harness::{GenerationError, HarnessGenerator, build_program};
