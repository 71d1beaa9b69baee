//! Golden snapshot tests for generated harness programs
//!
//! These tests render complete test programs from the JSON descriptions in `tests/fixtures/` and compare them
//! against stored snapshots, so any change to the generated C++ is reviewed and intentional.
//!
//! Run with: `cargo test --test harness_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use lemng_testgen::model::Corrections;
use lemng_testgen::reference::ReferenceOutcome;
use lemng_testgen::{ExperimentDescription, HarnessGenerator, parse_results};

/// Load a file from the fixtures directory
fn load_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

fn description(name: &str) -> ExperimentDescription {
    ExperimentDescription::from_json(&load_fixture(&format!("{name}.json"))).expect("fixture description is valid")
}

fn normal_outcome(name: &str) -> ReferenceOutcome {
    let results = parse_results(&load_fixture(&format!("{name}_results.txt"))).expect("fixture results are valid");
    ReferenceOutcome::Normal(results)
}

#[test]
fn test_normal_outcome_snapshot() {
    let source = HarnessGenerator::new()
        .render(
            &description("lithium_cyclodextrin"),
            &normal_outcome("lithium_cyclodextrin"),
            Corrections::from_bits(3),
        )
        .unwrap();
    insta::assert_snapshot!("lithium_cyclodextrin_normal", source);
}

#[test]
fn test_oscillating_outcome_snapshot() {
    let source = HarnessGenerator::new()
        .render(
            &description("lithium_cyclodextrin"),
            &ReferenceOutcome::Oscillating,
            Corrections::from_bits(4),
        )
        .unwrap();
    insta::assert_snapshot!("lithium_cyclodextrin_oscillating", source);
}

/// Snapshots ignore trailing newlines; the compiler-facing text must still match byte for byte.
#[test]
fn test_normal_outcome_exact_bytes() {
    let source = HarnessGenerator::new()
        .render(
            &description("lithium_cyclodextrin"),
            &normal_outcome("lithium_cyclodextrin"),
            Corrections::from_bits(3),
        )
        .unwrap();
    assert_eq!(source, load_fixture("lithium_cyclodextrin_expected.cpp"));
}

#[test]
fn test_rendering_is_deterministic() {
    let desc = description("lithium_cyclodextrin");
    let outcome = normal_outcome("lithium_cyclodextrin");
    let generator = HarnessGenerator::new();
    let first = generator.render(&desc, &outcome, Corrections::none()).unwrap();
    let second = generator.render(&desc, &outcome, Corrections::none()).unwrap();
    assert_eq!(first, second);
}
