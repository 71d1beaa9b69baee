//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::backend::HarnessGenerator;
use crate::model::{Composition, ExperimentDescription, Strictness, validate};
use crate::reference::{ReferenceConfig, parse_results};

use super::{CliError, CliResult, ExitCode, GenerateArgs, cmake};

/// Maximum input file size (16 MB)
///
/// Experiment descriptions and result files are a few kilobytes; anything this large is not one.
const MAX_INPUT_SIZE: u64 = 16 * 1024 * 1024;

/// Read an input file with a size check.
pub fn read_input(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_INPUT_SIZE {
        return Err(CliError::failure(format!(
            "Input file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_INPUT_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

fn load_description(path: &Path) -> CliResult<ExperimentDescription> {
    let text = read_input(path)?;
    ExperimentDescription::from_json(&text).map_err(CliError::diagnostic)
}

/// Generate a test: validate, acquire reference data, write the source, print the CMake lines.
///
/// The output file is only touched once the complete program text exists.
pub fn generate(args: &GenerateArgs) -> CliResult<ExitCode> {
    let description = load_description(&args.input)?;

    let reference = ReferenceConfig::new(&args.generator_path, &args.ecl_path, &args.lemng_path)
        .with_corrections(args.corrections())
        .silent(args.silent);

    let source = HarnessGenerator::new()
        .with_strictness(args.strictness())
        .generate(&description, &args.input, &reference)
        .map_err(CliError::diagnostic)?;

    fs::write(&args.output, source)
        .map_err(|e| CliError::failure(format!("Cannot write output '{}': {}", args.output.display(), e)))?;
    tracing::info!(output = %args.output.display(), "wrote test source");

    if !args.no_cmake {
        print!("{}", cmake::registration(&args.output));
    }

    Ok(ExitCode::SUCCESS)
}

/// Load and validate a description, then list its constituents (debug).
pub fn check_file(path: &Path, strictness: Strictness) -> CliResult<ExitCode> {
    let description = load_description(path)?;
    let tolerated = validate(&description, strictness).map_err(CliError::diagnostic)?;
    let composition = Composition::from_description(&description).map_err(CliError::diagnostic)?;

    for constituent in &description.constituents {
        let role = if constituent.is_background() { "BGE" } else { "sample" };
        println!("{:<8}{} -> {}", role, constituent.name, constituent.identifier());
    }
    println!(
        "{} constituents ({} in BGE), {} issue(s) tolerated",
        composition.sample.len(),
        composition.background.len(),
        tolerated.len()
    );

    Ok(ExitCode::SUCCESS)
}

/// Parse a reference result file and print its records (debug).
pub fn parse_results_file(path: &Path) -> CliResult<ExitCode> {
    let text = read_input(path)?;
    let results = parse_results(&text).map_err(CliError::diagnostic)?;

    let bge = &results.bge;
    println!(
        "BGE: pH {}, conductivity {}, ionic strength {}, buffer capacity {}",
        bge.ph, bge.conductivity, bge.ionic_strength, bge.buffer_capacity
    );
    for (i, zone) in results.eigenzones.iter().enumerate() {
        println!(
            "eigenzone {}: mobility {}, uEMD {}, a2t {}, pH {}, conductivity {}",
            i + 1,
            zone.mobility,
            zone.u_emd,
            zone.a2t,
            zone.ph,
            zone.conductivity
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Path::new("/nonexistent/desc.json")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_load_description_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "constituents": [ { "name": "x", "type": "Q" } ] }"#).unwrap();
        let err = load_description(&path).unwrap_err();
        assert!(err.message.contains("malformed experiment description"), "{}", err.message);
    }

    #[test]
    fn test_parse_results_file_rejects_bad_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.txt");
        fs::write(&path, "1\n2\n3\n4\n5\n").unwrap();
        let err = parse_results_file(&path).unwrap_err();
        assert!(err.message.contains("malformed reference output at line 5"), "{}", err.message);
    }

    #[test]
    fn test_generate_writes_nothing_when_generator_missing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("desc.json");
        fs::write(&input, r#"{ "constituents": [] }"#).unwrap();
        let output = dir.path().join("out.cpp");

        let args = GenerateArgs {
            input,
            output: output.clone(),
            generator_path: dir.path().join("missing-generator"),
            ecl_path: dir.path().to_path_buf(),
            lemng_path: dir.path().to_path_buf(),
            debhue: false,
            onsfuo: false,
            viscos: false,
            silent: true,
            lenient: false,
            no_cmake: true,
        };
        assert!(generate(&args).is_err());
        assert!(!output.exists());
    }
}
