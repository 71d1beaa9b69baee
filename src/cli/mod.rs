//! CLI module for the LEMNG test generator
//!
//! This module provides the command-line interface.
//!
//! ## Commands
//!
//! - `generate` - Run the reference generator and write a C++ regression test
//! - `--check <file>` - Load and validate an experiment description (debug)
//! - `--parse-results <file>` - Parse a reference result file and print its records (debug)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `cmake` - Build-registration text printed after a successful write
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod cmake;
pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::model::{Corrections, Strictness};
use crate::version::TESTGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a diagnostic through miette's report handler.
    pub fn diagnostic(err: impl miette::Diagnostic + Send + Sync + 'static) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// LEMNG regression test generator
#[derive(Parser, Debug)]
#[command(name = "lemng-testgen")]
#[command(version = TESTGEN_VERSION)]
#[command(about = "LEMNG regression test generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Debug/development flags
    /// Load and validate an experiment description (debug)
    #[arg(long = "check", value_name = "FILE")]
    pub check_file: Option<PathBuf>,

    /// Parse a reference result file and print its records (debug)
    #[arg(long = "parse-results", value_name = "FILE", conflicts_with = "check_file")]
    pub results_file: Option<PathBuf>,

    /// Report description inconsistencies as warnings (applies to --check)
    #[arg(long, requires = "check_file")]
    pub lenient: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute reference results and write a C++ test
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Input JSON experiment description
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output C++ file
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,

    /// Path to the reference results generator
    #[arg(long = "generator-path", alias = "generator_path", value_name = "FILE")]
    pub generator_path: PathBuf,

    /// Directory with the ECHMETCoreLibs binaries
    #[arg(long = "ecl-path", alias = "ECL_path", value_name = "DIR")]
    pub ecl_path: PathBuf,

    /// Directory with the LEMNG binary
    #[arg(long = "lemng-path", alias = "LEMNG_path", value_name = "DIR")]
    pub lemng_path: PathBuf,

    /// Enable Debye-Hückel correction
    #[arg(long)]
    pub debhue: bool,

    /// Enable Onsager-Fuoss correction
    #[arg(long)]
    pub onsfuo: bool,

    /// Enable viscosity correction
    #[arg(long)]
    pub viscos: bool,

    /// Do not display any output from the reference generator
    #[arg(long)]
    pub silent: bool,

    /// Report description inconsistencies as warnings instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Do not print the CMake registration lines
    #[arg(long = "no-cmake")]
    pub no_cmake: bool,
}

impl GenerateArgs {
    pub fn corrections(&self) -> Corrections {
        Corrections {
            debye_huckel: self.debhue,
            onsager_fuoss: self.onsfuo,
            viscosity: self.viscos,
        }
    }

    pub fn strictness(&self) -> Strictness {
        strictness(self.lenient)
    }
}

fn strictness(lenient: bool) -> Strictness {
    if lenient { Strictness::Lenient } else { Strictness::Strict }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.check_file {
        return commands::check_file(&file, strictness(cli.lenient));
    }
    if let Some(file) = cli.results_file {
        return commands::parse_results_file(&file);
    }

    match cli.command {
        Some(Command::Generate(args)) => commands::generate(&args),
        None => Err(CliError::failure("no command given; see `lemng-testgen --help`")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 11] = [
        "lemng-testgen",
        "generate",
        "--input",
        "desc.json",
        "--output",
        "test.cpp",
        "--generator-path",
        "./gen",
        "--ecl-path",
        "ecl",
        "--lemng-path",
    ];

    fn parse_generate(extra: &[&str]) -> GenerateArgs {
        let args: Vec<&str> = REQUIRED.iter().copied().chain(["lemng"]).chain(extra.iter().copied()).collect();
        match Cli::try_parse_from(args).unwrap().command {
            Some(Command::Generate(args)) => args,
            other => panic!("Expected Generate command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_generate() {
        let args = parse_generate(&[]);
        assert_eq!(args.input, PathBuf::from("desc.json"));
        assert_eq!(args.lemng_path, PathBuf::from("lemng"));
        assert_eq!(args.corrections(), Corrections::none());
        assert_eq!(args.strictness(), Strictness::Strict);
        assert!(!args.silent);
        assert!(!args.no_cmake);
    }

    #[test]
    fn test_cli_parse_corrections() {
        let args = parse_generate(&["--debhue", "--viscos"]);
        assert_eq!(args.corrections().bits(), 5);
        let args = parse_generate(&["--onsfuo"]);
        assert_eq!(args.corrections().bits(), 2);
    }

    #[test]
    fn test_cli_parse_flags() {
        let args = parse_generate(&["--silent", "--lenient", "--no-cmake"]);
        assert!(args.silent);
        assert!(args.no_cmake);
        assert_eq!(args.strictness(), Strictness::Lenient);
    }

    #[test]
    fn test_cli_accepts_underscore_aliases() {
        let cli = Cli::try_parse_from([
            "lemng-testgen",
            "generate",
            "--input",
            "d.json",
            "--output",
            "t.cpp",
            "--generator_path",
            "g",
            "--ECL_path",
            "e",
            "--LEMNG_path",
            "l",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Command::Generate(_))));
    }

    #[test]
    fn test_cli_generate_requires_paths() {
        assert!(Cli::try_parse_from(["lemng-testgen", "generate", "--input", "d.json"]).is_err());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["lemng-testgen", "--check", "d.json", "--lenient"]).unwrap();
        assert_eq!(cli.check_file, Some(PathBuf::from("d.json")));
        assert!(cli.lenient);

        let cli = Cli::try_parse_from(["lemng-testgen", "--parse-results", "r.txt"]).unwrap();
        assert_eq!(cli.results_file, Some(PathBuf::from("r.txt")));
    }

    #[test]
    fn test_cli_debug_flags_conflict() {
        assert!(Cli::try_parse_from(["lemng-testgen", "--check", "a", "--parse-results", "b"]).is_err());
    }
}
