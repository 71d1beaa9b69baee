//! Errors raised while obtaining reference results.
//!
//! The generator runs at most once per invocation; none of these errors is retried.

use std::env::JoinPathsError;
use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReferenceError {
    #[error("cannot resolve path '{}': {source}", .path.display())]
    #[diagnostic(code(lemng_testgen::reference::path))]
    ResolvePath { path: PathBuf, source: io::Error },

    #[error("cannot build the library search path: {0}")]
    #[diagnostic(
        code(lemng_testgen::reference::library_path),
        help("library directories must not contain the platform path separator")
    )]
    LibraryPath(#[from] JoinPathsError),

    #[error("cannot start reference generator '{}': {source}", .path.display())]
    #[diagnostic(code(lemng_testgen::reference::spawn))]
    Spawn { path: PathBuf, source: io::Error },

    #[error("reference generator failed: {}", describe_exit(.code))]
    #[diagnostic(
        code(lemng_testgen::reference::exit_status),
        help("run without --silent to see the generator's own diagnostics")
    )]
    ExitStatus { code: Option<i32> },

    #[error("cannot read reference results '{}': {source}", .path.display())]
    #[diagnostic(code(lemng_testgen::reference::read))]
    ReadResults { path: PathBuf, source: io::Error },

    #[error("malformed reference output at line {line}: {reason}")]
    #[diagnostic(code(lemng_testgen::reference::bad_format))]
    BadFormat { line: usize, reason: String },
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by a signal".to_string(),
    }
}

impl ReferenceError {
    /// Whether this is a violation of the result-file grammar.
    pub fn is_bad_format(&self) -> bool {
        matches!(self, ReferenceError::BadFormat { .. })
    }
}
