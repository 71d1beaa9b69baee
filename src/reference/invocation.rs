//! Command line and environment of one reference generator run.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::{ReferenceConfig, ReferenceError};

/// Variable the dynamic loader consults for extra library directories.
#[cfg(target_os = "macos")]
pub const LIBRARY_PATH_VAR: &str = "DYLD_LIBRARY_PATH";
#[cfg(windows)]
pub const LIBRARY_PATH_VAR: &str = "PATH";
#[cfg(not(any(target_os = "macos", windows)))]
pub const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";

/// Suffix appended to the description's file stem to name the result file.
pub const RESULTS_SUFFIX: &str = "_results.txt";

/// Fully resolved generator invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub generator: PathBuf,
    pub description: PathBuf,
    pub results: PathBuf,
    pub library_path: OsString,
    pub args: Vec<OsString>,
    pub silent: bool,
}

impl Invocation {
    /// Resolve every path in `config` and the description to absolute form.
    pub fn resolve(config: &ReferenceConfig, description: &Path) -> Result<Self, ReferenceError> {
        let generator = absolute(&config.generator)?;
        let description = absolute(description)?;
        let results_dir = match &config.results_dir {
            Some(dir) => absolute(dir)?,
            None => std::env::current_dir().map_err(|source| ReferenceError::ResolvePath {
                path: PathBuf::from("."),
                source,
            })?,
        };
        let results = results_dir.join(results_file_name(&description));

        let library_dirs = [absolute(&config.ecl_dir)?, absolute(&config.lemng_dir)?];
        let library_path = augmented_library_path(std::env::var_os(LIBRARY_PATH_VAR), &library_dirs)?;

        let mut args: Vec<OsString> = vec![description.clone().into_os_string(), results.clone().into_os_string()];
        args.extend(
            config
                .corrections
                .flags()
                .into_iter()
                .map(|on| OsString::from(if on { "1" } else { "0" })),
        );

        Ok(Self {
            generator,
            description,
            results,
            library_path,
            args,
            silent: config.silent,
        })
    }

    /// The child process command; the library path is set on the child only.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.generator);
        command.args(&self.args).env(LIBRARY_PATH_VAR, &self.library_path);
        if self.silent {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }
        command
    }
}

fn absolute(path: &Path) -> Result<PathBuf, ReferenceError> {
    std::path::absolute(path).map_err(|source| ReferenceError::ResolvePath {
        path: path.to_path_buf(),
        source,
    })
}

/// `<stem>_results.txt` for a description path.
pub fn results_file_name(description: &Path) -> OsString {
    let mut name = description.file_stem().map(OsString::from).unwrap_or_default();
    name.push(RESULTS_SUFFIX);
    name
}

/// Existing search path followed by `extra`, with empty entries dropped.
pub fn augmented_library_path(existing: Option<OsString>, extra: &[PathBuf]) -> Result<OsString, ReferenceError> {
    let mut dirs: Vec<PathBuf> = existing
        .as_deref()
        .map(|value| std::env::split_paths(value).collect())
        .unwrap_or_default();
    dirs.extend(extra.iter().cloned());
    dirs.retain(|dir| !dir.as_os_str().is_empty());
    Ok(std::env::join_paths(dirs)?)
}

/// Removes the result file when dropped, whatever happened to it in between.
#[derive(Debug)]
pub struct ResultFile {
    path: PathBuf,
}

impl ResultFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<String, ReferenceError> {
        fs::read_to_string(&self.path).map_err(|source| ReferenceError::ReadResults {
            path: self.path.clone(),
            source,
        })
    }
}

impl Drop for ResultFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "removed reference results"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "cannot remove reference results"),
        }
    }
}
