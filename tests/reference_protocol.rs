//! Process-level tests of reference acquisition
//!
//! The generator is `/bin/sh` and the "description" handed to it is a throw-away script, so `$1` is the result
//! file path and `$2`..`$4` are the correction flags. Nothing written by a test is ever executed directly.
#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use lemng_testgen::model::Corrections;
use lemng_testgen::reference::{LIBRARY_PATH_VAR, ReferenceConfig, ReferenceError, ReferenceOutcome, acquire};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    script: PathBuf,
}

impl Fixture {
    fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("system.json");
        fs::write(&script, body).unwrap();
        Self { dir, script }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self) -> ReferenceConfig {
        ReferenceConfig::new("/bin/sh", self.path("ecl"), self.path("lemng"))
            .with_results_dir(self.dir.path())
            .silent(true)
    }

    fn results_file(&self) -> PathBuf {
        self.path("system_results.txt")
    }

    fn acquire(&self, config: &ReferenceConfig) -> Result<ReferenceOutcome, ReferenceError> {
        acquire(config, &self.script)
    }
}

fn assert_removed(path: &Path) {
    assert!(!path.exists(), "result file {} was left behind", path.display());
}

// ========================================
// Outcome classification
// ========================================

#[test]
fn test_normal_run_is_parsed() {
    let fixture = Fixture::new("printf '1.0\\n2.0\\n3.0\\n4.0\\n\\n0.1\\n0.2\\n0.3\\n4.0\\n5.0\\n\\n' > \"$1\"\nexit 0\n");
    let outcome = fixture.acquire(&fixture.config()).unwrap();

    let expected = outcome.expected().expect("normal outcome");
    assert_eq!(expected.bge.ph.as_str(), "1.0");
    assert_eq!(expected.bge.buffer_capacity.value(), 4.0);
    assert_eq!(expected.eigenzones.len(), 1);
    assert_eq!(expected.eigenzones[0].conductivity.as_str(), "5.0");
    assert_removed(&fixture.results_file());
}

#[test]
fn test_oscillation_exit_code_skips_parsing() {
    // The file content is not a valid result; it must not be read.
    let fixture = Fixture::new("echo garbage > \"$1\"\nexit 102\n");
    let outcome = fixture.acquire(&fixture.config()).unwrap();
    assert_eq!(outcome, ReferenceOutcome::Oscillating);
    assert_removed(&fixture.results_file());
}

#[test]
fn test_failure_exit_code() {
    let fixture = Fixture::new("echo partial > \"$1\"\nexit 3\n");
    let err = fixture.acquire(&fixture.config()).unwrap_err();
    assert!(matches!(err, ReferenceError::ExitStatus { code: Some(3) }), "{err:?}");
    assert_removed(&fixture.results_file());
}

#[test]
fn test_killed_generator() {
    let fixture = Fixture::new("kill -9 $$\n");
    let err = fixture.acquire(&fixture.config()).unwrap_err();
    assert!(matches!(err, ReferenceError::ExitStatus { code: None }), "{err:?}");
}

#[test]
fn test_bad_format_is_reported_and_cleaned_up() {
    let fixture = Fixture::new("printf '1\\n2\\n3\\n4\\n5\\n' > \"$1\"\n");
    let err = fixture.acquire(&fixture.config()).unwrap_err();
    assert!(matches!(err, ReferenceError::BadFormat { line: 5, .. }), "{err:?}");
    assert_removed(&fixture.results_file());
}

#[test]
fn test_success_without_result_file() {
    let fixture = Fixture::new("exit 0\n");
    let err = fixture.acquire(&fixture.config()).unwrap_err();
    assert!(matches!(err, ReferenceError::ReadResults { .. }), "{err:?}");
}

// ========================================
// Invocation
// ========================================

#[test]
fn test_correction_flags_are_passed_in_order() {
    // Echo the three flags back as the BGE record.
    let fixture = Fixture::new("printf '%s\\n%s\\n%s\\n9\\n\\n' \"$2\" \"$3\" \"$4\" > \"$1\"\n");
    let config = fixture.config().with_corrections(Corrections::from_bits(5));
    let outcome = fixture.acquire(&config).unwrap();

    let bge = &outcome.expected().expect("normal outcome").bge;
    assert_eq!(
        [bge.ph.as_str(), bge.conductivity.as_str(), bge.ionic_strength.as_str()],
        ["1", "0", "1"]
    );
}

#[test]
fn test_result_path_is_absolute() {
    let fixture = Fixture::new("case \"$1\" in /*) printf '1\\n1\\n1\\n1\\n\\n' > \"$1\" ;; *) exit 7 ;; esac\n");
    assert!(fixture.acquire(&fixture.config()).is_ok());
}

#[cfg(target_os = "linux")]
#[test]
fn test_library_directories_are_appended_for_the_child_only() {
    let fixture = Fixture::new("");
    let seen = fixture.path("seen.txt");
    let script = format!(
        "printf '%s' \"${var}\" > '{seen}'\nprintf '1\\n1\\n1\\n1\\n\\n' > \"$1\"\n",
        var = LIBRARY_PATH_VAR,
        seen = seen.display()
    );
    fs::write(&fixture.script, script).unwrap();

    let before = std::env::var_os(LIBRARY_PATH_VAR);
    fixture.acquire(&fixture.config()).unwrap();
    assert_eq!(std::env::var_os(LIBRARY_PATH_VAR), before);

    let value = fs::read_to_string(&seen).unwrap();
    let expected_tail = format!(
        "{}:{}",
        fixture.path("ecl").display(),
        fixture.path("lemng").display()
    );
    assert!(value.ends_with(&expected_tail), "{value}");
}
