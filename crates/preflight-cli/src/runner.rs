// crates/preflight-cli/src/runner.rs
// ============================================================================
// Module: Test-Run Invocation
// Description: Report-directory preparation and coverage-runner invocation.
// Purpose: Hand a passing run off to the external test orchestrator.
// Dependencies: crate::config, std::{fs, process}, thiserror
// ============================================================================

//! ## Overview
//! Thin glue around the external coverage-instrumented test runner. The
//! report directory is recreated empty before every run; the runner's
//! exit status becomes the process exit status, unmodified and
//! uninterpreted. The suite directory must exist before any
//! probing-dependent work proceeds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use std::process::ExitCode;
use std::process::ExitStatus;

use thiserror::Error;

use crate::config::RunnerConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Source-path pattern excluding test modules from coverage accounting.
const TEST_MODULE_PATTERN: &str = r"(/tests/|/tests\.rs$|_tests\.rs$)";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Test-run invocation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Runner failures are not represented here; a failing runner status is
///   forwarded as the process exit status, never interpreted.
#[derive(Debug, Error)]
pub enum RunError {
    /// An expected supporting directory is absent.
    #[error("missing prerequisite path: {path}")]
    MissingPrerequisitePath {
        /// The absent path, as configured.
        path: String,
    },
    /// The report directory could not be recreated.
    #[error("report directory setup failed: {0}")]
    ReportDir(String),
    /// The external test runner could not be started.
    #[error("test runner spawn failed: {0}")]
    Spawn(String),
}

// ============================================================================
// SECTION: Directory Preparation
// ============================================================================

/// Checks that the suite directory exists before any probing-dependent work.
///
/// # Errors
///
/// Returns [`RunError::MissingPrerequisitePath`] when the directory is absent.
pub fn ensure_suite_dir(dir: &Path) -> Result<(), RunError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(RunError::MissingPrerequisitePath {
            path: dir.display().to_string(),
        })
    }
}

/// Recreates the report directory empty.
///
/// Idempotent: an already-absent directory is not an error, and repeated
/// calls leave the same empty directory behind.
///
/// # Errors
///
/// Returns [`RunError::ReportDir`] when removal or creation fails.
pub fn prepare_report_dir(dir: &Path) -> Result<(), RunError> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(RunError::ReportDir(err.to_string())),
    }
    std::fs::create_dir_all(dir).map_err(|err| RunError::ReportDir(err.to_string()))
}

// ============================================================================
// SECTION: Runner Invocation
// ============================================================================

/// Builds the argument list for the coverage-instrumented runner.
///
/// Coverage targets the configured production package; test modules are
/// excluded from the target set unless `include_tests` asks for them in
/// the accounting. The HTML report lands in the prepared directory.
#[must_use]
pub fn runner_args(config: &RunnerConfig, report_dir: &Path) -> Vec<String> {
    let mut args = vec![
        "llvm-cov".to_string(),
        "--package".to_string(),
        config.package.clone(),
        "--html".to_string(),
        "--output-dir".to_string(),
        report_dir.display().to_string(),
    ];
    if !config.include_tests {
        args.push("--ignore-filename-regex".to_string());
        args.push(TEST_MODULE_PATTERN.to_string());
    }
    args
}

/// Invokes the external test runner and returns its exit status.
///
/// # Errors
///
/// Returns [`RunError::Spawn`] when the runner process cannot be started.
/// A runner that starts and fails is not an error here; its status is
/// returned for forwarding.
pub fn run_suite(
    config: &RunnerConfig,
    suite_dir: &Path,
    report_dir: &Path,
) -> Result<ExitStatus, RunError> {
    Command::new(&config.program)
        .args(runner_args(config, report_dir))
        .current_dir(suite_dir)
        .status()
        .map_err(|err| RunError::Spawn(format!("{}: {err}", config.program)))
}

/// Maps a runner exit status onto this process's exit code, unmodified.
#[must_use]
pub fn forward_status(status: ExitStatus) -> ExitCode {
    ExitCode::from(exit_code_byte(status))
}

/// Maps a runner exit status onto the raw exit-code byte it forwards.
///
/// A status with no code (terminated by signal) maps to the generic
/// failure code 1.
#[must_use]
pub fn exit_code_byte(status: ExitStatus) -> u8 {
    if status.success() {
        return 0;
    }
    status.code().and_then(|code| u8::try_from(code).ok()).unwrap_or(1)
}
