// crates/preflight-cli/src/main.rs
// ============================================================================
// Module: Preflight CLI Entry Point
// Description: Precondition-gated invocation of the hardware test suite.
// Purpose: Probe the control-system IOCs and run the coverage suite on pass.
// Dependencies: clap, preflight-channel, preflight-cli, preflight-core, serde_json
// ============================================================================

//! ## Overview
//! The `preflight` binary runs the full sequence: load configuration,
//! check the suite-directory prerequisite, probe every declared endpoint
//! once, evaluate the gate, and on pass hand off to the external
//! coverage-instrumented test runner with a freshly prepared report
//! directory. A failing gate prints one diagnostic to stderr and exits
//! with status 1; a failing runner's status is forwarded unmodified.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::Parser;
use preflight_channel::CagetClient;
use preflight_channel::FixedClient;
use preflight_cli::config::ClientConfig;
use preflight_cli::config::ConfigError;
use preflight_cli::config::PreflightConfig;
use preflight_cli::runner;
use preflight_cli::runner::RunError;
use preflight_core::ChannelClient;
use preflight_core::Clock;
use preflight_core::GateDecision;
use preflight_core::GateError;
use preflight_core::ProbeReport;
use preflight_core::Prober;
use preflight_core::Timestamp;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Precondition-gated test-run orchestrator for the hardware-control suite.
#[derive(Debug, Parser)]
#[command(name = "preflight", version)]
struct Cli {
    /// Path to a TOML config file; defaults reproduce the standard setup.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Emit the probe report and gate decision as JSON on stdout.
    #[arg(long)]
    json: bool,
    /// Probe and gate only; skip the test-suite invocation.
    #[arg(long)]
    skip_tests: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Top-level CLI errors, each mapping to exit status 1.
///
/// # Invariants
/// - A failing runner status is not an error; it is forwarded directly.
#[derive(Debug, Error)]
enum CliError {
    /// Configuration could not be loaded or validated.
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// A required endpoint was unreachable.
    #[error("{0}")]
    Gate(#[from] GateError),
    /// Prerequisite, report-directory, or runner-spawn failure.
    #[error("{0}")]
    Run(#[from] RunError),
    /// Writing to an output stream failed.
    #[error("write to {stream} failed: {error}")]
    Output {
        /// Stream that failed.
        stream: &'static str,
        /// Underlying I/O error text.
        error: String,
    },
}

// ============================================================================
// SECTION: Clock
// ============================================================================

/// Wall-clock timestamp source for probe records.
struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|elapsed| i64::try_from(elapsed.as_millis()).ok())
            .unwrap_or_default();
        Timestamp::from_unix_millis(millis)
    }
}

// ============================================================================
// SECTION: JSON Record
// ============================================================================

/// Machine-readable record of one preflight run.
#[derive(Debug, Serialize)]
struct PreflightRecord<'a> {
    /// Full probe report, one entry per declared endpoint.
    report: &'a ProbeReport,
    /// Gate decision derived from the report.
    decision: &'a GateDecision,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the preflight sequence end to end.
fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    let config = PreflightConfig::load(cli.config.as_deref())?;
    runner::ensure_suite_dir(&config.suite_dir)?;

    let client = build_client(&config.client);
    let clock = SystemClock;
    let prober = Prober::new(client.as_ref(), &clock);
    let report = prober.probe_all(&config.endpoints());
    let decision = GateDecision::evaluate(&report);

    if cli.json {
        let record = PreflightRecord {
            report: &report,
            decision: &decision,
        };
        let rendered = serde_json::to_string_pretty(&record)
            .map_err(|err| output_error("stdout", &err.to_string()))?;
        write_stdout_line(&rendered).map_err(|err| output_error("stdout", &err.to_string()))?;
    }

    decision.into_result(&report)?;

    if cli.skip_tests {
        return Ok(ExitCode::SUCCESS);
    }
    runner::prepare_report_dir(&config.report_dir)?;
    let status = runner::run_suite(&config.runner, &config.suite_dir, &config.report_dir)?;
    Ok(runner::forward_status(status))
}

/// Builds the configured channel client.
fn build_client(config: &ClientConfig) -> Box<dyn ChannelClient> {
    match config {
        ClientConfig::Caget(caget) => Box::new(CagetClient::new(caget.clone())),
        ClientConfig::Fixed {
            values,
        } => Box::new(FixedClient::new(values.clone())),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes one line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes one line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Builds a CLI output error for a failed stream write.
fn output_error(stream: &'static str, error: &str) -> CliError {
    CliError::Output {
        stream,
        error: error.to_string(),
    }
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
