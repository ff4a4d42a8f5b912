// crates/preflight-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for the entry point's clock, client wiring, and JSON record.
// Purpose: Ensure the binary's glue pieces behave before end-to-end use.
// Dependencies: preflight-cli main helpers
// ============================================================================

//! ## Overview
//! Validates the wall clock, configured-client construction, and the JSON
//! record shape emitted under `--json`.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use preflight_cli::config::ClientConfig;
use preflight_core::Clock;
use preflight_core::Endpoint;
use preflight_core::GateDecision;
use preflight_core::ProbeReport;
use preflight_core::ProbeResult;
use preflight_core::Timestamp;

use super::PreflightRecord;
use super::SystemClock;
use super::build_client;

// ============================================================================
// SECTION: Clock
// ============================================================================

#[test]
fn system_clock_reports_unix_millis() {
    let clock = SystemClock;
    let now = clock.now();
    assert!(now.as_unix_millis() > 0);
}

// ============================================================================
// SECTION: Client Wiring
// ============================================================================

#[test]
fn fixed_client_config_builds_a_serving_client() {
    let mut values = BTreeMap::new();
    values.insert("XF:TEST{Ch:0}".to_string(), "1.0".to_string());
    let client = build_client(&ClientConfig::Fixed {
        values,
    });
    let value = client.query("XF:TEST{Ch:0}").unwrap();
    assert_eq!(value.as_deref(), Some("1.0"));
}

// ============================================================================
// SECTION: JSON Record
// ============================================================================

#[test]
fn preflight_record_serializes_report_and_decision() {
    let report = ProbeReport {
        results: vec![ProbeResult {
            endpoint: Endpoint::required("XF:TEST{Ch:0}", "Motor IOC"),
            value: None,
            observed_at: Timestamp::from_unix_millis(0),
        }],
    };
    let decision = GateDecision::evaluate(&report);
    let record = PreflightRecord {
        report: &report,
        decision: &decision,
    };

    let rendered = serde_json::to_value(&record).unwrap();
    assert_eq!(rendered["decision"]["passed"], serde_json::json!(false));
    assert!(rendered["report"]["results"][0]["value"].is_null());
    assert_eq!(rendered["report"]["results"][0]["endpoint"]["label"], "Motor IOC");
}
