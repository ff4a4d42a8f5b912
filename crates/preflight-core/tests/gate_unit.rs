// crates/preflight-core/tests/gate_unit.rs
// ============================================================================
// Module: Precondition Gate Unit Tests
// Description: Pass/fail decisions and diagnostic rendering over probe reports.
// Purpose: Ensure gate decisions and first-failure diagnostics stay stable.
// ============================================================================

//! Gate decision tests covering the reachable, unreachable, and mixed cases.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use preflight_core::Endpoint;
use preflight_core::GateDecision;
use preflight_core::GateError;
use preflight_core::ProbeReport;
use preflight_core::ProbeResult;
use preflight_core::Timestamp;

// ============================================================================
// SECTION: Test Fixtures
// ============================================================================

const MOTOR_CHANNEL: &str = "XF:31IDA-OP{Tbl-Ax:X1}Mtr.RBV";
const DETECTOR_CHANNEL: &str = "XF:31IDA-BI{Cam:Tbl}cam1:ArraySizeX_RBV";

fn motor() -> Endpoint {
    Endpoint::required(MOTOR_CHANNEL, "Motor IOC")
}

fn detector() -> Endpoint {
    Endpoint::required(DETECTOR_CHANNEL, "areaDetector example IOC")
}

fn result(endpoint: Endpoint, value: Option<&str>) -> ProbeResult {
    ProbeResult {
        endpoint,
        value: value.map(str::to_string),
        observed_at: Timestamp::from_unix_millis(0),
    }
}

fn report(motor_value: Option<&str>, detector_value: Option<&str>) -> ProbeReport {
    ProbeReport {
        results: vec![result(motor(), motor_value), result(detector(), detector_value)],
    }
}

// ============================================================================
// SECTION: Passing Gate
// ============================================================================

#[test]
fn gate_passes_when_both_endpoints_respond() {
    let report = report(Some("1.0"), Some("512"));
    let decision = GateDecision::evaluate(&report);
    assert!(decision.passed);
    assert!(decision.failures.is_empty());
    assert!(decision.into_result(&report).is_ok());
}

#[test]
fn gate_ignores_non_required_endpoints() {
    let mut optional = Endpoint::required("XF:31IDA-OP{Tbl-Ax:X1}Mtr.VELO", "Motor IOC");
    optional.required = false;
    let report = ProbeReport {
        results: vec![result(motor(), Some("1.0")), result(optional, None)],
    };
    let decision = GateDecision::evaluate(&report);
    assert!(decision.passed);
}

// ============================================================================
// SECTION: Failing Gate
// ============================================================================

#[test]
fn empty_motor_value_fails_gate_and_names_motor() {
    let report = report(Some(""), Some("512"));
    let decision = GateDecision::evaluate(&report);
    assert!(!decision.passed);
    assert_eq!(decision.failures, vec![motor()]);

    let err = decision.into_result(&report).unwrap_err();
    let GateError::EndpointUnreachable {
        label,
        diagnostic,
    } = err;
    assert_eq!(label, "Motor IOC");
    assert!(diagnostic.starts_with("Motor IOC does not appear to be running"));
    assert!(diagnostic.contains(&format!("{MOTOR_CHANNEL} = ''")));
    assert!(diagnostic.contains(&format!("{DETECTOR_CHANNEL} = '512'")));
}

#[test]
fn absent_value_fails_gate_like_empty_value() {
    let report = report(None, Some("512"));
    let decision = GateDecision::evaluate(&report);
    assert!(!decision.passed);
    assert_eq!(decision.failures, vec![motor()]);
}

#[test]
fn detector_failure_names_detector() {
    let report = report(Some("1.0"), None);
    let err = GateDecision::evaluate(&report).into_result(&report).unwrap_err();
    let GateError::EndpointUnreachable {
        label, ..
    } = err;
    assert_eq!(label, "areaDetector example IOC");
}

#[test]
fn double_failure_names_first_endpoint_but_lists_both() {
    let report = report(Some(""), Some(""));
    let decision = GateDecision::evaluate(&report);
    assert_eq!(decision.failures, vec![motor(), detector()]);

    let err = decision.into_result(&report).unwrap_err();
    let GateError::EndpointUnreachable {
        label,
        diagnostic,
    } = err;
    assert_eq!(label, "Motor IOC");
    assert!(!diagnostic.contains("areaDetector example IOC does not appear"));
    assert!(diagnostic.contains(&format!("{MOTOR_CHANNEL} = ''")));
    assert!(diagnostic.contains(&format!("{DETECTOR_CHANNEL} = ''")));
}

#[test]
fn failures_preserve_declaration_order_when_detector_is_first() {
    let report = ProbeReport {
        results: vec![result(detector(), None), result(motor(), None)],
    };
    let decision = GateDecision::evaluate(&report);
    assert_eq!(decision.failures, vec![detector(), motor()]);

    let err = decision.into_result(&report).unwrap_err();
    let GateError::EndpointUnreachable {
        label, ..
    } = err;
    assert_eq!(label, "areaDetector example IOC");
}

// ============================================================================
// SECTION: Listing Rendering
// ============================================================================

#[test]
fn listing_shows_absent_values_as_empty_marker() {
    let report = report(None, Some("512"));
    let listing = report.listing();
    assert!(listing.starts_with("Probed channels:"));
    assert!(listing.contains(&format!("  {MOTOR_CHANNEL} = ''")));
    assert!(listing.contains(&format!("  {DETECTOR_CHANNEL} = '512'")));
}
