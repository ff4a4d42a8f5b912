// crates/preflight-core/tests/proptest_gate.rs
// ============================================================================
// Module: Gate Property-Based Tests
// Description: Property tests for the gate invariant over arbitrary reports.
// Purpose: Detect invariant violations across wide probe-value ranges.
// ============================================================================

//! Property-based tests for the gate pass/fail invariant and failure ordering.

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
use preflight_core::ProbeReport;
use preflight_core::ProbeResult;
use preflight_core::Timestamp;
use proptest::prelude::*;

// ============================================================================
// SECTION: Strategies
// ============================================================================

/// Optional probe value: absent, empty, or arbitrary short text.
fn value_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), "[ -~]{1,16}".prop_map(Some)]
}

/// A report of one to eight required endpoints with arbitrary values.
fn report_strategy() -> impl Strategy<Value = ProbeReport> {
    prop::collection::vec(value_strategy(), 1 .. 8).prop_map(|values| {
        let results = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| ProbeResult {
                endpoint: Endpoint::required(format!("XF:TEST{{Ch:{index}}}"), format!("IOC {index}")),
                value,
                observed_at: Timestamp::from_unix_millis(i64::try_from(index).unwrap_or_default()),
            })
            .collect();
        ProbeReport {
            results,
        }
    })
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    #[test]
    fn gate_passes_iff_every_required_value_is_non_empty(report in report_strategy()) {
        let decision = GateDecision::evaluate(&report);
        let all_present = report
            .results
            .iter()
            .all(|result| result.value.as_deref().is_some_and(|value| !value.is_empty()));
        prop_assert_eq!(decision.passed, all_present);
        prop_assert_eq!(decision.passed, decision.failures.is_empty());
    }

    #[test]
    fn failures_are_exactly_the_failing_endpoints_in_order(report in report_strategy()) {
        let decision = GateDecision::evaluate(&report);
        let expected: Vec<Endpoint> = report
            .results
            .iter()
            .filter(|result| !result.has_value())
            .map(|result| result.endpoint.clone())
            .collect();
        prop_assert_eq!(decision.failures, expected);
    }

    #[test]
    fn failure_diagnostic_lists_every_probed_channel(report in report_strategy()) {
        let decision = GateDecision::evaluate(&report);
        if let Err(err) = decision.into_result(&report) {
            let message = err.to_string();
            for result in &report.results {
                prop_assert!(message.contains(&result.endpoint.channel));
            }
        }
    }
}
