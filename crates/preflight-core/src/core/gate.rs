// crates/preflight-core/src/core/gate.rs
// ============================================================================
// Module: Preflight Precondition Gate
// Description: Pass/fail decision over a run's probe results.
// Purpose: Halt the test run when a required endpoint is unreachable.
// Dependencies: crate::core::{endpoint, probe}, serde, thiserror
// ============================================================================

//! ## Overview
//! The gate inspects the full probe report and decides whether the test
//! suite may run. Required endpoints are evaluated independently, in
//! declaration order. On failure the gate renders one diagnostic: a
//! primary line naming the first failing endpoint's label, followed by
//! the full per-endpoint listing for operator debugging.
//! Invariants:
//! - `passed` iff every required endpoint yielded a non-empty value.
//! - `failures` preserves endpoint declaration order.
//! - When several endpoints fail, only the first is named in the primary
//!   line; the listing still covers every probed endpoint.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::endpoint::Endpoint;
use crate::core::probe::ProbeReport;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Gate failure raised when a required endpoint is unreachable.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - The rendered message is the complete operator diagnostic.
#[derive(Debug, Error)]
pub enum GateError {
    /// A required endpoint's probe returned no usable value.
    #[error("{diagnostic}")]
    EndpointUnreachable {
        /// Label of the first failing endpoint, in declaration order.
        label: String,
        /// Full diagnostic text: primary line plus endpoint listing.
        diagnostic: String,
    },
}

// ============================================================================
// SECTION: Gate Decision
// ============================================================================

/// Pass/fail decision derived from a probe report.
///
/// # Invariants
/// - Computed once per run; immutable afterwards.
/// - There is no partial-credit state; endpoints pass or fail independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    /// True when every required endpoint yielded a non-empty value.
    pub passed: bool,
    /// Required endpoints with no usable value, in declaration order.
    pub failures: Vec<Endpoint>,
}

impl GateDecision {
    /// Evaluates the gate over a full probe report.
    #[must_use]
    pub fn evaluate(report: &ProbeReport) -> Self {
        let failures: Vec<Endpoint> = report
            .results
            .iter()
            .filter(|result| result.endpoint.required && !result.has_value())
            .map(|result| result.endpoint.clone())
            .collect();
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }

    /// Converts the decision into a result, rendering the diagnostic on failure.
    ///
    /// A passing gate produces no output at all; control passes through
    /// silently.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::EndpointUnreachable`] naming the first failing
    /// endpoint and carrying the full listing when the gate did not pass.
    pub fn into_result(self, report: &ProbeReport) -> Result<(), GateError> {
        match self.failures.first() {
            None => Ok(()),
            Some(first) => Err(GateError::EndpointUnreachable {
                label: first.label.clone(),
                diagnostic: format!(
                    "{} does not appear to be running\n{}",
                    first.label,
                    report.listing()
                ),
            }),
        }
    }
}
