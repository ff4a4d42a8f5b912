// crates/preflight-core/src/core/endpoint.rs
// ============================================================================
// Module: Preflight Endpoint Model
// Description: Named control-system channels probed before a test run.
// Purpose: Capture the immutable endpoint declarations handed to the prober.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An endpoint names one control-system channel (a process variable) that
//! must be reachable before the test suite runs. Endpoints are declared at
//! startup from explicit configuration and never change during a run.
//! Invariants:
//! - `channel` and `label` are non-empty; validation happens at config load.
//! - Declaration order is significant and preserved end to end.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Endpoint
// ============================================================================

/// A named control-system channel checked for liveness before a run.
///
/// # Invariants
/// - `channel` is the raw address understood by the protocol client.
/// - `label` is the fixed human-readable category used in diagnostics,
///   distinct from the raw channel name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Raw channel address, e.g. a process-variable name.
    pub channel: String,
    /// Human-readable category label used in operator diagnostics.
    pub label: String,
    /// Whether an absent value for this endpoint fails the gate.
    pub required: bool,
}

impl Endpoint {
    /// Creates a required endpoint from a channel address and label.
    #[must_use]
    pub fn required(channel: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            label: label.into(),
            required: true,
        }
    }
}
