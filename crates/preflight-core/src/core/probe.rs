// crates/preflight-core/src/core/probe.rs
// ============================================================================
// Module: Preflight Liveness Prober
// Description: Sequential one-shot endpoint probes and their results.
// Purpose: Capture the observed value of every declared endpoint exactly once.
// Dependencies: crate::core::{endpoint, time}, crate::interfaces, serde
// ============================================================================

//! ## Overview
//! The prober queries each declared endpoint once, in declaration order,
//! through a [`ChannelClient`]. Every unreachability mode (client error,
//! timeout inside the client, channel not found) collapses into one
//! signal: an absent value. Downstream logic depends only on presence or
//! absence, never on the failure cause.
//! Invariants:
//! - Exactly one [`ProbeResult`] per endpoint, in declaration order.
//! - The prober never errors and never aborts the run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::endpoint::Endpoint;
use crate::core::time::Timestamp;
use crate::interfaces::ChannelClient;
use crate::interfaces::Clock;

// ============================================================================
// SECTION: Probe Results
// ============================================================================

/// Outcome of querying one endpoint.
///
/// # Invariants
/// - Created once per run by the prober; never mutated afterwards.
/// - `value` is `None` for every unreachability mode; the cause is not
///   recorded because downstream behavior does not depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// The endpoint that was probed.
    pub endpoint: Endpoint,
    /// Observed value, if the query returned one.
    pub value: Option<String>,
    /// When the probe was taken. Diagnostics only.
    pub observed_at: Timestamp,
}

impl ProbeResult {
    /// Returns true when the probe observed a non-empty value.
    ///
    /// An empty string counts as no value for gating purposes, though it is
    /// still shown verbatim in the diagnostic listing.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|value| !value.is_empty())
    }
}

/// Ordered set of probe results for one run.
///
/// # Invariants
/// - Result order matches endpoint declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    /// One result per declared endpoint, in declaration order.
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    /// Renders the per-endpoint listing shown to operators on gate failure.
    ///
    /// Absent values render as the empty-string marker `''` so the listing
    /// always shows one line per probed endpoint.
    #[must_use]
    pub fn listing(&self) -> String {
        let mut lines = Vec::with_capacity(self.results.len() + 1);
        lines.push("Probed channels:".to_string());
        for result in &self.results {
            let value = result.value.as_deref().unwrap_or("");
            lines.push(format!("  {} = '{}'", result.endpoint.channel, value));
        }
        lines.join("\n")
    }
}

// ============================================================================
// SECTION: Prober
// ============================================================================

/// Sequential liveness prober.
///
/// # Invariants
/// - Probes run strictly one after another; no concurrent dispatch.
/// - Each probe is a single query bounded by the client itself; the prober
///   adds no timeout layer and performs no retry.
pub struct Prober<'a> {
    /// Client used for every channel query.
    client: &'a dyn ChannelClient,
    /// Timestamp source for probe records.
    clock: &'a dyn Clock,
}

impl<'a> Prober<'a> {
    /// Creates a prober over the given client and clock.
    #[must_use]
    pub const fn new(client: &'a dyn ChannelClient, clock: &'a dyn Clock) -> Self {
        Self {
            client,
            clock,
        }
    }

    /// Probes every endpoint once, preserving declaration order.
    ///
    /// A query that errors is captured as an absent value, not propagated;
    /// the report always covers the full endpoint set.
    #[must_use]
    pub fn probe_all(&self, endpoints: &[Endpoint]) -> ProbeReport {
        let results = endpoints
            .iter()
            .map(|endpoint| ProbeResult {
                endpoint: endpoint.clone(),
                value: self.client.query(&endpoint.channel).ok().flatten(),
                observed_at: self.clock.now(),
            })
            .collect();
        ProbeReport {
            results,
        }
    }
}
