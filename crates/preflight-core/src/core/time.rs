// crates/preflight-core/src/core/time.rs
// ============================================================================
// Module: Probe Timestamps
// Description: Opaque diagnostic timestamp attached to probe records.
// Purpose: Record when each probe was taken without reading the wall clock here.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Each probe result carries the moment it was taken, for operator
//! diagnostics only — gating never inspects it. The core does not read
//! wall-clock time itself; a [`crate::Clock`] supplies every value, so
//! tests can pin timestamps and probe reports stay deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Moment a probe was taken, in unix epoch milliseconds.
///
/// # Invariants
/// - Values come from the host's [`crate::Clock`]; the core never reads
///   wall-clock time directly.
/// - Diagnostics only: no ordering or freshness semantics are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix epoch milliseconds.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as unix epoch milliseconds.
    #[must_use]
    pub const fn as_unix_millis(&self) -> i64 {
        self.0
    }
}
