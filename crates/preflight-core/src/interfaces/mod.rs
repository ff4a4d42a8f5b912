// crates/preflight-core/src/interfaces/mod.rs
// ============================================================================
// Module: Preflight Interfaces
// Description: Backend-agnostic interfaces for channel queries and time.
// Purpose: Define the contract surfaces between the prober and its collaborators.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the prober reaches external systems without
//! embedding protocol-specific details. A [`ChannelClient`] performs one
//! bounded query per call; a [`Clock`] supplies timestamps so the core
//! never reads wall-clock time itself.
//!
//! Implementations must be single-shot: one query per probe, no retries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Channel Client
// ============================================================================

/// Channel client errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Errors never propagate past the prober, which treats them as absence.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The underlying protocol client could not be invoked.
    #[error("channel client error: {0}")]
    Client(String),
}

/// Backend-agnostic client for one-shot channel value queries.
///
/// A query must be bounded by the implementation's own timeout; the prober
/// adds no timeout layer of its own.
pub trait ChannelClient {
    /// Queries the current value of the named channel.
    ///
    /// Returns `Ok(None)` when the channel is reachable through the client
    /// but yields no value. Implementations must not retry.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the query cannot be performed at all.
    fn query(&self, channel: &str) -> Result<Option<String>, ChannelError>;
}

// ============================================================================
// SECTION: Clock
// ============================================================================

/// Source of timestamps for probe records.
pub trait Clock {
    /// Returns the current timestamp.
    fn now(&self) -> Timestamp;
}
