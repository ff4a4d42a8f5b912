// crates/preflight-channel/src/lib.rs
// ============================================================================
// Module: Preflight Channel Clients
// Description: Built-in channel client implementations.
// Purpose: Provide concrete one-shot query backends for the preflight prober.
// Dependencies: preflight-core, serde
// ============================================================================

//! ## Overview
//! This crate ships the channel clients used by the preflight prober: a
//! [`CagetClient`] that shells out to the external EPICS `caget` utility,
//! and a deterministic [`FixedClient`] backed by an in-memory map for
//! tests and offline runs.
//! Invariants:
//! - Every client performs exactly one bounded query per call; no retries.
//! - Unreachable channels surface as `Ok(None)`, never as a crash.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod caget;
pub mod fixed;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use caget::CagetClient;
pub use caget::CagetClientConfig;
pub use fixed::FixedClient;
