// crates/preflight-core/src/core/mod.rs
// ============================================================================
// Module: Preflight Core Model
// Description: Endpoint, probe, gate, and time records.
// Purpose: Group the immutable data model behind the preflight decision.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! Core data model for a preflight run. Records are created once per run
//! and never mutated afterwards.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod endpoint;
pub mod gate;
pub mod probe;
pub mod time;
