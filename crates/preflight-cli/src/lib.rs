// crates/preflight-cli/src/lib.rs
// ============================================================================
// Module: Preflight CLI Library
// Description: Configuration and test-run invocation for the preflight binary.
// Purpose: Expose the CLI's non-interactive pieces for testing.
// Dependencies: preflight-core, preflight-channel, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Library surface of the `preflight` binary: strict TOML configuration
//! loading and the report-directory/test-runner glue. The decision logic
//! itself lives in `preflight-core`; this crate only wires it to the
//! process environment.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod runner;
