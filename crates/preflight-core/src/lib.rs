// crates/preflight-core/src/lib.rs
// ============================================================================
// Module: Preflight Core
// Description: Endpoint model, liveness prober, and precondition gate.
// Purpose: Decide whether the hardware-control test suite may run.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Preflight confirms that the control-system endpoints a test suite
//! depends on are live before the suite is invoked. This crate holds the
//! decision logic: the [`Prober`] queries each declared [`Endpoint`]
//! through a [`ChannelClient`] and records one [`ProbeResult`] per
//! endpoint, and the [`GateDecision`] derived from those results either
//! lets the run proceed or produces an operator diagnostic.
//! Invariants:
//! - The prober never fails; unreachable endpoints surface as absent values.
//! - A gate passes iff every required endpoint yielded a non-empty value.
//! - Probe and failure ordering follow endpoint declaration order.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::endpoint::Endpoint;
pub use self::core::gate::GateDecision;
pub use self::core::gate::GateError;
pub use self::core::probe::ProbeReport;
pub use self::core::probe::ProbeResult;
pub use self::core::probe::Prober;
pub use self::core::time::Timestamp;
pub use self::interfaces::ChannelClient;
pub use self::interfaces::ChannelError;
pub use self::interfaces::Clock;
