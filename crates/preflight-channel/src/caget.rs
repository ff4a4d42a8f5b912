// crates/preflight-channel/src/caget.rs
// ============================================================================
// Module: Caget Channel Client
// Description: One-shot channel queries through the external caget utility.
// Purpose: Probe EPICS process variables without implementing the protocol.
// Dependencies: preflight-core, serde, std::process
// ============================================================================

//! ## Overview
//! The caget client runs the external `caget` binary once per query with
//! the utility's own timeout bound (`-w`). The protocol implementation is
//! entirely the utility's concern; this client only captures its textual
//! output. A non-zero exit or undecodable output collapses to an absent
//! value, since the prober does not distinguish unreachability causes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::process::Command;

use preflight_core::ChannelClient;
use preflight_core::ChannelError;
use serde::Deserialize;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the caget client.
///
/// # Invariants
/// - `timeout_ms` bounds each query inside the utility itself; the client
///   adds no timeout layer of its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CagetClientConfig {
    /// Program name or path of the caget utility.
    pub program: String,
    /// Per-query timeout passed to the utility, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for CagetClientConfig {
    fn default() -> Self {
        Self {
            program: "caget".to_string(),
            timeout_ms: 1_000,
        }
    }
}

// ============================================================================
// SECTION: Client Implementation
// ============================================================================

/// Channel client backed by the external `caget` utility.
///
/// # Invariants
/// - One subprocess invocation per query; no retry on any failure mode.
/// - A non-zero utility exit is reported as absence, not as an error.
pub struct CagetClient {
    /// Client configuration.
    config: CagetClientConfig,
}

impl CagetClient {
    /// Creates a new caget client with the given configuration.
    #[must_use]
    pub const fn new(config: CagetClientConfig) -> Self {
        Self {
            config,
        }
    }

    /// Builds the argument list for one query against the named channel.
    pub(crate) fn query_args(&self, channel: &str) -> Vec<String> {
        vec![
            "-t".to_string(),
            "-w".to_string(),
            format_timeout_secs(self.config.timeout_ms),
            channel.to_string(),
        ]
    }
}

impl ChannelClient for CagetClient {
    fn query(&self, channel: &str) -> Result<Option<String>, ChannelError> {
        let output = Command::new(&self.config.program)
            .args(self.query_args(channel))
            .output()
            .map_err(|err| {
                ChannelError::Client(format!("spawn {} failed: {err}", self.config.program))
            })?;
        if !output.status.success() {
            return Ok(None);
        }
        let Ok(text) = String::from_utf8(output.stdout) else {
            return Ok(None);
        };
        Ok(Some(text.trim_end_matches(['\r', '\n']).to_string()))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Formats a millisecond timeout as the fractional seconds caget expects.
fn format_timeout_secs(timeout_ms: u64) -> String {
    let whole = timeout_ms / 1_000;
    let millis = timeout_ms % 1_000;
    format!("{whole}.{millis:03}")
}
