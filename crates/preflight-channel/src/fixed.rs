// crates/preflight-channel/src/fixed.rs
// ============================================================================
// Module: Fixed Channel Client
// Description: Deterministic in-memory channel client.
// Purpose: Serve known channel values for tests and offline runs.
// Dependencies: preflight-core
// ============================================================================

//! ## Overview
//! The fixed client answers queries from a static map and never touches
//! the network or a subprocess. Channels missing from the map yield
//! `Ok(None)`, matching how a live client reports an unreachable channel.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use preflight_core::ChannelClient;
use preflight_core::ChannelError;

// ============================================================================
// SECTION: Client Implementation
// ============================================================================

/// Channel client backed by a fixed channel-to-value map.
///
/// # Invariants
/// - Queries are deterministic; repeated queries yield identical results.
/// - Missing channels yield absence, never an error.
#[derive(Debug, Clone, Default)]
pub struct FixedClient {
    /// Map from channel address to served value.
    values: BTreeMap<String, String>,
}

impl FixedClient {
    /// Creates a fixed client serving the given channel values.
    #[must_use]
    pub const fn new(values: BTreeMap<String, String>) -> Self {
        Self {
            values,
        }
    }

    /// Adds one channel value, replacing any existing entry.
    #[must_use]
    pub fn with_value(mut self, channel: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(channel.into(), value.into());
        self
    }
}

impl ChannelClient for FixedClient {
    fn query(&self, channel: &str) -> Result<Option<String>, ChannelError> {
        Ok(self.values.get(channel).cloned())
    }
}
