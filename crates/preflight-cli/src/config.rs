// crates/preflight-cli/src/config.rs
// ============================================================================
// Module: Preflight Configuration
// Description: TOML configuration model and strict, fail-closed loading.
// Purpose: Replace ambient process state with explicit endpoint and path config.
// Dependencies: preflight-channel, preflight-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration declares the probed endpoints with their diagnostic
//! labels, the channel client, the suite and report directories, and the
//! coverage runner command. Loading is strict: path and size limits are
//! enforced before parsing, unknown fields are rejected, and semantic
//! validation fails closed. With no config file the defaults reproduce
//! the original two-IOC test-suite setup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use preflight_channel::CagetClientConfig;
use preflight_core::Endpoint;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted config file size in bytes.
pub const MAX_CONFIG_BYTES: u64 = 1_048_576;
/// Maximum accepted config path length in bytes.
pub const MAX_CONFIG_PATH_LEN: usize = 4_096;
/// Maximum accepted length of a single config path component.
pub const MAX_PATH_COMPONENT_LEN: usize = 255;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config path exceeds the accepted length.
    #[error("config path exceeds max length")]
    PathTooLong,
    /// A config path component exceeds the accepted length.
    #[error("config path component too long")]
    PathComponentTooLong,
    /// Config file exceeds the accepted size.
    #[error("config file exceeds size limit")]
    FileTooLarge,
    /// Config file is not valid UTF-8.
    #[error("config file is not valid UTF-8")]
    NotUtf8,
    /// Config file could not be read.
    #[error("config read failed: {0}")]
    Read(String),
    /// Config file could not be parsed as TOML.
    #[error("config parse failed: {0}")]
    Parse(String),
    /// Config content failed semantic validation.
    #[error("config invalid: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// One probed endpoint declaration.
///
/// # Invariants
/// - `channel` and `label` are non-empty after validation.
/// - Declaration order is the probe and failure-reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Raw channel address to probe.
    pub channel: String,
    /// Human-readable category label used in diagnostics.
    pub label: String,
}

/// Channel client selection.
///
/// # Invariants
/// - Variants are stable for config compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClientConfig {
    /// Query through the external caget utility.
    Caget(CagetClientConfig),
    /// Serve fixed values from an in-memory map.
    Fixed {
        /// Map from channel address to served value.
        values: BTreeMap<String, String>,
    },
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::Caget(CagetClientConfig::default())
    }
}

/// External coverage-runner invocation settings.
///
/// # Invariants
/// - `program` and `package` are non-empty after validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RunnerConfig {
    /// Program used to run the coverage-instrumented suite.
    pub program: String,
    /// Production package instrumented for coverage.
    pub package: String,
    /// Whether test modules count in coverage accounting.
    pub include_tests: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: "cargo".to_string(),
            package: "preflight-core".to_string(),
            include_tests: false,
        }
    }
}

/// Top-level preflight configuration.
///
/// # Invariants
/// - Every endpoint here is required; an unreachable one fails the gate.
/// - Paths are explicit inputs; nothing is derived from ambient process state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PreflightConfig {
    /// Probed endpoints, in probe order.
    pub endpoints: Vec<EndpointConfig>,
    /// Channel client used for every probe.
    pub client: ClientConfig,
    /// Directory holding the test suite; must exist before probing.
    pub suite_dir: PathBuf,
    /// Directory receiving the HTML coverage report.
    pub report_dir: PathBuf,
    /// Coverage runner invocation settings.
    pub runner: RunnerConfig,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            endpoints: vec![
                EndpointConfig {
                    channel: "XF:31IDA-OP{Tbl-Ax:X1}Mtr.RBV".to_string(),
                    label: "Motor IOC".to_string(),
                },
                EndpointConfig {
                    channel: "XF:31IDA-BI{Cam:Tbl}cam1:ArraySizeX_RBV".to_string(),
                    label: "areaDetector example IOC".to_string(),
                },
            ],
            client: ClientConfig::default(),
            suite_dir: PathBuf::from("."),
            report_dir: PathBuf::from("cover"),
            runner: RunnerConfig::default(),
        }
    }
}

impl PreflightConfig {
    /// Loads configuration from an optional TOML file.
    ///
    /// With `None` the built-in defaults are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when path guards, size limits, encoding,
    /// parsing, or semantic validation fail.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        };
        check_path(path)?;
        let metadata =
            std::fs::metadata(path).map_err(|err| ConfigError::Read(err.to_string()))?;
        if metadata.len() > MAX_CONFIG_BYTES {
            return Err(ConfigError::FileTooLarge);
        }
        let bytes = std::fs::read(path).map_err(|err| ConfigError::Read(err.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8)?;
        let config: Self =
            toml::from_str(&text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Converts endpoint declarations into the core endpoint model.
    #[must_use]
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.endpoints
            .iter()
            .map(|endpoint| Endpoint::required(&endpoint.channel, &endpoint.label))
            .collect()
    }

    /// Validates semantic constraints on the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] on empty endpoint sets, empty
    /// channels or labels, duplicate channels, or empty runner fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoints.is_empty() {
            return Err(ConfigError::Invalid("endpoint list is empty".to_string()));
        }
        let mut seen = BTreeSet::new();
        for endpoint in &self.endpoints {
            if endpoint.channel.is_empty() {
                return Err(ConfigError::Invalid("endpoint channel is empty".to_string()));
            }
            if endpoint.label.is_empty() {
                return Err(ConfigError::Invalid("endpoint label is empty".to_string()));
            }
            if !seen.insert(endpoint.channel.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate endpoint channel: {}",
                    endpoint.channel
                )));
            }
        }
        if let ClientConfig::Caget(caget) = &self.client
            && caget.timeout_ms == 0
        {
            return Err(ConfigError::Invalid("caget timeout must be non-zero".to_string()));
        }
        if self.runner.program.is_empty() {
            return Err(ConfigError::Invalid("runner program is empty".to_string()));
        }
        if self.runner.package.is_empty() {
            return Err(ConfigError::Invalid("runner package is empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Enforces path length guards before any filesystem access.
fn check_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_CONFIG_PATH_LEN {
        return Err(ConfigError::PathTooLong);
    }
    for component in path.components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LEN {
            return Err(ConfigError::PathComponentTooLong);
        }
    }
    Ok(())
}
