// crates/ord-bridge-config/src/config.rs
// ============================================================================
// Module: ORD Bridge Configuration
// Description: Configuration loading and validation for ORD Bridge.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The API key may be supplied in the file or through the `ORD_API_KEY`
//! environment variable; the environment always wins so deployments can keep
//! credentials out of files. Missing or invalid configuration fails closed.
//! Security posture: config inputs are untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "ord-bridge.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "ORD_BRIDGE_CONFIG";
/// Environment variable that overrides the provider API key.
pub const API_KEY_ENV_VAR: &str = "ORD_API_KEY";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default provider base endpoint (VK ORD sandbox).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api-sandbox.ord.vk.com";
/// Default outbound request timeout in milliseconds.
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Minimum allowed outbound request timeout in milliseconds.
pub(crate) const MIN_TIMEOUT_MS: u64 = 1_000;
/// Maximum allowed outbound request timeout in milliseconds.
pub(crate) const MAX_TIMEOUT_MS: u64 = 120_000;
/// Default maximum counterparty name length in characters.
pub(crate) const DEFAULT_MAX_NAME_LENGTH: usize = 255;
/// Maximum allowed counterparty name length limit.
pub(crate) const MAX_NAME_LENGTH_LIMIT: usize = 4096;
/// Default maximum request body size in bytes.
pub(crate) const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
/// Maximum allowed request body size in bytes.
pub(crate) const MAX_BODY_BYTES_LIMIT: usize = 8 * 1024 * 1024;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// ORD Bridge configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrdConfig {
    /// Provider selection and credentials.
    pub provider: ProviderConfig,
    /// Request limits applied before submission.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Server transport configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Provider selection and outbound request settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Provider selector, matched case-insensitively (`vk`).
    pub name: String,
    /// Bearer token for the provider API; `ORD_API_KEY` overrides this.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Provider base endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Outbound request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Request limits applied before submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum counterparty name length in characters.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

/// Server transport configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Transport used to serve JSON-RPC requests.
    #[serde(default)]
    pub transport: ServerTransport,
    /// Bind address, required for the HTTP transport.
    #[serde(default)]
    pub bind: Option<String>,
    /// Maximum allowed request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: ServerTransport::Stdio,
            bind: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Supported server transports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerTransport {
    /// JSON-RPC over stdin/stdout with Content-Length framing.
    #[default]
    Stdio,
    /// JSON-RPC over HTTP POST `/rpc`.
    Http,
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl OrdConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The path is taken from the argument, then `ORD_BRIDGE_CONFIG`, then
    /// `ord-bridge.toml` in the working directory. `ORD_API_KEY` overrides
    /// the file-supplied API key when set to a non-empty value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides for sensitive values.
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = env::var(API_KEY_ENV_VAR)
            && !key.trim().is_empty()
        {
            self.provider.api_key = Some(key);
        }
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.provider.validate()?;
        self.limits.validate()?;
        self.server.validate()?;
        Ok(())
    }
}

impl ProviderConfig {
    /// Validates provider selection, credentials, and request settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a provider setting is missing or out of
    /// bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("provider.name must be non-empty".to_string()));
        }
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "provider api key required; set provider.api_key or {API_KEY_ENV_VAR}"
                )));
            }
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ConfigError::Invalid(
                "provider.base_url must use http or https".to_string(),
            ));
        }
        if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&self.timeout_ms) {
            return Err(ConfigError::Invalid(format!(
                "provider.timeout_ms must be within {MIN_TIMEOUT_MS}..={MAX_TIMEOUT_MS}"
            )));
        }
        Ok(())
    }
}

impl LimitsConfig {
    /// Validates request limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a limit is out of bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_NAME_LENGTH_LIMIT).contains(&self.max_name_length) {
            return Err(ConfigError::Invalid(format!(
                "limits.max_name_length must be within 1..={MAX_NAME_LENGTH_LIMIT}"
            )));
        }
        Ok(())
    }
}

impl ServerConfig {
    /// Validates server transport settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the transport configuration is incomplete
    /// or out of bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transport == ServerTransport::Http {
            let bind = self
                .bind
                .as_ref()
                .ok_or_else(|| {
                    ConfigError::Invalid("server.bind required for http transport".to_string())
                })?;
            bind.parse::<SocketAddr>().map_err(|_| {
                ConfigError::Invalid("server.bind must be a socket address".to_string())
            })?;
        }
        if !(1..=MAX_BODY_BYTES_LIMIT).contains(&self.max_body_bytes) {
            return Err(ConfigError::Invalid(format!(
                "server.max_body_bytes must be within 1..={MAX_BODY_BYTES_LIMIT}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default provider base endpoint.
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default outbound request timeout.
const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Default maximum counterparty name length.
const fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}

/// Default maximum request body size.
const fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
