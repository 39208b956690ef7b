// crates/ord-bridge-config/src/lib.rs
// ============================================================================
// Module: ORD Bridge Config
// Description: Configuration loading and validation for ORD Bridge.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml, thiserror
// ============================================================================

//! ## Overview
//! Configuration for the ORD Bridge tool server: provider selection and
//! credentials, request limits, and server transport settings. Loading is
//! strict and fail-closed; unknown keys, oversized files, and out-of-bounds
//! values are rejected before the server starts.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::API_KEY_ENV_VAR;
pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::LimitsConfig;
pub use config::OrdConfig;
pub use config::ProviderConfig;
pub use config::ServerConfig;
pub use config::ServerTransport;
