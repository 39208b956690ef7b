// crates/ord-bridge-providers/src/provider.rs
// ============================================================================
// Module: Provider Trait
// Description: Registry provider abstraction and provider error taxonomy.
// Purpose: Decouple the tool router from concrete provider transports.
// Dependencies: ord-bridge-core, async-trait, thiserror
// ============================================================================

//! ## Overview
//! The [`OrdProvider`] trait is the seam between tool handling and the
//! registry transport. Each operation submits one registration and returns
//! the created-entity result or a classified [`OrdError`]. Implementations
//! must run domain validation before submitting anything.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use ord_bridge_core::ActCreated;
use ord_bridge_core::ActRequest;
use ord_bridge_core::ContractCreated;
use ord_bridge_core::ContractRequest;
use ord_bridge_core::CounterpartyCreated;
use ord_bridge_core::CounterpartyRequest;
use ord_bridge_core::CreativeCreated;
use ord_bridge_core::CreativeRequest;
use ord_bridge_core::ValidationError;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors surfaced by registry providers.
///
/// # Invariants
/// - [`OrdError::Validation`] and [`OrdError::Rejected`] carry messages safe
///   to show to MCP clients.
/// - Credentials never appear in error payloads.
#[derive(Debug, Error)]
pub enum OrdError {
    /// Request failed domain validation before submission.
    #[error("validation error: {0}")]
    Validation(String),
    /// Provider rejected the request payload (HTTP 400).
    #[error("{0}")]
    Rejected(String),
    /// Provider rejected the credentials (HTTP 401).
    #[error("provider authentication failed; check the configured api key")]
    Authentication,
    /// Provider denied access to the endpoint (HTTP 403).
    #[error("provider denied access to the requested endpoint")]
    Authorization,
    /// Provider configuration is unusable.
    #[error("provider configuration error: {0}")]
    Configuration(String),
    /// Transport-level failure reaching the provider.
    #[error("provider transport error: {0}")]
    Transport(String),
    /// Provider returned a status outside the handled set.
    #[error("provider returned unexpected status {0}")]
    UnexpectedStatus(u16),
}

impl From<ValidationError> for OrdError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error.to_string())
    }
}

// ============================================================================
// SECTION: Provider Trait
// ============================================================================

/// Registry provider abstraction for ORD registration operations.
///
/// # Invariants
/// - Operations are independent; the provider holds no per-request state.
/// - External identifiers are generated per call and returned in results.
#[async_trait]
pub trait OrdProvider: Send + Sync {
    /// Registers a counterparty.
    ///
    /// # Errors
    ///
    /// Returns [`OrdError`] when validation, submission, or the provider
    /// response fails.
    async fn create_counterparty(
        &self,
        request: &CounterpartyRequest,
    ) -> Result<CounterpartyCreated, OrdError>;

    /// Registers a service contract between two counterparties.
    ///
    /// # Errors
    ///
    /// Returns [`OrdError`] when validation, submission, or the provider
    /// response fails.
    async fn create_contract(&self, request: &ContractRequest)
    -> Result<ContractCreated, OrdError>;

    /// Registers a text creative and extracts its erid token.
    ///
    /// # Errors
    ///
    /// Returns [`OrdError`] when validation, submission, or the provider
    /// response fails.
    async fn create_advertising(
        &self,
        request: &CreativeRequest,
    ) -> Result<CreativeCreated, OrdError>;

    /// Registers an act covering an advertising period.
    ///
    /// # Errors
    ///
    /// Returns [`OrdError`] when validation, submission, or the provider
    /// response fails.
    async fn create_act(&self, request: &ActRequest) -> Result<ActCreated, OrdError>;
}
