// crates/ord-bridge-providers/src/lib.rs
// ============================================================================
// Module: ORD Bridge Providers
// Description: Registry provider implementations and the provider factory.
// Purpose: Forward validated registration requests to ORD provider APIs.
// Dependencies: ord-bridge-core, ord-bridge-config, reqwest, serde
// ============================================================================

//! ## Overview
//! This crate defines the [`OrdProvider`] trait that the tool router calls and
//! ships the VK ORD implementation: authenticated HTTP PUT submission of
//! counterparties, contracts, creatives, and acts with client-generated
//! external identifiers. Provider error bodies are translated into readable
//! messages before they reach MCP clients.
//! Invariants:
//! - Domain validation runs before any request leaves the process.
//! - Authentication and authorization failures are classified, never retried.
//!
//! Security posture: provider responses are untrusted input.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod factory;
pub mod provider;
pub mod translate;
pub mod vk;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use factory::provider_from_config;
pub use provider::OrdError;
pub use provider::OrdProvider;
pub use translate::translate_bad_request;
pub use vk::VkProvider;
pub use vk::VkProviderConfig;
