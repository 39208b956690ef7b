// crates/ord-bridge-contract/src/lib.rs
// ============================================================================
// Module: ORD Bridge Contract
// Description: Canonical MCP tool contracts and JSON Schemas.
// Purpose: Provide the schema-level validation boundary for tool inputs.
// Dependencies: ord-bridge-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This crate defines the canonical MCP tool surface of ORD Bridge: the four
//! tool contracts with strict JSON Schemas for their inputs and outputs. The
//! input schemas carry the shape-level constraints (field presence, enum
//! membership, regex shapes of INN/KKTU/date fields, array bounds) that the
//! tool router enforces before decoding a payload.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod tooling;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

/// Canonical MCP tool names for ORD Bridge.
pub use ord_bridge_core::ToolName;
pub use tooling::tool_contracts;
pub use tooling::tool_definitions;
pub use types::ToolContract;
pub use types::ToolDefinition;
pub use types::ToolExample;
