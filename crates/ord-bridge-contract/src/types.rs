// crates/ord-bridge-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Shared data models for ORD Bridge contract artifacts.
// Purpose: Provide canonical shapes for tool listing and schema validation.
// Dependencies: ord-bridge-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines the typed contract shapes serialized into MCP tool
//! listings and used by the tool router to compile input validators.

// ============================================================================
// SECTION: Imports
// ============================================================================

/// Canonical MCP tool names for ORD Bridge.
pub use ord_bridge_core::ToolName;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Tooling Contracts
// ============================================================================

/// Tool definition used by MCP tool listing.
///
/// # Invariants
/// - `name` is a stable MCP tool identifier.
/// - `input_schema` is a JSON Schema payload for the tool input shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// MCP tool name.
    pub name: ToolName,
    /// Tool description for clients.
    pub description: String,
    /// JSON schema for tool input.
    pub input_schema: Value,
}

/// Tool contract with full request and response schemas.
///
/// # Invariants
/// - `input_schema` and `output_schema` are JSON Schema payloads.
/// - `examples` validate against the schemas when emitted by
///   [`crate::tooling::tool_contracts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolContract {
    /// Tool name.
    pub name: ToolName,
    /// Tool description.
    pub description: String,
    /// JSON schema for tool input payload.
    pub input_schema: Value,
    /// JSON schema for tool response payload.
    pub output_schema: Value,
    /// Example payloads for documentation and clients.
    pub examples: Vec<ToolExample>,
    /// Notes describing tool usage.
    pub notes: Vec<String>,
}

/// Tool example with input/output payloads.
///
/// # Invariants
/// - `input` and `output` align with the tool schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolExample {
    /// Short example description.
    pub description: String,
    /// Example input payload.
    pub input: Value,
    /// Example output payload.
    pub output: Value,
}
