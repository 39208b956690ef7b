// crates/ord-bridge-mcp/src/lib.rs
// ============================================================================
// Module: ORD Bridge MCP
// Description: MCP tool server exposing ORD registration tools.
// Purpose: Serve the four registration tools over JSON-RPC 2.0.
// Dependencies: ord-bridge-core, ord-bridge-providers, axum, tokio
// ============================================================================

//! ## Overview
//! This crate implements the ORD Bridge MCP server: a JSON-RPC 2.0 surface
//! over stdio or HTTP that lists the four registration tools and routes tool
//! calls through schema validation, business validation, and the configured
//! registry provider.
//! Security posture: tool inputs are untrusted and validated twice, first
//! against the contract schemas and then against the business rules.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod server;
pub mod telemetry;
pub mod tools;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use server::McpServer;
pub use server::McpServerError;
pub use telemetry::NoopTelemetry;
pub use telemetry::StderrTelemetry;
pub use telemetry::ToolOutcome;
pub use telemetry::ToolOutcomeEvent;
pub use telemetry::ToolTelemetry;
pub use tools::ToolError;
pub use tools::ToolRouter;
