// crates/ord-bridge-mcp/src/telemetry.rs
// ============================================================================
// Module: Tool Telemetry
// Description: Observability hooks for tool call progress and outcomes.
// Purpose: Report progress checkpoints and outcomes without hard deps.
// Dependencies: ord-bridge-core
// ============================================================================

//! ## Overview
//! This module exposes a thin telemetry interface for tool calls: progress
//! checkpoints while a registration is in flight and a terminal outcome event
//! per call. It is intentionally dependency-light so deployments can plug in
//! their own sinks without redesign.
//! Security posture: telemetry must never carry credentials or raw payloads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use ord_bridge_core::ToolName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Total units of work reported for every tool call.
pub const PROGRESS_TOTAL: u8 = 100;

// ============================================================================
// SECTION: Outcome Labels
// ============================================================================

/// Tool call outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ToolOutcome {
    /// Successful tool call.
    Ok,
    /// Failed tool call.
    Error,
}

impl ToolOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Terminal event emitted once per tool call.
///
/// # Invariants
/// - `error_kind` is `None` exactly when `outcome` is [`ToolOutcome::Ok`].
/// - `result_id` is present only for successful calls.
/// - `attributes` never carries credentials or free-text payload fields.
#[derive(Debug, Clone)]
pub struct ToolOutcomeEvent {
    /// Tool the call addressed.
    pub tool: ToolName,
    /// Call outcome.
    pub outcome: ToolOutcome,
    /// Normalized error kind label for failures.
    pub error_kind: Option<&'static str>,
    /// Identifier of the created entity for successful calls.
    pub result_id: Option<String>,
    /// Sanitized input attributes mirrored from the call arguments.
    pub attributes: Vec<(&'static str, String)>,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Telemetry sink for tool call progress and outcomes.
pub trait ToolTelemetry: Send + Sync {
    /// Records a progress checkpoint for an in-flight call.
    fn progress(&self, tool: ToolName, current: u8, total: u8);
    /// Records the terminal outcome of a call.
    fn outcome(&self, event: ToolOutcomeEvent);
}

/// No-op telemetry sink.
///
/// # Invariants
/// - Events are intentionally discarded.
pub struct NoopTelemetry;

impl ToolTelemetry for NoopTelemetry {
    fn progress(&self, _tool: ToolName, _current: u8, _total: u8) {}

    fn outcome(&self, _event: ToolOutcomeEvent) {}
}

/// Telemetry sink writing one line per event to stderr.
///
/// Stdout is reserved for the stdio transport, so diagnostics go to stderr.
pub struct StderrTelemetry;

impl ToolTelemetry for StderrTelemetry {
    fn progress(&self, tool: ToolName, current: u8, total: u8) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "ord-bridge-mcp: {tool} progress {current}/{total}");
    }

    fn outcome(&self, event: ToolOutcomeEvent) {
        let mut line = format!("ord-bridge-mcp: {} {}", event.tool, event.outcome.as_str());
        if let Some(kind) = event.error_kind {
            line.push_str(&format!(" ({kind})"));
        }
        if let Some(id) = &event.result_id {
            line.push_str(&format!(" id={id}"));
        }
        for (key, value) in &event.attributes {
            line.push_str(&format!(" {key}={value}"));
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
    }
}
