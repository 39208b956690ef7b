// crates/ord-bridge-core/src/tooling.rs
// ============================================================================
// Module: Tooling Identifiers
// Description: Canonical MCP tool identifiers for ORD Bridge.
// Purpose: Shared tool naming across contracts, routing, and config.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Canonical tool identifiers used by the ORD Bridge MCP server.
//! These names are part of the external contract surface.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Canonical tool names for ORD Bridge MCP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    /// Register a counterparty with the ORD provider.
    AddCounterparty,
    /// Register a service contract between two counterparties.
    AddContract,
    /// Register an advertising creative and obtain its erid.
    AddAdvertising,
    /// Register an act (invoice) for a contract period.
    AddAct,
}

impl ToolName {
    /// Returns the canonical string name for the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddCounterparty => "add_counterparty",
            Self::AddContract => "add_contract",
            Self::AddAdvertising => "add_advertising",
            Self::AddAct => "add_act",
        }
    }

    /// Returns all ORD Bridge tool names in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::AddCounterparty, Self::AddContract, Self::AddAdvertising, Self::AddAct]
    }

    /// Parses a tool name from its string representation.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "add_counterparty" => Some(Self::AddCounterparty),
            "add_contract" => Some(Self::AddContract),
            "add_advertising" => Some(Self::AddAdvertising),
            "add_act" => Some(Self::AddAct),
            _ => None,
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::missing_docs_in_private_items,
        reason = "Test-only tool name assertions."
    )]

    use super::ToolName;

    #[test]
    fn parse_round_trips_every_tool() {
        for tool in ToolName::all() {
            assert_eq!(ToolName::parse(tool.as_str()), Some(*tool));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(ToolName::parse("add_campaign"), None);
        assert_eq!(ToolName::parse(""), None);
    }

    #[test]
    fn serde_uses_snake_case_wire_names() {
        let json = serde_json::to_string(&ToolName::AddCounterparty).expect("serialize");
        assert_eq!(json, "\"add_counterparty\"");
    }
}
