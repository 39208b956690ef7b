// crates/ord-bridge-contract/src/tooling.rs
// ============================================================================
// Module: MCP Tool Contracts
// Description: Canonical MCP tool definitions and schemas for ORD Bridge.
// Purpose: Provide tool contracts for MCP listing and input validation.
// Dependencies: serde_json, ord-bridge-contract::types
// ============================================================================

//! ## Overview
//! This module defines the canonical MCP tool surface. Tool contracts drive
//! MCP tool listings, and their input schemas are compiled by the tool router
//! into the validation boundary applied before any payload is decoded.
//! Security posture: tool inputs are untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::types::ToolContract;
use crate::types::ToolDefinition;
use crate::types::ToolExample;
use crate::types::ToolName;

// ============================================================================
// SECTION: Schema Shapes
// ============================================================================

/// Regex shape for ISO `YYYY-MM-DD` date strings.
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";
/// Regex shape for tax identification numbers (10-12 digits).
const INN_PATTERN: &str = r"^\d{10,12}$";
/// Regex shape for advertising category (KKTU) codes.
const KKTU_PATTERN: &str = r"^\d+\.\d+\.\d+$";

// ============================================================================
// SECTION: Tool Contracts
// ============================================================================

/// Returns the canonical MCP tool contracts.
///
/// The order is intentional: it matches [`ToolName::all`] and is preserved in
/// tool listings. Append new tools at the end.
#[must_use]
pub fn tool_contracts() -> Vec<ToolContract> {
    vec![
        add_counterparty_contract(),
        add_contract_contract(),
        add_advertising_contract(),
        add_act_contract(),
    ]
}

/// Returns the tool definitions used by MCP tool listing.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    tool_contracts()
        .into_iter()
        .map(|contract| ToolDefinition {
            name: contract.name,
            description: contract.description,
            input_schema: contract.input_schema,
        })
        .collect()
}

/// Builds the tool contract for `add_counterparty`.
fn add_counterparty_contract() -> ToolContract {
    ToolContract {
        name: ToolName::AddCounterparty,
        description: "Register a counterparty (person or organization) with the ORD provider."
            .to_string(),
        input_schema: object_schema(
            json!({
                "name": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Full person name or legal organization name.",
                },
                "roles": {
                    "type": "array",
                    "items": role_schema(),
                    "minItems": 1,
                    "uniqueItems": true,
                    "description": "Roles the counterparty plays; several may apply.",
                },
                "type": {
                    "type": "string",
                    "enum": [
                        "physical",
                        "juridical",
                        "ip",
                        "foreign_physical",
                        "foreign_juridical",
                    ],
                    "description": "Legal classification of the counterparty.",
                },
                "inn": {
                    "type": "string",
                    "pattern": INN_PATTERN,
                    "description": "Tax number: 10 digits for legal entities, 12 for persons.",
                },
            }),
            &["name", "roles", "type", "inn"],
        ),
        output_schema: created_schema("counterparty_id", None),
        examples: vec![ToolExample {
            description: "Register an agency with a 10-digit tax number.".to_string(),
            input: json!({
                "name": "OOO Sever",
                "roles": ["agency"],
                "type": "juridical",
                "inn": "7707083893",
            }),
            output: json!({
                "counterparty_id": "rajs3fu1698-1h5a50m5",
                "status_code": 200,
            }),
        }],
        notes: vec![
            "The counterparty_id is generated client-side and returned on success.".to_string(),
            "Name length is bounded by the configured limit (default 255 characters)."
                .to_string(),
        ],
    }
}

/// Builds the tool contract for `add_contract`.
fn add_contract_contract() -> ToolContract {
    ToolContract {
        name: ToolName::AddContract,
        description: "Register a service contract between two previously registered \
                      counterparties."
            .to_string(),
        input_schema: object_schema(
            json!({
                "client_external_id": external_id_schema("External identifier of the client."),
                "contractor_external_id":
                    external_id_schema("External identifier of the contractor."),
                "subject_type": {
                    "type": "string",
                    "enum": [
                        "representation",
                        "org_distribution",
                        "mediation",
                        "distribution",
                        "other",
                    ],
                    "description": "Subject matter of the contract.",
                },
                "date": {
                    "type": "string",
                    "pattern": DATE_PATTERN,
                    "description": "Conclusion date as YYYY-MM-DD; defaults to the current UTC \
                                    day.",
                },
            }),
            &["client_external_id", "contractor_external_id", "subject_type"],
        ),
        output_schema: created_schema("contract_id", None),
        examples: vec![ToolExample {
            description: "Register a distribution contract concluded on an explicit date."
                .to_string(),
            input: json!({
                "client_external_id": "rajs3fu1698-1h5a50m5",
                "contractor_external_id": "b20c47ae912-55fd01c3",
                "subject_type": "distribution",
                "date": "2026-08-01",
            }),
            output: json!({
                "contract_id": "9c1d22ab047-8e3f1b90",
                "status_code": 200,
            }),
        }],
        notes: vec![
            "The contract type is fixed to service.".to_string(),
            "Client and contractor identifiers must differ.".to_string(),
        ],
    }
}

/// Builds the tool contract for `add_advertising`.
fn add_advertising_contract() -> ToolContract {
    ToolContract {
        name: ToolName::AddAdvertising,
        description: "Register a text advertising creative and obtain its erid token."
            .to_string(),
        input_schema: object_schema(
            json!({
                "kktus": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "pattern": KKTU_PATTERN,
                    },
                    "minItems": 1,
                    "maxItems": 16,
                    "description": "Advertising category codes; one for plain creatives, up to \
                                    16 for co-branded ones.",
                },
                "texts": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "minLength": 1,
                        "maxLength": 65_000,
                    },
                    "minItems": 1,
                    "description": "Creative text variants.",
                },
                "contract_external_ids": {
                    "type": "array",
                    "items": external_id_schema("External identifier of an originating contract."),
                    "minItems": 1,
                    "description": "Contracts the creative is registered under.",
                },
            }),
            &["kktus", "texts", "contract_external_ids"],
        ),
        output_schema: created_schema(
            "creative_id",
            Some(json!({
                "type": ["string", "null"],
                "description": "Provider-assigned advertising token.",
            })),
        ),
        examples: vec![ToolExample {
            description: "Register a single-category text creative.".to_string(),
            input: json!({
                "kktus": ["1.1.1"],
                "texts": ["Autumn sale: everything for the garden."],
                "contract_external_ids": ["9c1d22ab047-8e3f1b90"],
            }),
            output: json!({
                "erid": "2SDnjcbYYzo",
                "creative_id": "f04a88de21b-0c9e52a7",
                "status_code": 200,
            }),
        }],
        notes: vec![
            "The creative form is fixed to text_block.".to_string(),
            "Combined text length must stay within 65000 characters.".to_string(),
        ],
    }
}

/// Builds the tool contract for `add_act`.
fn add_act_contract() -> ToolContract {
    ToolContract {
        name: ToolName::AddAct,
        description: "Register an act (invoice) covering an advertising period under a contract."
            .to_string(),
        input_schema: object_schema(
            json!({
                "contract_external_id":
                    external_id_schema("External identifier of the contract the act belongs to."),
                "date_act": {
                    "type": "string",
                    "pattern": DATE_PATTERN,
                    "description": "Act issue date as YYYY-MM-DD.",
                },
                "date_start": {
                    "type": "string",
                    "pattern": DATE_PATTERN,
                    "description": "Period start date as YYYY-MM-DD.",
                },
                "date_end": {
                    "type": "string",
                    "pattern": DATE_PATTERN,
                    "description": "Period end date as YYYY-MM-DD.",
                },
                "excluding_vat": {
                    "type": "number",
                    "minimum": 0,
                    "description": "Non-negative amount excluding VAT.",
                },
                "vat_rate": {
                    "type": "integer",
                    "enum": [0, 5, 7, 10, 20],
                    "description": "VAT rate in percent.",
                },
                "client_role": role_schema(),
                "contractor_role": role_schema(),
            }),
            &[
                "contract_external_id",
                "date_act",
                "date_start",
                "date_end",
                "excluding_vat",
                "vat_rate",
                "client_role",
                "contractor_role",
            ],
        ),
        output_schema: created_schema("act_id", None),
        examples: vec![ToolExample {
            description: "Register an act for an August campaign at 20% VAT.".to_string(),
            input: json!({
                "contract_external_id": "9c1d22ab047-8e3f1b90",
                "date_act": "2026-08-20",
                "date_start": "2026-08-01",
                "date_end": "2026-08-20",
                "excluding_vat": 1000.0,
                "vat_rate": 20,
                "client_role": "agency",
                "contractor_role": "publisher",
            }),
            output: json!({
                "act_id": "03d6eb1f7aa-94b02c18",
                "status_code": 200,
            }),
        }],
        notes: vec![
            "Dates must not precede 1991-01-01; the act date must not be in the future."
                .to_string(),
            "Acts with an advertiser client role are rejected.".to_string(),
        ],
    }
}

// ============================================================================
// SECTION: Schema Helpers
// ============================================================================

/// Builds a strict object schema with the given properties and required keys.
fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

/// Builds the schema for a counterparty role field.
fn role_schema() -> Value {
    json!({
        "type": "string",
        "enum": ["advertiser", "agency", "ors", "publisher"],
        "description": "Counterparty role.",
    })
}

/// Builds the schema for an external identifier field.
fn external_id_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "description": description,
    })
}

/// Builds the creation result schema keyed by the per-entity identifier,
/// optionally with an erid field.
fn created_schema(id_key: &str, erid: Option<Value>) -> Value {
    let mut properties = json!({
        id_key: {
            "type": "string",
            "description": "Client-generated external identifier.",
        },
        "status_code": {
            "type": "integer",
            "description": "HTTP status returned by the provider.",
        },
    });
    if let (Some(erid), Some(map)) = (erid, properties.as_object_mut()) {
        map.insert("erid".to_string(), erid);
    }
    object_schema(properties, &[id_key, "status_code"])
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
        reason = "Test-only validation helpers use panic-based assertions for clarity."
    )]

    use jsonschema::Draft;
    use jsonschema::Validator;

    use super::ToolName;
    use super::tool_contracts;
    use super::tool_definitions;

    /// Compiles a schema under draft 2020-12.
    fn compile(schema: &serde_json::Value) -> Validator {
        jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(schema)
            .expect("schema compilation failed")
    }

    #[test]
    fn contracts_match_canonical_tool_order() {
        let contracts = tool_contracts();
        let names: Vec<ToolName> = contracts.iter().map(|contract| contract.name).collect();
        assert_eq!(names, ToolName::all().to_vec());
    }

    #[test]
    fn definitions_mirror_contracts() {
        let definitions = tool_definitions();
        let contracts = tool_contracts();
        assert_eq!(definitions.len(), contracts.len());
        for (definition, contract) in definitions.iter().zip(contracts.iter()) {
            assert_eq!(definition.name, contract.name);
            assert_eq!(definition.input_schema, contract.input_schema);
        }
    }

    #[test]
    fn examples_validate_against_schemas() {
        for contract in tool_contracts() {
            let input = compile(&contract.input_schema);
            let output = compile(&contract.output_schema);
            for example in &contract.examples {
                assert!(
                    input.is_valid(&example.input),
                    "input example rejected for {}",
                    contract.name
                );
                assert!(
                    output.is_valid(&example.output),
                    "output example rejected for {}",
                    contract.name
                );
            }
        }
    }

    #[test]
    fn output_schemas_require_per_entity_id_keys() {
        let expected = ["counterparty_id", "contract_id", "creative_id", "act_id"];
        for (contract, key) in tool_contracts().iter().zip(expected) {
            let required = contract.output_schema["required"].as_array().expect("required");
            assert!(
                required.contains(&serde_json::json!(key)),
                "{} output schema missing {key}",
                contract.name
            );
            assert!(contract.output_schema["properties"].get(key).is_some());
        }
    }

    #[test]
    fn counterparty_schema_rejects_malformed_inn() {
        let contract = &tool_contracts()[0];
        let validator = compile(&contract.input_schema);
        let payload = serde_json::json!({
            "name": "OOO Sever",
            "roles": ["agency"],
            "type": "juridical",
            "inn": "12345",
        });
        assert!(!validator.is_valid(&payload));
    }

    #[test]
    fn advertising_schema_bounds_kktu_count() {
        let contract = &tool_contracts()[2];
        let validator = compile(&contract.input_schema);
        let kktus: Vec<String> = (0..17).map(|i| format!("1.1.{i}")).collect();
        let payload = serde_json::json!({
            "kktus": kktus,
            "texts": ["text"],
            "contract_external_ids": ["9c1d22ab047-8e3f1b90"],
        });
        assert!(!validator.is_valid(&payload));
    }

    #[test]
    fn act_schema_rejects_unknown_vat_rate() {
        let contract = &tool_contracts()[3];
        let validator = compile(&contract.input_schema);
        let payload = serde_json::json!({
            "contract_external_id": "9c1d22ab047-8e3f1b90",
            "date_act": "2026-08-20",
            "date_start": "2026-08-01",
            "date_end": "2026-08-20",
            "excluding_vat": 100.0,
            "vat_rate": 18,
            "client_role": "agency",
            "contractor_role": "publisher",
        });
        assert!(!validator.is_valid(&payload));
    }

    #[test]
    fn schemas_reject_unknown_properties() {
        for contract in tool_contracts() {
            let validator = compile(&contract.input_schema);
            let mut payload = contract.examples[0].input.clone();
            payload
                .as_object_mut()
                .expect("object example")
                .insert("unexpected".to_string(), serde_json::json!(true));
            assert!(!validator.is_valid(&payload), "extra key accepted for {}", contract.name);
        }
    }
}
