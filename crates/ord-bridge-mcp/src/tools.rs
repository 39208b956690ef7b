// crates/ord-bridge-mcp/src/tools.rs
// ============================================================================
// Module: Tool Router
// Description: Tool call routing, validation, and provider dispatch.
// Purpose: Turn validated tool arguments into provider registrations.
// Dependencies: ord-bridge-contract, ord-bridge-core, ord-bridge-providers, jsonschema
// ============================================================================

//! ## Overview
//! The tool router owns one compiled JSON Schema validator per tool and runs
//! every call through the same pipeline: schema validation, parameter
//! decoding, business validation, provider submission, result serialization.
//! Progress checkpoints and a terminal outcome are reported to the telemetry
//! sink for each call.
//! Security posture: tool arguments are untrusted; nothing reaches a provider
//! before both validation layers pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use jsonschema::Draft;
use jsonschema::Validator;
use ord_bridge_contract::ToolDefinition;
use ord_bridge_contract::tool_contracts;
use ord_bridge_contract::tool_definitions;
use ord_bridge_core::ActRequest;
use ord_bridge_core::ContractRequest;
use ord_bridge_core::ContractType;
use ord_bridge_core::CounterpartyRequest;
use ord_bridge_core::CounterpartyType;
use ord_bridge_core::CreativeForm;
use ord_bridge_core::CreativeRequest;
use ord_bridge_core::ExternalId;
use ord_bridge_core::JuridicalDetails;
use ord_bridge_core::Role;
use ord_bridge_core::SubjectType;
use ord_bridge_core::ToolName;
use ord_bridge_core::ValidationError;
use ord_bridge_core::VatRate;
use ord_bridge_core::build_amount;
use ord_bridge_core::check_counterparty_name;
use ord_bridge_providers::OrdError;
use ord_bridge_providers::OrdProvider;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Number;
use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::telemetry::PROGRESS_TOTAL;
use crate::telemetry::ToolOutcome;
use crate::telemetry::ToolOutcomeEvent;
use crate::telemetry::ToolTelemetry;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Tool routing and execution errors.
///
/// # Invariants
/// - [`ToolError::InvalidParams`] messages are safe to return to MCP clients.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not registered.
    #[error("unknown tool")]
    UnknownTool,
    /// Tool arguments failed schema or business validation.
    #[error("{0}")]
    InvalidParams(String),
    /// Provider credentials were rejected.
    #[error("unauthenticated")]
    Unauthenticated,
    /// Provider denied access to the endpoint.
    #[error("unauthorized")]
    Unauthorized,
    /// Internal failure during routing or submission.
    #[error("internal error: {0}")]
    Internal(String),
    /// Result serialization failed.
    #[error("serialization failed")]
    Serialization,
}

impl ToolError {
    /// Returns a normalized label for telemetry.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool => "unknown_tool",
            Self::InvalidParams(_) => "invalid_params",
            Self::Unauthenticated => "unauthenticated",
            Self::Unauthorized => "unauthorized",
            Self::Internal(_) => "internal",
            Self::Serialization => "serialization",
        }
    }
}

impl From<OrdError> for ToolError {
    fn from(error: OrdError) -> Self {
        match error {
            OrdError::Validation(message) | OrdError::Rejected(message) => {
                Self::InvalidParams(message)
            }
            OrdError::Authentication => Self::Unauthenticated,
            OrdError::Authorization => Self::Unauthorized,
            OrdError::Configuration(message) | OrdError::Transport(message) => {
                Self::Internal(message)
            }
            OrdError::UnexpectedStatus(status) => {
                Self::Internal(format!("provider returned unexpected status {status}"))
            }
        }
    }
}

impl From<ValidationError> for ToolError {
    fn from(error: ValidationError) -> Self {
        Self::InvalidParams(error.to_string())
    }
}

// ============================================================================
// SECTION: Tool Parameters
// ============================================================================

/// Arguments accepted by `add_counterparty`.
#[derive(Debug, Deserialize)]
struct AddCounterpartyParams {
    /// Person or organization name.
    name: String,
    /// Roles the counterparty plays.
    roles: Vec<Role>,
    /// Legal classification of the counterparty.
    #[serde(rename = "type")]
    counterparty_type: CounterpartyType,
    /// Tax identification number.
    inn: String,
}

/// Arguments accepted by `add_contract`.
#[derive(Debug, Deserialize)]
struct AddContractParams {
    /// External identifier of the client.
    client_external_id: ExternalId,
    /// External identifier of the contractor.
    contractor_external_id: ExternalId,
    /// Subject matter of the contract.
    subject_type: SubjectType,
    /// Conclusion date; defaults to the current UTC day.
    date: Option<String>,
}

/// Arguments accepted by `add_advertising`.
#[derive(Debug, Deserialize)]
struct AddAdvertisingParams {
    /// Advertising category codes.
    kktus: Vec<String>,
    /// Creative text variants.
    texts: Vec<String>,
    /// External identifiers of the originating contracts.
    contract_external_ids: Vec<ExternalId>,
}

/// Arguments accepted by `add_act`.
#[derive(Debug, Deserialize)]
struct AddActParams {
    /// External identifier of the contract the act belongs to.
    contract_external_id: ExternalId,
    /// Act issue date.
    date_act: String,
    /// Period start date.
    date_start: String,
    /// Period end date.
    date_end: String,
    /// Amount excluding VAT, kept as a JSON number to avoid float drift.
    excluding_vat: Number,
    /// VAT rate in percent.
    vat_rate: u8,
    /// Role of the client party.
    client_role: Role,
    /// Role of the contractor party.
    contractor_role: Role,
}

// ============================================================================
// SECTION: Tool Router
// ============================================================================

/// Routes tool calls through validation to the configured provider.
///
/// # Invariants
/// - One compiled validator exists per registered tool.
/// - Every call reports a terminal outcome to the telemetry sink.
pub struct ToolRouter {
    /// Registry provider receiving validated submissions.
    provider: Arc<dyn OrdProvider>,
    /// Telemetry sink for progress and outcomes.
    telemetry: Arc<dyn ToolTelemetry>,
    /// Compiled input validators keyed by tool.
    validators: BTreeMap<ToolName, Validator>,
    /// Configured counterparty name length limit.
    max_name_length: usize,
}

impl ToolRouter {
    /// Builds a router with compiled input validators for every tool.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Internal`] when a contract schema fails to
    /// compile.
    pub fn new(
        provider: Arc<dyn OrdProvider>,
        telemetry: Arc<dyn ToolTelemetry>,
        max_name_length: usize,
    ) -> Result<Self, ToolError> {
        let mut validators = BTreeMap::new();
        for contract in tool_contracts() {
            validators.insert(contract.name, compile_schema(&contract.input_schema)?);
        }
        Ok(Self {
            provider,
            telemetry,
            validators,
            max_name_length,
        })
    }

    /// Returns the tool definitions for MCP tool listing.
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        tool_definitions()
    }

    /// Handles one tool call end to end.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] when the tool is unknown, the arguments fail
    /// validation, or the provider submission fails.
    pub async fn handle_tool_call(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let Some(tool) = ToolName::parse(name) else {
            return Err(ToolError::UnknownTool);
        };
        let attributes = telemetry_attributes(tool, &arguments);
        let result = self.dispatch(tool, arguments).await;
        match &result {
            Ok(value) => self.telemetry.outcome(ToolOutcomeEvent {
                tool,
                outcome: ToolOutcome::Ok,
                error_kind: None,
                result_id: result_id(tool, value),
                attributes,
            }),
            Err(error) => self.telemetry.outcome(ToolOutcomeEvent {
                tool,
                outcome: ToolOutcome::Error,
                error_kind: Some(error.kind()),
                result_id: None,
                attributes,
            }),
        }
        result
    }

    /// Validates arguments against the tool schema and dispatches the call.
    async fn dispatch(&self, tool: ToolName, arguments: Value) -> Result<Value, ToolError> {
        self.validate_input(tool, &arguments)?;
        self.telemetry.progress(tool, 0, PROGRESS_TOTAL);
        match tool {
            ToolName::AddCounterparty => self.add_counterparty(arguments).await,
            ToolName::AddContract => self.add_contract(arguments).await,
            ToolName::AddAdvertising => self.add_advertising(arguments).await,
            ToolName::AddAct => self.add_act(arguments).await,
        }
    }

    /// Applies the compiled schema validator for a tool.
    fn validate_input(&self, tool: ToolName, payload: &Value) -> Result<(), ToolError> {
        let validator = self
            .validators
            .get(&tool)
            .ok_or_else(|| ToolError::Internal("tool validator missing".to_string()))?;
        validator.validate(payload).map_err(|error| ToolError::InvalidParams(error.to_string()))
    }

    /// Registers a counterparty.
    async fn add_counterparty(&self, arguments: Value) -> Result<Value, ToolError> {
        let params: AddCounterpartyParams = decode(arguments)?;
        check_counterparty_name(&params.name, self.max_name_length)?;
        let request = CounterpartyRequest {
            name: params.name,
            roles: params.roles,
            juridical_details: JuridicalDetails {
                counterparty_type: params.counterparty_type,
                inn: params.inn,
            },
        };
        self.telemetry.progress(ToolName::AddCounterparty, 40, PROGRESS_TOTAL);
        let created = self.provider.create_counterparty(&request).await?;
        self.telemetry.progress(ToolName::AddCounterparty, PROGRESS_TOTAL, PROGRESS_TOTAL);
        serialize(&created)
    }

    /// Registers a service contract.
    async fn add_contract(&self, arguments: Value) -> Result<Value, ToolError> {
        let params: AddContractParams = decode(arguments)?;
        let date = match params.date {
            Some(date) => date,
            None => today_iso()?,
        };
        let request = ContractRequest {
            contract_type: ContractType::Service,
            client_external_id: params.client_external_id,
            contractor_external_id: params.contractor_external_id,
            date,
            subject_type: params.subject_type,
        };
        self.telemetry.progress(ToolName::AddContract, 40, PROGRESS_TOTAL);
        let created = self.provider.create_contract(&request).await?;
        self.telemetry.progress(ToolName::AddContract, PROGRESS_TOTAL, PROGRESS_TOTAL);
        serialize(&created)
    }

    /// Registers an advertising creative.
    async fn add_advertising(&self, arguments: Value) -> Result<Value, ToolError> {
        let params: AddAdvertisingParams = decode(arguments)?;
        let request = CreativeRequest {
            kktus: params.kktus,
            form: CreativeForm::TextBlock,
            texts: params.texts,
            contract_external_ids: params.contract_external_ids,
        };
        self.telemetry.progress(ToolName::AddAdvertising, 40, PROGRESS_TOTAL);
        let created = self.provider.create_advertising(&request).await?;
        self.telemetry.progress(ToolName::AddAdvertising, PROGRESS_TOTAL, PROGRESS_TOTAL);
        serialize(&created)
    }

    /// Registers an act for a contract period.
    async fn add_act(&self, arguments: Value) -> Result<Value, ToolError> {
        let params: AddActParams = decode(arguments)?;
        let rate = VatRate::from_percent(params.vat_rate)
            .map_err(|error| ToolError::InvalidParams(error.to_string()))?;
        let excluding_vat = BigDecimal::from_str(&params.excluding_vat.to_string())
            .map_err(|_| ToolError::InvalidParams("excluding_vat must be a decimal number".to_string()))?;
        let amount = build_amount(&excluding_vat, rate)
            .map_err(|error| ToolError::InvalidParams(error.to_string()))?;
        let request = ActRequest {
            contract_external_id: params.contract_external_id,
            date_act: params.date_act,
            date_start: params.date_start,
            date_end: params.date_end,
            amount,
            client_role: params.client_role,
            contractor_role: params.contractor_role,
        };
        self.telemetry.progress(ToolName::AddAct, 40, PROGRESS_TOTAL);
        let created = self.provider.create_act(&request).await?;
        self.telemetry.progress(ToolName::AddAct, PROGRESS_TOTAL, PROGRESS_TOTAL);
        serialize(&created)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Compiles one contract schema under draft 2020-12.
fn compile_schema(schema: &Value) -> Result<Validator, ToolError> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map_err(|_| ToolError::Internal("tool schema compilation failed".to_string()))
}

/// Decodes tool arguments into a typed parameter struct.
fn decode<T: for<'de> Deserialize<'de>>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|error| ToolError::InvalidParams(error.to_string()))
}

/// Serializes a tool result into a JSON value.
fn serialize<T: Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|_| ToolError::Serialization)
}

/// Result key carrying the created entity identifier for each tool.
const fn result_id_key(tool: ToolName) -> &'static str {
    match tool {
        ToolName::AddCounterparty => "counterparty_id",
        ToolName::AddContract => "contract_id",
        ToolName::AddAdvertising => "creative_id",
        ToolName::AddAct => "act_id",
    }
}

/// Extracts the created entity identifier from a serialized result.
fn result_id(tool: ToolName, result: &Value) -> Option<String> {
    result.get(result_id_key(tool)).and_then(Value::as_str).map(str::to_string)
}

/// Input fields safe to mirror into telemetry; free-text fields stay out.
const fn attribute_fields(tool: ToolName) -> &'static [&'static str] {
    match tool {
        ToolName::AddCounterparty => &["roles", "type", "inn"],
        ToolName::AddContract => {
            &["client_external_id", "contractor_external_id", "subject_type", "date"]
        }
        ToolName::AddAdvertising => &["kktus", "contract_external_ids"],
        ToolName::AddAct => &[
            "contract_external_id",
            "date_act",
            "date_start",
            "date_end",
            "excluding_vat",
            "vat_rate",
            "client_role",
            "contractor_role",
        ],
    }
}

/// Collects the sanitized input attributes present in the call arguments.
fn telemetry_attributes(tool: ToolName, arguments: &Value) -> Vec<(&'static str, String)> {
    attribute_fields(tool)
        .iter()
        .filter_map(|field| arguments.get(field).map(|value| (*field, render_attribute(value))))
        .collect()
}

/// Renders one attribute value without JSON string quoting.
fn render_attribute(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Renders the current UTC day as `YYYY-MM-DD`.
fn today_iso() -> Result<String, ToolError> {
    let format = format_description!("[year]-[month]-[day]");
    OffsetDateTime::now_utc()
        .date()
        .format(&format)
        .map_err(|_| ToolError::Internal("date formatting failed".to_string()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
