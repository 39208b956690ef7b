// crates/ord-bridge-core/src/entities.rs
// ============================================================================
// Module: ORD Entities
// Description: Request and result shapes for ORD registry operations.
// Purpose: Provide typed domain entities with stable serde wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the four ORD entity families handled by the bridge:
//! counterparties, contracts, advertising creatives, and acts. Request shapes
//! carry caller-supplied data after schema validation; result shapes carry the
//! client-generated external identifier under a per-entity wire key
//! (`counterparty_id`, `contract_id`, `creative_id`, `act_id`) and the
//! provider HTTP status, plus the provider-assigned erid for creatives.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::amount::Amount;
use crate::identifiers::Erid;
use crate::identifiers::ExternalId;

// ============================================================================
// SECTION: Enumerations
// ============================================================================

/// Role a counterparty plays in an advertising relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Orders advertising (the advertiser).
    Advertiser,
    /// Advertising agency acting for a client.
    Agency,
    /// Operator of an advertising system.
    Ors,
    /// Publisher distributing advertising.
    Publisher,
}

impl Role {
    /// Returns the stable wire label for the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Advertiser => "advertiser",
            Self::Agency => "agency",
            Self::Ors => "ors",
            Self::Publisher => "publisher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Legal classification of a counterparty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterpartyType {
    /// Natural person.
    Physical,
    /// Legal entity.
    Juridical,
    /// Individual entrepreneur.
    Ip,
    /// Foreign natural person.
    ForeignPhysical,
    /// Foreign legal entity.
    ForeignJuridical,
}

/// Contract type accepted by the registry.
///
/// # Invariants
/// - Only service contracts are supported; the wire form is fixed to `service`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Service contract.
    Service,
}

/// Subject matter of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    /// Representation of the client.
    Representation,
    /// Organization of advertising distribution.
    OrgDistribution,
    /// Mediation between parties.
    Mediation,
    /// Distribution of advertising.
    Distribution,
    /// Other subject matter.
    Other,
}

/// Form of an advertising creative.
///
/// # Invariants
/// - Only text-block creatives are supported; the wire form is fixed to
///   `text_block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeForm {
    /// Text-only creative.
    TextBlock,
}

// ============================================================================
// SECTION: Request Shapes
// ============================================================================

/// Juridical details attached to a counterparty registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuridicalDetails {
    /// Legal classification of the counterparty.
    #[serde(rename = "type")]
    pub counterparty_type: CounterpartyType,
    /// Tax identification number (10-12 digits).
    pub inn: String,
}

/// Counterparty registration request.
///
/// # Invariants
/// - `name` length is bounded by the configured limit before submission.
/// - `roles` is non-empty; membership is enforced at the schema boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyRequest {
    /// Person or organization name.
    pub name: String,
    /// Roles the counterparty plays.
    pub roles: Vec<Role>,
    /// Juridical details (type and tax number).
    pub juridical_details: JuridicalDetails,
}

/// Contract registration request.
///
/// # Invariants
/// - `client_external_id` differs from `contractor_external_id`.
/// - `date` is an ISO `YYYY-MM-DD` string; format is checked before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRequest {
    /// Contract type (always `service`).
    #[serde(rename = "type")]
    pub contract_type: ContractType,
    /// External identifier of the client counterparty.
    pub client_external_id: ExternalId,
    /// External identifier of the contractor counterparty.
    pub contractor_external_id: ExternalId,
    /// Conclusion date as `YYYY-MM-DD`.
    pub date: String,
    /// Subject matter of the contract.
    pub subject_type: SubjectType,
}

/// Advertising creative registration request.
///
/// # Invariants
/// - `kktus` carries 1-16 category codes shaped `D.D.D`.
/// - Combined `texts` length stays within [`crate::validate::MAX_CREATIVE_TEXT_CHARS`].
/// - `contract_external_ids` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeRequest {
    /// Advertising category codes.
    pub kktus: Vec<String>,
    /// Creative form (always `text_block`).
    pub form: CreativeForm,
    /// Creative text variants.
    pub texts: Vec<String>,
    /// External identifiers of the originating contracts.
    pub contract_external_ids: Vec<ExternalId>,
}

/// Act (invoice) registration request.
///
/// # Invariants
/// - Dates are ISO `YYYY-MM-DD`; coherence is checked before submission.
/// - `client_role` is never [`Role::Advertiser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActRequest {
    /// External identifier of the contract the act belongs to.
    pub contract_external_id: ExternalId,
    /// Act issue date as `YYYY-MM-DD`; the invoice endpoint expects `date`.
    #[serde(rename = "date")]
    pub date_act: String,
    /// Period start date as `YYYY-MM-DD`.
    pub date_start: String,
    /// Period end date as `YYYY-MM-DD`.
    pub date_end: String,
    /// Monetary breakdown for the act period.
    pub amount: Amount,
    /// Role of the client party in the contract.
    pub client_role: Role,
    /// Role of the contractor party in the contract.
    pub contractor_role: Role,
}

// ============================================================================
// SECTION: Result Shapes
// ============================================================================

/// Result of a successful counterparty registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyCreated {
    /// Client-generated external identifier assigned to the counterparty.
    #[serde(rename = "counterparty_id")]
    pub external_id: ExternalId,
    /// HTTP status returned by the provider.
    pub status_code: u16,
}

/// Result of a successful contract registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCreated {
    /// Client-generated external identifier assigned to the contract.
    #[serde(rename = "contract_id")]
    pub external_id: ExternalId,
    /// HTTP status returned by the provider.
    pub status_code: u16,
}

/// Result of a successful creative registration.
///
/// # Invariants
/// - `erid` is absent only when the provider response omitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeCreated {
    /// Provider-assigned advertising token.
    pub erid: Option<Erid>,
    /// Client-generated external identifier assigned to the creative.
    #[serde(rename = "creative_id")]
    pub external_id: ExternalId,
    /// HTTP status returned by the provider.
    pub status_code: u16,
}

/// Result of a successful act registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActCreated {
    /// Client-generated external identifier assigned to the act.
    #[serde(rename = "act_id")]
    pub external_id: ExternalId,
    /// HTTP status returned by the provider.
    pub status_code: u16,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
