// crates/ord-bridge-core/src/lib.rs
// ============================================================================
// Module: ORD Bridge Core
// Description: Domain model for advertising-registry (ORD) submissions.
// Purpose: Provide entities, identifiers, amount math, and business validators.
// Dependencies: serde, bigdecimal, time, rand
// ============================================================================

//! ## Overview
//! This crate defines the domain model shared by the ORD Bridge tool server:
//! counterparty/contract/creative/act request shapes, client-side external
//! identifiers, decimal-safe VAT amount construction, and the cross-field
//! business validators that run before any network submission.
//! Invariants:
//! - Monetary math uses [`bigdecimal::BigDecimal`]; floats never enter amount
//!   computation.
//! - Validators are pure; the current date is always caller-supplied.
//! - Validation failures surface before any network call.
//!
//! Security posture: tool inputs are untrusted and must be validated.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod amount;
pub mod entities;
pub mod identifiers;
pub mod tooling;
pub mod validate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use amount::Amount;
pub use amount::AmountError;
pub use amount::VatRate;
pub use amount::build_amount;
pub use entities::ActCreated;
pub use entities::ActRequest;
pub use entities::ContractCreated;
pub use entities::ContractRequest;
pub use entities::ContractType;
pub use entities::CounterpartyCreated;
pub use entities::CounterpartyRequest;
pub use entities::CounterpartyType;
pub use entities::CreativeCreated;
pub use entities::CreativeForm;
pub use entities::CreativeRequest;
pub use entities::JuridicalDetails;
pub use entities::Role;
pub use entities::SubjectType;
pub use identifiers::Erid;
pub use identifiers::ExternalId;
pub use tooling::ToolName;
pub use validate::MAX_CREATIVE_TEXT_CHARS;
pub use validate::MIN_ACT_DATE;
pub use validate::ValidationError;
pub use validate::check_act_dates;
pub use validate::check_act_roles;
pub use validate::check_contract_date;
pub use validate::check_counterparty_name;
pub use validate::check_creative_texts;
pub use validate::check_distinct_parties;
pub use validate::parse_iso_date;
