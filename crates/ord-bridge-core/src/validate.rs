// crates/ord-bridge-core/src/validate.rs
// ============================================================================
// Module: Business Validators
// Description: Cross-field validation rules for ORD submissions.
// Purpose: Reject incoherent requests before any network call is made.
// Dependencies: time, thiserror
// ============================================================================

//! ## Overview
//! Pure cross-field checks applied after schema validation and before any
//! provider submission. Each rule fails with a distinct structured variant so
//! callers can report exactly what was wrong; format failures never mask
//! range or ordering failures. The current date is always caller-supplied so
//! these functions stay deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::Date;
use time::macros::date;
use time::macros::format_description;

use crate::entities::Role;
use crate::identifiers::ExternalId;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Earliest date the registry accepts for act fields.
pub const MIN_ACT_DATE: Date = date!(1991 - 01 - 01);
/// Maximum combined length of creative texts, in characters.
pub const MAX_CREATIVE_TEXT_CHARS: usize = 65_000;

// ============================================================================
// SECTION: Date Parsing
// ============================================================================

/// Parses a strict `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ValidationError::BadDateFormat`] naming `field` when the value
/// does not parse.
pub fn parse_iso_date(field: &'static str, value: &str) -> Result<Date, ValidationError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value, &format).map_err(|_| ValidationError::BadDateFormat {
        field,
    })
}

// ============================================================================
// SECTION: Validators
// ============================================================================

/// Checks the counterparty name against the configured length limit.
///
/// # Errors
///
/// Returns [`ValidationError::NameTooLong`] when the name exceeds `max_len`
/// characters.
pub fn check_counterparty_name(name: &str, max_len: usize) -> Result<(), ValidationError> {
    let actual = name.chars().count();
    if actual > max_len {
        return Err(ValidationError::NameTooLong {
            max: max_len,
            actual,
        });
    }
    Ok(())
}

/// Checks that a contract date is a well-formed `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`ValidationError::BadDateFormat`] when the value does not parse.
pub fn check_contract_date(date: &str) -> Result<(), ValidationError> {
    parse_iso_date("date", date).map(|_| ())
}

/// Checks that the client and contractor of a contract are distinct.
///
/// # Errors
///
/// Returns [`ValidationError::IdenticalParties`] when both sides carry the
/// same external identifier.
pub fn check_distinct_parties(
    client: &ExternalId,
    contractor: &ExternalId,
) -> Result<(), ValidationError> {
    if client == contractor {
        return Err(ValidationError::IdenticalParties);
    }
    Ok(())
}

/// Checks the combined length of creative texts against the registry budget.
///
/// # Errors
///
/// Returns [`ValidationError::TextsTooLong`] when the combined character
/// count exceeds [`MAX_CREATIVE_TEXT_CHARS`].
pub fn check_creative_texts(texts: &[String]) -> Result<(), ValidationError> {
    let total: usize = texts.iter().map(|text| text.chars().count()).sum();
    if total > MAX_CREATIVE_TEXT_CHARS {
        return Err(ValidationError::TextsTooLong {
            total,
            max: MAX_CREATIVE_TEXT_CHARS,
        });
    }
    Ok(())
}

/// Checks the coherence of act dates against the supplied current date.
///
/// All three fields must parse, none may fall before [`MIN_ACT_DATE`], the
/// period must not be inverted, and the act date must not be after `today`.
///
/// # Errors
///
/// Returns the first failing rule as a [`ValidationError`].
pub fn check_act_dates(
    date_act: &str,
    date_start: &str,
    date_end: &str,
    today: Date,
) -> Result<(), ValidationError> {
    let act = parse_iso_date("date_act", date_act)?;
    let start = parse_iso_date("date_start", date_start)?;
    let end = parse_iso_date("date_end", date_end)?;
    for (field, value) in [("date_act", act), ("date_start", start), ("date_end", end)] {
        if value < MIN_ACT_DATE {
            return Err(ValidationError::DateBeforeMinimum {
                field,
            });
        }
    }
    if start > end {
        return Err(ValidationError::PeriodInverted);
    }
    if act > today {
        return Err(ValidationError::ActDateInFuture);
    }
    Ok(())
}

/// Checks that the act client role is acceptable to the registry.
///
/// # Errors
///
/// Returns [`ValidationError::ClientRoleAdvertiser`] when the client party is
/// an advertiser; the registry rejects acts ordered by the advertiser itself.
pub fn check_act_roles(client_role: Role) -> Result<(), ValidationError> {
    if client_role == Role::Advertiser {
        return Err(ValidationError::ClientRoleAdvertiser);
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Business-rule validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Counterparty name exceeds the configured length limit.
    #[error("counterparty name is too long: {actual} characters (maximum {max})")]
    NameTooLong {
        /// Configured maximum length.
        max: usize,
        /// Actual name length.
        actual: usize,
    },
    /// A date field is not a well-formed `YYYY-MM-DD` string.
    #[error("{field} must use the YYYY-MM-DD format")]
    BadDateFormat {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Contract client and contractor share the same external identifier.
    #[error("client_external_id and contractor_external_id must differ")]
    IdenticalParties,
    /// Combined creative text length exceeds the registry budget.
    #[error("combined creative text length {total} exceeds {max} characters")]
    TextsTooLong {
        /// Combined character count.
        total: usize,
        /// Maximum allowed character count.
        max: usize,
    },
    /// A date field precedes the registry minimum of 1991-01-01.
    #[error("{field} must not be before 1991-01-01")]
    DateBeforeMinimum {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The act period start falls after the period end.
    #[error("date_start must not be after date_end")]
    PeriodInverted,
    /// The act date lies in the future relative to the supplied current date.
    #[error("date_act must not be in the future")]
    ActDateInFuture,
    /// Acts ordered by the advertiser itself are not supported.
    #[error("acts with an advertiser client role are not supported")]
    ClientRoleAdvertiser,
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
        reason = "Test-only validator assertions."
    )]

    use time::macros::date;

    use super::MAX_CREATIVE_TEXT_CHARS;
    use super::ValidationError;
    use super::check_act_dates;
    use super::check_act_roles;
    use super::check_contract_date;
    use super::check_counterparty_name;
    use super::check_creative_texts;
    use super::check_distinct_parties;
    use crate::entities::Role;
    use crate::identifiers::ExternalId;

    #[test]
    fn name_within_limit_passes() {
        assert!(check_counterparty_name("OOO Sever", 255).is_ok());
    }

    #[test]
    fn name_over_limit_reports_lengths() {
        let err = check_counterparty_name(&"x".repeat(256), 255).expect_err("too long");
        assert_eq!(
            err,
            ValidationError::NameTooLong {
                max: 255,
                actual: 256,
            }
        );
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        // Ten Cyrillic characters occupy twenty bytes.
        assert!(check_counterparty_name(&"ы".repeat(10), 10).is_ok());
    }

    #[test]
    fn contract_date_format_is_strict() {
        assert!(check_contract_date("2026-08-25").is_ok());
        for bad in ["2026/08/25", "25-08-2026", "2026-8-25", "not-a-date", ""] {
            assert_eq!(
                check_contract_date(bad).expect_err("bad format"),
                ValidationError::BadDateFormat {
                    field: "date",
                }
            );
        }
    }

    #[test]
    fn identical_parties_are_rejected() {
        let id = ExternalId::new("aaaaaaaaaaa-bbbbbbbb");
        assert_eq!(
            check_distinct_parties(&id, &id.clone()).expect_err("identical"),
            ValidationError::IdenticalParties
        );
        let other = ExternalId::new("ccccccccccc-dddddddd");
        assert!(check_distinct_parties(&id, &other).is_ok());
    }

    #[test]
    fn text_budget_counts_all_entries() {
        let texts = vec!["a".repeat(40_000), "b".repeat(25_000)];
        assert!(check_creative_texts(&texts).is_ok());
        let texts = vec!["a".repeat(40_000), "b".repeat(25_001)];
        let err = check_creative_texts(&texts).expect_err("over budget");
        assert_eq!(
            err,
            ValidationError::TextsTooLong {
                total: 65_001,
                max: MAX_CREATIVE_TEXT_CHARS,
            }
        );
    }

    #[test]
    fn act_dates_accept_coherent_period() {
        let today = date!(2026 - 08 - 25);
        assert!(check_act_dates("2026-08-20", "2026-08-01", "2026-08-20", today).is_ok());
    }

    #[test]
    fn act_date_format_failure_names_field() {
        let today = date!(2026 - 08 - 25);
        let err = check_act_dates("2026-08-20", "bad", "2026-08-20", today).expect_err("format");
        assert_eq!(
            err,
            ValidationError::BadDateFormat {
                field: "date_start",
            }
        );
    }

    #[test]
    fn act_dates_before_minimum_are_rejected() {
        let today = date!(2026 - 08 - 25);
        let err =
            check_act_dates("2026-08-20", "1990-12-31", "2026-08-20", today).expect_err("minimum");
        assert_eq!(
            err,
            ValidationError::DateBeforeMinimum {
                field: "date_start",
            }
        );
    }

    #[test]
    fn inverted_period_is_rejected() {
        let today = date!(2026 - 08 - 25);
        let err =
            check_act_dates("2026-08-20", "2026-08-21", "2026-08-20", today).expect_err("period");
        assert_eq!(err, ValidationError::PeriodInverted);
    }

    #[test]
    fn future_act_date_is_rejected_and_today_is_accepted() {
        let today = date!(2026 - 08 - 25);
        let err =
            check_act_dates("2026-08-26", "2026-08-01", "2026-08-31", today).expect_err("future");
        assert_eq!(err, ValidationError::ActDateInFuture);
        assert!(check_act_dates("2026-08-25", "2026-08-01", "2026-08-31", today).is_ok());
    }

    #[test]
    fn advertiser_client_role_is_rejected() {
        assert_eq!(
            check_act_roles(Role::Advertiser).expect_err("advertiser"),
            ValidationError::ClientRoleAdvertiser
        );
        for role in [Role::Agency, Role::Ors, Role::Publisher] {
            assert!(check_act_roles(role).is_ok());
        }
    }
}
