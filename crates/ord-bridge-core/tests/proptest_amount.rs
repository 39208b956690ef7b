//! Amount builder property-based tests.
//!
//! ## Purpose
//! These tests exercise the VAT breakdown arithmetic with randomized cent
//! amounts and rates. They are designed to prove the additive invariant and
//! the fixed two-decimal rendering without enumerating cases by hand.
//!
//! ## What is covered
//! - `excluding_vat + vat == including_vat` as exact decimals.
//! - Monetary strings always carry exactly two fraction digits.
//! - Unsupported percent values always fail construction.
//!
//! ## What is intentionally out of scope
//! - Wire nesting of the breakdown (covered by unit tests).
// crates/ord-bridge-core/tests/proptest_amount.rs
// ============================================================================
// Module: Amount Property-Based Tests
// Description: Randomized checks for VAT breakdown arithmetic.
// Purpose: Ensure decimal invariants hold for arbitrary cent amounts.
// ============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::str::FromStr;

use bigdecimal::BigDecimal;
use ord_bridge_core::VatRate;
use ord_bridge_core::build_amount;
use proptest::prelude::*;

/// Builds an exact decimal amount from an integer number of cents.
fn from_cents(cents: u64) -> BigDecimal {
    BigDecimal::new(i64::try_from(cents).unwrap().into(), 2)
}

/// Strategy over the supported VAT rates.
fn vat_rate() -> impl Strategy<Value = VatRate> {
    prop_oneof![
        Just(VatRate::Zero),
        Just(VatRate::Five),
        Just(VatRate::Seven),
        Just(VatRate::Ten),
        Just(VatRate::Twenty),
    ]
}

proptest! {
    #[test]
    fn breakdown_is_additive(cents in 0u64..1_000_000_000, rate in vat_rate()) {
        let amount = build_amount(&from_cents(cents), rate).unwrap();
        let excluding = BigDecimal::from_str(&amount.services.excluding_vat).unwrap();
        let vat = BigDecimal::from_str(&amount.services.vat).unwrap();
        let including = BigDecimal::from_str(&amount.services.including_vat).unwrap();
        prop_assert_eq!(&excluding + &vat, including);
    }

    #[test]
    fn monetary_fields_render_two_decimals(cents in 0u64..1_000_000_000, rate in vat_rate()) {
        let amount = build_amount(&from_cents(cents), rate).unwrap();
        for field in [
            &amount.services.excluding_vat,
            &amount.services.vat,
            &amount.services.including_vat,
        ] {
            let (_, fraction) = field.split_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 2);
        }
    }

    #[test]
    fn zero_rate_never_adds_vat(cents in 0u64..1_000_000_000) {
        let amount = build_amount(&from_cents(cents), VatRate::Zero).unwrap();
        prop_assert_eq!(amount.services.vat.as_str(), "0.00");
        prop_assert_eq!(amount.services.excluding_vat, amount.services.including_vat);
    }

    #[test]
    fn unsupported_percent_always_fails(percent in 0u8..=100) {
        let result = VatRate::from_percent(percent);
        if matches!(percent, 0 | 5 | 7 | 10 | 20) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }
}
