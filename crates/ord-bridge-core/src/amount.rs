// crates/ord-bridge-core/src/amount.rs
// ============================================================================
// Module: Act Amount Builder
// Description: Decimal-safe VAT breakdown construction for acts.
// Purpose: Compute exact monetary amounts from a VAT-exclusive base and rate.
// Dependencies: bigdecimal, serde
// ============================================================================

//! ## Overview
//! Acts carry a monetary breakdown derived from a VAT-exclusive amount and a
//! VAT rate. The registry accepts a closed set of rates; all arithmetic is
//! exact base-10 decimal with rounding half away from zero at the cent. The
//! wire form nests the breakdown under a `services` object as required by the
//! provider invoice schema.

// ============================================================================
// SECTION: Imports
// ============================================================================

use bigdecimal::BigDecimal;
use bigdecimal::RoundingMode;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: VAT Rates
// ============================================================================

/// Supported VAT rates in percent.
///
/// # Invariants
/// - The set is closed; rates outside {0, 5, 7, 10, 20} are rejected at
///   construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VatRate {
    /// 0% VAT.
    Zero,
    /// 5% VAT.
    Five,
    /// 7% VAT.
    Seven,
    /// 10% VAT.
    Ten,
    /// 20% VAT.
    Twenty,
}

impl VatRate {
    /// Constructs a rate from its percent value.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::UnsupportedRate`] for any percent outside the
    /// supported set.
    pub const fn from_percent(percent: u8) -> Result<Self, AmountError> {
        match percent {
            0 => Ok(Self::Zero),
            5 => Ok(Self::Five),
            7 => Ok(Self::Seven),
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            other => Err(AmountError::UnsupportedRate(other)),
        }
    }

    /// Returns the percent value of the rate.
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::Five => 5,
            Self::Seven => 7,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }
}

// ============================================================================
// SECTION: Amount Shapes
// ============================================================================

/// Monetary breakdown for an act, nested under `services` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Per-service monetary breakdown.
    pub services: AmountServices,
}

/// VAT breakdown with monetary fields rendered to exactly two decimals.
///
/// # Invariants
/// - `excluding_vat + vat == including_vat` as exact decimals.
/// - All monetary strings carry exactly two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountServices {
    /// Amount excluding VAT.
    pub excluding_vat: String,
    /// VAT rate in percent, rendered as a string.
    pub vat_rate: String,
    /// VAT portion.
    pub vat: String,
    /// Amount including VAT.
    pub including_vat: String,
}

// ============================================================================
// SECTION: Amount Builder
// ============================================================================

/// Builds the act amount breakdown from a VAT-exclusive base and rate.
///
/// `vat = excluding_vat * rate / 100` and
/// `including_vat = excluding_vat + vat`, each quantized to two decimals
/// rounding half away from zero.
///
/// # Errors
///
/// Returns [`AmountError::NegativeAmount`] when `excluding_vat` is negative.
pub fn build_amount(excluding_vat: &BigDecimal, rate: VatRate) -> Result<Amount, AmountError> {
    if excluding_vat < &BigDecimal::from(0) {
        return Err(AmountError::NegativeAmount);
    }
    // percent * 10^-2 is the exact decimal rate multiplier.
    let multiplier = BigDecimal::new(i64::from(rate.percent()).into(), 2);
    let vat = excluding_vat * multiplier;
    let including_vat = excluding_vat + &vat;
    Ok(Amount {
        services: AmountServices {
            excluding_vat: render_cents(excluding_vat),
            vat_rate: rate.percent().to_string(),
            vat: render_cents(&vat),
            including_vat: render_cents(&including_vat),
        },
    })
}

/// Renders a decimal with exactly two fraction digits, half away from zero.
fn render_cents(value: &BigDecimal) -> String {
    value.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Amount construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The VAT rate is outside the supported set.
    #[error("unsupported vat rate: {0}; expected one of 0, 5, 7, 10, 20")]
    UnsupportedRate(u8),
    /// The VAT-exclusive amount is negative.
    #[error("amount excluding vat must be non-negative")]
    NegativeAmount,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
