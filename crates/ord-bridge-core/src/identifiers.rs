// crates/ord-bridge-core/src/identifiers.rs
// ============================================================================
// Module: ORD Bridge Identifiers
// Description: Opaque identifiers for ORD entities with stable wire forms.
// Purpose: Provide strongly typed external identifiers and client-side generation.
// Dependencies: serde, rand
// ============================================================================

//! ## Overview
//! This module defines the identifier types used across ORD Bridge. External
//! identifiers are assigned client-side before submission and become the
//! resource path segment of the provider `PUT`. Erids are assigned by the
//! provider when a creative is registered and are never generated locally.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Client-generated external identifier for an ORD entity.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
/// - Generated values match `[0-9a-f]{11}-[0-9a-f]{8}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalId(String);

impl ExternalId {
    /// Creates an external identifier from an existing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh external identifier.
    ///
    /// A random 128-bit value is rendered as 32 lowercase hex characters; the
    /// first 11 and the following 8 are joined with a dash. Values are
    /// effectively unique but never checked for collisions; the provider
    /// treats a repeated identifier as an update of the same resource.
    #[must_use]
    pub fn generate() -> Self {
        let hex = format!("{:032x}", rand::random::<u128>());
        Self(format!("{}-{}", &hex[..11], &hex[11..19]))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ExternalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ExternalId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Provider-assigned advertising token (erid) for a registered creative.
///
/// # Invariants
/// - Opaque UTF-8 string; assigned by the provider, never generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Erid(String);

impl Erid {
    /// Creates an erid from a provider response value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the erid as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Erid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Erid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Erid {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
