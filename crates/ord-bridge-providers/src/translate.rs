// crates/ord-bridge-providers/src/translate.rs
// ============================================================================
// Module: Provider Error Translation
// Description: Translates ORD HTTP 400 error bodies into readable messages.
// Purpose: Surface provider rejection details without leaking raw payloads.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The ORD API reports request rejections as a JSON body with a top-level
//! `error`/`message` pair and an `errors` array of per-field detail records.
//! This module renders that body into one human-readable message with a
//! bullet line per detail. Malformed or non-JSON bodies fall back to the
//! caller-supplied operation message; parsed bodies without a summary use a
//! fixed default instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Placeholder when a detail record names no field.
const UNKNOWN_FIELD: &str = "unknown_field";
/// Placeholder when a detail record carries no error code.
const UNKNOWN_CODE: &str = "unknown_code";
/// Summary used when the body names no error, and placeholder for detail
/// records without a message.
const DEFAULT_DETAIL: &str = "data validation failed";

// ============================================================================
// SECTION: Wire Shapes
// ============================================================================

/// Top-level ORD rejection body.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    /// Primary error summary.
    error: Option<String>,
    /// Alternative error summary used by some endpoints.
    message: Option<String>,
    /// Per-field detail records.
    #[serde(default)]
    errors: Vec<RejectionDetail>,
}

/// One per-field rejection detail.
#[derive(Debug, Deserialize)]
struct RejectionDetail {
    /// Body field the detail refers to.
    field: Option<String>,
    /// Query parameter the detail refers to.
    query_param: Option<String>,
    /// Path parameter the detail refers to.
    path_param: Option<String>,
    /// Machine-readable error code.
    error_code: Option<String>,
    /// Human-readable detail message.
    message: Option<String>,
    /// Offending values, when reported.
    #[serde(default)]
    values: Vec<Value>,
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates an ORD HTTP 400 body into a readable message.
///
/// Returns `fallback` verbatim only when the body is not a JSON object. For
/// parsed bodies the summary line prefers `error` over `message` over the
/// fixed default; detail lines are appended one per record.
#[must_use]
pub fn translate_bad_request(body: &str, fallback: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<RejectionBody>(body) else {
        return fallback.to_string();
    };
    let base = parsed
        .error
        .filter(|text| !text.is_empty())
        .or(parsed.message.filter(|text| !text.is_empty()))
        .unwrap_or_else(|| DEFAULT_DETAIL.to_string());
    let details: Vec<String> = parsed.errors.iter().map(render_detail).collect();
    if details.is_empty() {
        base
    } else {
        format!("{base}:\n{}", details.join("\n"))
    }
}

/// Renders one detail record as a bullet line.
fn render_detail(detail: &RejectionDetail) -> String {
    let field = detail
        .field
        .as_deref()
        .or(detail.query_param.as_deref())
        .or(detail.path_param.as_deref())
        .unwrap_or(UNKNOWN_FIELD);
    let message = detail.message.as_deref().unwrap_or(DEFAULT_DETAIL);
    let code = detail.error_code.as_deref().unwrap_or(UNKNOWN_CODE);
    let mut line = format!("\u{2022} [{field}] {message} ({code})");
    if let Some(value) = detail.values.first() {
        line.push_str(&format!(" Value: {}", render_value(value)));
    }
    line
}

/// Renders an offending value without JSON string quoting.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
