// crates/ord-bridge-providers/tests/vk_provider_unit.rs
// ============================================================================
// Module: VK Provider Unit Tests
// Description: Focused tests for VK ORD submission and response handling.
// Purpose: Test wire shape, auth header, and status classification.
// ============================================================================

//! ## Overview
//! Unit-level tests for the VK provider against a local stub server:
//! - Request wire shape (method, path, bearer header, payload nesting)
//! - Response classification (2xx, 400 translated, 401, 403, unexpected)
//! - Erid extraction from creative responses
//! - Local validation short-circuiting before any request is sent
//!
//! Security posture: provider responses are treated as untrusted input.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::thread;

use bigdecimal::BigDecimal;
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
use ord_bridge_core::VatRate;
use ord_bridge_core::build_amount;
use ord_bridge_providers::OrdError;
use ord_bridge_providers::OrdProvider;
use ord_bridge_providers::VkProvider;
use ord_bridge_providers::VkProviderConfig;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Request details captured by the stub server.
struct Captured {
    method: String,
    url: String,
    authorization: Option<String>,
    body: serde_json::Value,
}

/// Serves exactly one request and responds with the given status and body.
fn serve_once(status: u16, body: &'static str) -> (String, thread::JoinHandle<Captured>) {
    let server = Server::http("127.0.0.1:0").expect("bind stub server");
    let addr = server.server_addr().to_ip().expect("stub address");
    let base_url = format!("http://{addr}");
    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("stub request");
        let mut raw_body = String::new();
        let _ = request.as_reader().read_to_string(&mut raw_body);
        let captured = Captured {
            method: request.method().to_string(),
            url: request.url().to_string(),
            authorization: request
                .headers()
                .iter()
                .find(|header| header.field.equiv("Authorization"))
                .map(|header| header.value.to_string()),
            body: serde_json::from_str(&raw_body).unwrap_or(serde_json::Value::Null),
        };
        let _ = request.respond(Response::from_string(body).with_status_code(status));
        captured
    });
    (base_url, handle)
}

/// Creates a provider pointed at the given stub base URL.
fn stub_provider(base_url: String) -> VkProvider {
    VkProvider::new(VkProviderConfig {
        base_url,
        api_key: "secret".to_string(),
        timeout_ms: 5_000,
    })
    .expect("provider")
}

fn counterparty_request() -> CounterpartyRequest {
    CounterpartyRequest {
        name: "OOO Sever".to_string(),
        roles: vec![Role::Agency],
        juridical_details: JuridicalDetails {
            counterparty_type: CounterpartyType::Juridical,
            inn: "7707083893".to_string(),
        },
    }
}

fn contract_request() -> ContractRequest {
    ContractRequest {
        contract_type: ContractType::Service,
        client_external_id: ExternalId::new("aaaaaaaaaaa-bbbbbbbb"),
        contractor_external_id: ExternalId::new("ccccccccccc-dddddddd"),
        date: "2020-01-01".to_string(),
        subject_type: SubjectType::Distribution,
    }
}

fn creative_request() -> CreativeRequest {
    CreativeRequest {
        kktus: vec!["1.1.1".to_string()],
        form: CreativeForm::TextBlock,
        texts: vec!["Autumn sale".to_string()],
        contract_external_ids: vec![ExternalId::new("aaaaaaaaaaa-bbbbbbbb")],
    }
}

fn act_request() -> ActRequest {
    ActRequest {
        contract_external_id: ExternalId::new("aaaaaaaaaaa-bbbbbbbb"),
        date_act: "2020-01-31".to_string(),
        date_start: "2020-01-01".to_string(),
        date_end: "2020-01-31".to_string(),
        amount: build_amount(&BigDecimal::from(1000), VatRate::Twenty).expect("amount"),
        client_role: Role::Agency,
        contractor_role: Role::Publisher,
    }
}

// ============================================================================
// SECTION: Wire Shape
// ============================================================================

#[tokio::test]
async fn counterparty_submission_uses_put_with_bearer_auth() {
    let (base_url, handle) = serve_once(200, "{}");
    let provider = stub_provider(base_url);

    let created =
        provider.create_counterparty(&counterparty_request()).await.expect("created");
    let captured = handle.join().expect("stub thread");

    assert_eq!(captured.method, "PUT");
    assert_eq!(captured.url, format!("/v1/person/{}", created.external_id));
    assert_eq!(captured.authorization.as_deref(), Some("Bearer secret"));
    assert_eq!(captured.body["name"], "OOO Sever");
    assert_eq!(captured.body["juridical_details"]["type"], "juridical");
    assert_eq!(captured.body["juridical_details"]["inn"], "7707083893");
    assert_eq!(created.status_code, 200);
}

#[tokio::test]
async fn contract_submission_targets_contract_endpoint() {
    let (base_url, handle) = serve_once(201, "{}");
    let provider = stub_provider(base_url);

    let created = provider.create_contract(&contract_request()).await.expect("created");
    let captured = handle.join().expect("stub thread");

    assert_eq!(captured.url, format!("/v1/contract/{}", created.external_id));
    assert_eq!(captured.body["type"], "service");
    assert_eq!(captured.body["subject_type"], "distribution");
    assert_eq!(created.status_code, 201);
}

#[tokio::test]
async fn act_submission_carries_amount_breakdown() {
    let (base_url, handle) = serve_once(200, "{}");
    let provider = stub_provider(base_url);

    let created = provider.create_act(&act_request()).await.expect("created");
    let captured = handle.join().expect("stub thread");

    assert_eq!(captured.url, format!("/v4/invoice/{}", created.external_id));
    assert_eq!(captured.body["date"], "2020-01-31");
    assert!(captured.body.get("date_act").is_none());
    assert_eq!(captured.body["date_start"], "2020-01-01");
    assert_eq!(captured.body["date_end"], "2020-01-31");
    let services = &captured.body["amount"]["services"];
    assert_eq!(services["excluding_vat"], "1000.00");
    assert_eq!(services["vat_rate"], "20");
    assert_eq!(services["vat"], "200.00");
    assert_eq!(services["including_vat"], "1200.00");
}

// ============================================================================
// SECTION: Erid Extraction
// ============================================================================

#[tokio::test]
async fn creative_response_erid_is_extracted() {
    let (base_url, handle) = serve_once(200, r#"{"erid": "2SDnjcbYYzo"}"#);
    let provider = stub_provider(base_url);

    let created = provider.create_advertising(&creative_request()).await.expect("created");
    let captured = handle.join().expect("stub thread");

    assert_eq!(captured.url, format!("/v3/creative/{}", created.external_id));
    assert_eq!(created.erid.as_ref().map(ord_bridge_core::Erid::as_str), Some("2SDnjcbYYzo"));
}

#[tokio::test]
async fn creative_response_without_erid_yields_none() {
    let (base_url, handle) = serve_once(200, "not json");
    let provider = stub_provider(base_url);

    let created = provider.create_advertising(&creative_request()).await.expect("created");
    handle.join().expect("stub thread");

    assert!(created.erid.is_none());
    assert_eq!(created.status_code, 200);
}

// ============================================================================
// SECTION: Status Classification
// ============================================================================

#[tokio::test]
async fn bad_request_body_is_translated() {
    let body = r#"{"error": "invalid request", "errors": [
        {"field": "inn", "error_code": "bad_format", "message": "must be digits", "values": ["12ab"]}
    ]}"#;
    let (base_url, handle) = serve_once(400, body);
    let provider = stub_provider(base_url);

    let error = provider.create_counterparty(&counterparty_request()).await.expect_err("rejected");
    handle.join().expect("stub thread");

    match error {
        OrdError::Rejected(message) => {
            assert_eq!(
                message,
                "invalid request:\n\u{2022} [inn] must be digits (bad_format) Value: 12ab"
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_bad_request_body_uses_operation_fallback() {
    let (base_url, handle) = serve_once(400, "<html>bad gateway</html>");
    let provider = stub_provider(base_url);

    let error = provider.create_contract(&contract_request()).await.expect_err("rejected");
    handle.join().expect("stub thread");

    match error {
        OrdError::Rejected(message) => {
            assert_eq!(message, "contract data failed provider validation");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_status_reports_authentication_failure() {
    let (base_url, handle) = serve_once(401, "{}");
    let provider = stub_provider(base_url);

    let error = provider.create_counterparty(&counterparty_request()).await.expect_err("denied");
    handle.join().expect("stub thread");

    assert!(matches!(error, OrdError::Authentication));
}

#[tokio::test]
async fn forbidden_status_reports_authorization_failure() {
    let (base_url, handle) = serve_once(403, "{}");
    let provider = stub_provider(base_url);

    let error = provider.create_act(&act_request()).await.expect_err("denied");
    handle.join().expect("stub thread");

    assert!(matches!(error, OrdError::Authorization));
}

#[tokio::test]
async fn server_error_status_is_reported_verbatim() {
    let (base_url, handle) = serve_once(502, "{}");
    let provider = stub_provider(base_url);

    let error = provider.create_contract(&contract_request()).await.expect_err("failed");
    handle.join().expect("stub thread");

    assert!(matches!(error, OrdError::UnexpectedStatus(502)));
}

// ============================================================================
// SECTION: Local Validation Short-Circuit
// ============================================================================

#[tokio::test]
async fn identical_contract_parties_fail_before_any_request() {
    // Port 9 is unreachable; a request would surface as a transport error.
    let provider = stub_provider("http://127.0.0.1:9".to_string());
    let mut request = contract_request();
    request.contractor_external_id = request.client_external_id.clone();

    let error = provider.create_contract(&request).await.expect_err("invalid");
    assert!(matches!(error, OrdError::Validation(_)));
}

#[tokio::test]
async fn future_act_date_fails_before_any_request() {
    let provider = stub_provider("http://127.0.0.1:9".to_string());
    let mut request = act_request();
    request.date_act = "2999-01-01".to_string();
    request.date_end = "2999-01-01".to_string();

    let error = provider.create_act(&request).await.expect_err("invalid");
    assert!(matches!(error, OrdError::Validation(_)));
}

#[tokio::test]
async fn advertiser_client_role_fails_before_any_request() {
    let provider = stub_provider("http://127.0.0.1:9".to_string());
    let mut request = act_request();
    request.client_role = Role::Advertiser;

    let error = provider.create_act(&request).await.expect_err("invalid");
    assert!(matches!(error, OrdError::Validation(_)));
}
