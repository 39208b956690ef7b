// crates/ord-bridge-providers/src/vk.rs
// ============================================================================
// Module: VK ORD Provider
// Description: VK ORD registry client over authenticated HTTP PUT.
// Purpose: Submit counterparties, contracts, creatives, and acts to VK ORD.
// Dependencies: ord-bridge-core, reqwest, serde_json, time
// ============================================================================

//! ## Overview
//! The VK provider submits each registration as a single `PUT` to the
//! versioned VK ORD endpoint for the entity, identified by a client-generated
//! external identifier. Responses are classified by status: rejections are
//! translated into readable messages, credential failures are reported
//! distinctly, and anything else fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use ord_bridge_core::ActCreated;
use ord_bridge_core::ActRequest;
use ord_bridge_core::ContractCreated;
use ord_bridge_core::ContractRequest;
use ord_bridge_core::CounterpartyCreated;
use ord_bridge_core::CounterpartyRequest;
use ord_bridge_core::CreativeCreated;
use ord_bridge_core::CreativeRequest;
use ord_bridge_core::Erid;
use ord_bridge_core::ExternalId;
use ord_bridge_core::check_act_dates;
use ord_bridge_core::check_act_roles;
use ord_bridge_core::check_contract_date;
use ord_bridge_core::check_creative_texts;
use ord_bridge_core::check_distinct_parties;
use reqwest::Client;
use reqwest::Response;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;

use crate::provider::OrdError;
use crate::provider::OrdProvider;
use crate::translate::translate_bad_request;

// ============================================================================
// SECTION: Endpoints
// ============================================================================

/// Counterparty registration endpoint prefix.
const PERSON_PATH: &str = "/v1/person";
/// Contract registration endpoint prefix.
const CONTRACT_PATH: &str = "/v1/contract";
/// Creative registration endpoint prefix.
const CREATIVE_PATH: &str = "/v3/creative";
/// Act registration endpoint prefix.
const INVOICE_PATH: &str = "/v4/invoice";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the VK ORD provider.
///
/// # Invariants
/// - `base_url` carries the scheme and host without a trailing path.
/// - `timeout_ms` applies to the full request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VkProviderConfig {
    /// Base URL of the VK ORD API.
    pub base_url: String,
    /// Bearer token presented on every request.
    pub api_key: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for VkProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-sandbox.ord.vk.com".to_string(),
            api_key: String::new(),
            timeout_ms: 30_000,
        }
    }
}

// ============================================================================
// SECTION: Provider Implementation
// ============================================================================

/// VK ORD registry client.
///
/// # Invariants
/// - Every submission is a `PUT` keyed by a freshly generated external id.
/// - Domain validation runs before any request is sent.
pub struct VkProvider {
    /// Base URL with any trailing slash removed.
    base_url: String,
    /// Bearer token presented on every request.
    api_key: String,
    /// HTTP client with the configured timeout.
    client: Client,
}

impl VkProvider {
    /// Creates a new VK provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrdError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(config: VkProviderConfig) -> Result<Self, OrdError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|_| OrdError::Configuration("http client build failed".to_string()))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            client,
        })
    }

    /// Builds the full endpoint URL for an entity submission.
    fn endpoint(&self, path: &str, external_id: &ExternalId) -> String {
        format!("{}{path}/{external_id}", self.base_url)
    }

    /// Submits one registration and classifies the response status.
    ///
    /// # Errors
    ///
    /// Returns [`OrdError`] for transport failures, rejected payloads,
    /// credential failures, and unexpected statuses.
    async fn submit<T: Serialize + Sync>(
        &self,
        path: &str,
        external_id: &ExternalId,
        payload: &T,
        fallback: &str,
    ) -> Result<Response, OrdError> {
        let response = self
            .client
            .put(self.endpoint(path, external_id))
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|error| {
                if error.is_timeout() {
                    OrdError::Transport("request timed out".to_string())
                } else {
                    OrdError::Transport("http request failed".to_string())
                }
            })?;
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::BAD_REQUEST => {
                let body = response.text().await.unwrap_or_default();
                Err(OrdError::Rejected(translate_bad_request(&body, fallback)))
            }
            StatusCode::UNAUTHORIZED => Err(OrdError::Authentication),
            StatusCode::FORBIDDEN => Err(OrdError::Authorization),
            status => Err(OrdError::UnexpectedStatus(status.as_u16())),
        }
    }
}

#[async_trait]
impl OrdProvider for VkProvider {
    async fn create_counterparty(
        &self,
        request: &CounterpartyRequest,
    ) -> Result<CounterpartyCreated, OrdError> {
        let external_id = ExternalId::generate();
        let response = self
            .submit(PERSON_PATH, &external_id, request, "counterparty data failed provider validation")
            .await?;
        Ok(CounterpartyCreated {
            external_id,
            status_code: response.status().as_u16(),
        })
    }

    async fn create_contract(
        &self,
        request: &ContractRequest,
    ) -> Result<ContractCreated, OrdError> {
        check_distinct_parties(&request.client_external_id, &request.contractor_external_id)?;
        check_contract_date(&request.date)?;
        let external_id = ExternalId::generate();
        let response = self
            .submit(CONTRACT_PATH, &external_id, request, "contract data failed provider validation")
            .await?;
        Ok(ContractCreated {
            external_id,
            status_code: response.status().as_u16(),
        })
    }

    async fn create_advertising(
        &self,
        request: &CreativeRequest,
    ) -> Result<CreativeCreated, OrdError> {
        check_creative_texts(&request.texts)?;
        let external_id = ExternalId::generate();
        let response = self
            .submit(CREATIVE_PATH, &external_id, request, "creative data failed provider validation")
            .await?;
        let status_code = response.status().as_u16();
        let erid = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(|body| body.get("erid"))
            .and_then(Value::as_str)
            .map(Erid::from);
        Ok(CreativeCreated {
            erid,
            external_id,
            status_code,
        })
    }

    async fn create_act(&self, request: &ActRequest) -> Result<ActCreated, OrdError> {
        let today = OffsetDateTime::now_utc().date();
        check_act_dates(&request.date_act, &request.date_start, &request.date_end, today)?;
        check_act_roles(request.client_role)?;
        let external_id = ExternalId::generate();
        let response = self
            .submit(INVOICE_PATH, &external_id, request, "act data failed provider validation")
            .await?;
        Ok(ActCreated {
            external_id,
            status_code: response.status().as_u16(),
        })
    }
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
        reason = "Test-only panic-based assertions are permitted."
    )]

    use ord_bridge_core::ExternalId;

    use super::VkProvider;
    use super::VkProviderConfig;

    #[test]
    fn default_config_targets_sandbox() {
        let config = VkProviderConfig::default();
        assert_eq!(config.base_url, "https://api-sandbox.ord.vk.com");
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn endpoint_joins_base_path_and_id() {
        let provider = VkProvider::new(VkProviderConfig {
            base_url: "https://ord.example/".to_string(),
            ..VkProviderConfig::default()
        })
        .expect("provider");
        let id = ExternalId::new("aaaaaaaaaaa-bbbbbbbb");
        assert_eq!(
            provider.endpoint(super::CONTRACT_PATH, &id),
            "https://ord.example/v1/contract/aaaaaaaaaaa-bbbbbbbb"
        );
    }
}
