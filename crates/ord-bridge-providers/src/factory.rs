// crates/ord-bridge-providers/src/factory.rs
// ============================================================================
// Module: Provider Factory
// Description: Builds the configured registry provider implementation.
// Purpose: Resolve provider names from configuration to concrete providers.
// Dependencies: ord-bridge-config, ord-bridge-providers::vk
// ============================================================================

//! ## Overview
//! Maps the `provider.name` configuration value onto a concrete
//! [`OrdProvider`] implementation. Unknown names fail closed with a
//! configuration error naming the offending value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use ord_bridge_config::OrdConfig;

use crate::provider::OrdError;
use crate::provider::OrdProvider;
use crate::vk::VkProvider;
use crate::vk::VkProviderConfig;

// ============================================================================
// SECTION: Factory
// ============================================================================

/// Builds the provider named in the configuration.
///
/// Provider names are matched case-insensitively.
///
/// # Errors
///
/// Returns [`OrdError::Configuration`] when the name is unknown or the
/// provider cannot be constructed from the supplied configuration.
pub fn provider_from_config(config: &OrdConfig) -> Result<Arc<dyn OrdProvider>, OrdError> {
    let name = config.provider.name.trim().to_ascii_lowercase();
    match name.as_str() {
        "vk" => {
            let api_key = config
                .provider
                .api_key
                .clone()
                .ok_or_else(|| OrdError::Configuration("api key required".to_string()))?;
            let provider = VkProvider::new(VkProviderConfig {
                base_url: config.provider.base_url.clone(),
                api_key,
                timeout_ms: config.provider.timeout_ms,
            })?;
            Ok(Arc::new(provider))
        }
        other => Err(OrdError::Configuration(format!("unknown provider: {other}"))),
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

    use ord_bridge_config::LimitsConfig;
    use ord_bridge_config::OrdConfig;
    use ord_bridge_config::ProviderConfig;
    use ord_bridge_config::ServerConfig;

    use super::OrdError;
    use super::provider_from_config;

    fn config_with_provider(name: &str) -> OrdConfig {
        OrdConfig {
            provider: ProviderConfig {
                name: name.to_string(),
                api_key: Some("secret".to_string()),
                base_url: "https://api-sandbox.ord.vk.com".to_string(),
                timeout_ms: 30_000,
            },
            limits: LimitsConfig::default(),
            server: ServerConfig::default(),
        }
    }

    #[test]
    fn vk_name_resolves_case_insensitively() {
        for name in ["vk", "VK", " Vk "] {
            assert!(provider_from_config(&config_with_provider(name)).is_ok(), "name {name}");
        }
    }

    #[test]
    fn unknown_name_fails_closed() {
        let result = provider_from_config(&config_with_provider("yandex"));
        match result {
            Err(OrdError::Configuration(message)) => {
                assert!(message.contains("yandex"), "message: {message}");
            }
            _ => panic!("expected configuration error"),
        }
    }
}
