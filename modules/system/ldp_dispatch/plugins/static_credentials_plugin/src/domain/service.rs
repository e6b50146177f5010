//! Service implementation for the static credentials plugin.

use std::collections::HashMap;

use ldp_dispatch_sdk::Agent;

use crate::config::{CredentialsMode, StaticCredentialsPluginConfig};

/// Static credentials service.
///
/// Resolves bearer tokens to agents based on configuration mode:
/// - `accept_all`: any non-empty token maps to the default agent
/// - `static_tokens`: specific tokens map to specific agents
pub struct Service {
    mode: CredentialsMode,
    default_agent: String,
    token_map: HashMap<String, String>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticCredentialsPluginConfig) -> Self {
        let token_map = cfg
            .tokens
            .iter()
            .map(|m| (m.token.clone(), m.agent.clone()))
            .collect();

        tracing::info!(
            mode = ?cfg.mode,
            tokens = cfg.tokens.len(),
            "static credentials plugin configured"
        );

        Self {
            mode: cfg.mode.clone(),
            default_agent: cfg.default_agent.clone(),
            token_map,
        }
    }

    /// Resolve a bearer token to an agent.
    ///
    /// Returns `None` if the token is empty or, in `static_tokens` mode,
    /// not recognized.
    #[must_use]
    pub fn authenticate(&self, bearer_token: &str) -> Option<Agent> {
        if bearer_token.is_empty() {
            return None;
        }

        let agent = match self.mode {
            CredentialsMode::AcceptAll => &self.default_agent,
            CredentialsMode::StaticTokens => self.token_map.get(bearer_token)?,
        };

        Some(Agent::authenticated(agent.clone()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::TokenMapping;

    fn static_tokens() -> Service {
        Service::from_config(&StaticCredentialsPluginConfig {
            mode: CredentialsMode::StaticTokens,
            tokens: vec![TokenMapping {
                token: "alice-token".to_owned(),
                agent: "https://alice.example/#me".to_owned(),
            }],
            ..StaticCredentialsPluginConfig::default()
        })
    }

    #[test]
    fn accept_all_mode_returns_default_agent() {
        let service = Service::from_config(&StaticCredentialsPluginConfig::default());
        assert_eq!(
            service.authenticate("anything"),
            Some(Agent::authenticated("https://localhost/profile/card#me"))
        );
    }

    #[test]
    fn accept_all_mode_rejects_empty_token() {
        let service = Service::from_config(&StaticCredentialsPluginConfig::default());
        assert_eq!(service.authenticate(""), None);
    }

    #[test]
    fn static_tokens_mode_returns_mapped_agent() {
        assert_eq!(
            static_tokens().authenticate("alice-token"),
            Some(Agent::authenticated("https://alice.example/#me"))
        );
    }

    #[test]
    fn static_tokens_mode_rejects_unknown_token() {
        assert_eq!(static_tokens().authenticate("mallory-token"), None);
    }
}
