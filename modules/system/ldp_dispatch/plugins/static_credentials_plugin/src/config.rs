//! Configuration for the static credentials plugin.

use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticCredentialsPluginConfig {
    /// Credentials mode.
    pub mode: CredentialsMode,

    /// Agent identity used in `accept_all` mode.
    pub default_agent: String,

    /// Token-to-agent mappings used in `static_tokens` mode.
    pub tokens: Vec<TokenMapping>,
}

impl Default for StaticCredentialsPluginConfig {
    fn default() -> Self {
        Self {
            mode: CredentialsMode::AcceptAll,
            default_agent: "https://localhost/profile/card#me".to_owned(),
            tokens: Vec::new(),
        }
    }
}

/// Credentials mode.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CredentialsMode {
    /// Any non-empty bearer token authenticates as the default agent.
    #[default]
    AcceptAll,

    /// Only configured tokens authenticate, each as its mapped agent.
    StaticTokens,
}

/// Maps one bearer token to an agent identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    pub token: String,
    pub agent: String,
}
