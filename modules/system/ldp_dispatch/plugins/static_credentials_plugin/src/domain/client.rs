//! `CredentialsExtractor` implementation for the static credentials plugin.

use http::HeaderMap;
use http::header::AUTHORIZATION;
use ldp_dispatch_sdk::{Agent, CredentialsExtractor};

use super::service::Service;

impl CredentialsExtractor for Service {
    fn extract(&self, headers: &HeaderMap) -> Agent {
        let Some(token) = extract_bearer_token(headers) else {
            return Agent::anonymous();
        };

        if let Some(agent) = self.authenticate(token) {
            agent
        } else {
            tracing::debug!("bearer token not recognized; treating agent as anonymous");
            Agent::anonymous()
        }
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer ").map(str::trim))
}
