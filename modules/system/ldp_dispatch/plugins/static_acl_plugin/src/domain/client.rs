//! `AuthorizationClient` implementation for the static ACL plugin.

use async_trait::async_trait;
use ldp_dispatch_sdk::{
    Agent, AuthorizationClient, AuthorizationError, PermissionSet, ResourceIdentifier,
};

use super::service::Service;

#[async_trait]
impl AuthorizationClient for Service {
    async fn has_permissions(
        &self,
        agent: &Agent,
        target: &ResourceIdentifier,
        required: PermissionSet,
    ) -> Result<bool, AuthorizationError> {
        let held = self.permissions_for(agent, target);
        let allowed = held.includes(required);
        tracing::debug!(
            agent = agent.id.as_deref().unwrap_or("(anonymous)"),
            target_path = %target,
            %held,
            %required,
            allowed,
            "static ACL decision"
        );
        Ok(allowed)
    }
}
