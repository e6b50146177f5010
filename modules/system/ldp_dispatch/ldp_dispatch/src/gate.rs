//! Authorization gate.

use std::sync::Arc;

use ldp_dispatch_sdk::{
    Agent, AuthorizationClient, LdpError, PermissionSet, ResourceIdentifier,
};

/// Consults the authorization collaborator and turns its answer into a verdict.
///
/// Fails closed: a collaborator error is a denial.
#[derive(Clone)]
pub struct AuthorizationGate {
    authz: Arc<dyn AuthorizationClient>,
}

impl AuthorizationGate {
    #[must_use]
    pub fn new(authz: Arc<dyn AuthorizationClient>) -> Self {
        Self { authz }
    }

    /// Verify that `agent` holds `required` on `target`.
    ///
    /// # Errors
    ///
    /// - [`LdpError::AuthenticationRequired`] if denied and the agent is anonymous
    /// - [`LdpError::InsufficientPermission`] if denied and the agent is authenticated
    pub async fn authorize(
        &self,
        agent: &Agent,
        target: &ResourceIdentifier,
        required: PermissionSet,
    ) -> Result<(), LdpError> {
        let allowed = match self.authz.has_permissions(agent, target, required).await {
            Ok(allowed) => allowed,
            Err(e) => {
                tracing::warn!(
                    target_path = %target,
                    %required,
                    error = %e,
                    "authorization check failed; denying"
                );
                false
            }
        };

        if allowed {
            Ok(())
        } else if agent.authenticated {
            Err(LdpError::InsufficientPermission)
        } else {
            Err(LdpError::AuthenticationRequired)
        }
    }
}
