//! Service implementation for the static ACL plugin.

use ldp_dispatch_sdk::{Agent, PermissionSet, ResourceIdentifier};

use crate::config::{AclMode, GrantConfig, StaticAclPluginConfig};

const ALL: PermissionSet = PermissionSet::new(true, true, true, true);

struct Grant {
    agent: Option<String>,
    domain: Option<String>,
    path: String,
    permissions: PermissionSet,
}

impl Grant {
    fn from_config(cfg: &GrantConfig) -> Self {
        let path = cfg.path.trim_end_matches('/');
        Self {
            agent: cfg.agent.clone(),
            domain: cfg.domain.clone(),
            path: if path.is_empty() { "/" } else { path }.to_owned(),
            permissions: PermissionSet::from_flags(cfg.permissions),
        }
    }

    fn matches(&self, agent: &Agent, target: &ResourceIdentifier) -> bool {
        let agent_matches = self
            .agent
            .as_ref()
            .is_none_or(|id| agent.authenticated && agent.id.as_ref() == Some(id));
        let domain_matches = self.domain.as_ref().is_none_or(|d| *d == target.domain);
        agent_matches && domain_matches && self.covers(&target.path)
    }

    fn covers(&self, path: &str) -> bool {
        self.path == "/"
            || path == self.path
            || path
                .strip_prefix(self.path.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Static ACL service.
///
/// In `allow_all` mode every agent holds every permission. In
/// `static_grants` mode an agent holds the union of the grants that match
/// it, the target's domain, and a path prefix ending on a segment boundary.
pub struct Service {
    mode: AclMode,
    grants: Vec<Grant>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticAclPluginConfig) -> Self {
        tracing::info!(
            mode = ?cfg.mode,
            grants = cfg.grants.len(),
            "static ACL plugin configured"
        );
        Self {
            mode: cfg.mode.clone(),
            grants: cfg.grants.iter().map(Grant::from_config).collect(),
        }
    }

    /// Permissions `agent` holds on `target`.
    #[must_use]
    pub fn permissions_for(&self, agent: &Agent, target: &ResourceIdentifier) -> PermissionSet {
        match self.mode {
            AclMode::AllowAll => ALL,
            AclMode::StaticGrants => self
                .grants
                .iter()
                .filter(|grant| grant.matches(agent, target))
                .fold(PermissionSet::NONE, |held, grant| held.union(grant.permissions)),
        }
    }
}
