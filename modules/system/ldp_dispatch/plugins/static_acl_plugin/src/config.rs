//! Configuration for the static ACL plugin.

use ldp_dispatch_sdk::PermissionFlags;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAclPluginConfig {
    /// Authorization mode.
    pub mode: AclMode,

    /// Grants consulted in `static_grants` mode.
    pub grants: Vec<GrantConfig>,
}

/// Authorization mode.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AclMode {
    /// Every agent holds every permission on every resource.
    #[default]
    AllowAll,

    /// Agents hold the union of the grants matching them and the target.
    StaticGrants,
}

/// Permissions granted on a subtree.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrantConfig {
    /// Agent identity the grant applies to; absent means every agent,
    /// anonymous ones included.
    #[serde(default)]
    pub agent: Option<String>,

    /// Domain the grant applies to; absent means every domain.
    #[serde(default)]
    pub domain: Option<String>,

    /// Path of the subtree root. `/` covers everything.
    pub path: String,

    pub permissions: PermissionFlags,
}
