//! Configuration for the LDP dispatch module.

use serde::Deserialize;

/// Module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LdpDispatchConfig {
    /// Path suffix marking ACL resources.
    pub acl_extension: String,

    /// Honor `X-HTTP-Method-Override` on `POST` requests.
    pub method_override: bool,
}

impl Default for LdpDispatchConfig {
    fn default() -> Self {
        Self {
            acl_extension: ".acl".to_owned(),
            method_override: false,
        }
    }
}
