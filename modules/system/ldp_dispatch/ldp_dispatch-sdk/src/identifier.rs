//! Resource identifier model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of an addressable resource.
///
/// Produced by target resolution: `path` is percent-decoded, has no trailing
/// slash (except the root `/`) and never contains a `/..` segment; `domain`
/// is a validated lowercase hostname without port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    pub path: String,
    pub domain: String,
    /// `true` if `path` carries the reserved ACL suffix.
    pub is_acl: bool,
}

impl ResourceIdentifier {
    #[must_use]
    pub fn new(path: impl Into<String>, domain: impl Into<String>, is_acl: bool) -> Self {
        Self {
            path: path.into(),
            domain: domain.into(),
            is_acl,
        }
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.domain, self.path)
    }
}
