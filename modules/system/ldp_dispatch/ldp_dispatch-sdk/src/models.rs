//! Domain models exchanged between the pipeline and its collaborators.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::PatchError;
use crate::permissions::PermissionSet;

/// The requesting agent.
///
/// A malformed or missing credential yields [`Agent::anonymous`], never an
/// extraction error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agent {
    /// Agent identity (e.g. a `WebID`) understood by the authorization client.
    pub id: Option<String>,
    pub authenticated: bool,
}

impl Agent {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn authenticated(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            authenticated: true,
        }
    }
}

/// Raw representation of a resource, as carried by POST and PUT bodies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Representation {
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl Representation {
    #[must_use]
    pub fn new(content_type: Option<String>, data: impl Into<Bytes>) -> Self {
        Self {
            content_type,
            data: data.into(),
        }
    }
}

/// A modification that can be applied to a representation.
pub trait Patch: Send + Sync + fmt::Debug {
    /// Apply this patch in place.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError`] if the representation cannot be patched.
    fn apply(&self, representation: &mut Representation) -> Result<(), PatchError>;
}

/// A request body decoded by a body parser.
///
/// Carries the permissions the patch needs, which may depend on its content
/// (e.g. a patch that only inserts needs `append`, not `write`).
#[derive(Debug, Clone)]
pub struct ParsedRequestBody {
    patch: Arc<dyn Patch>,
    required_permissions: PermissionSet,
}

impl ParsedRequestBody {
    #[must_use]
    pub fn new(patch: Arc<dyn Patch>, required_permissions: PermissionSet) -> Self {
        Self {
            patch,
            required_permissions,
        }
    }

    #[must_use]
    pub fn patch(&self) -> &Arc<dyn Patch> {
        &self.patch
    }

    #[must_use]
    pub fn required_permissions(&self) -> PermissionSet {
        self.required_permissions
    }
}
