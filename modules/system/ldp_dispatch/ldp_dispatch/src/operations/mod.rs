//! Operation variants, one per supported protocol method.
//!
//! Every variant implements [`LdpOperation`]. Variants that need a request
//! body receive it when they are built: the [`OperationFactory`] hands out a
//! [`PendingOperation`] whose binder is consumed by value, so a body can be
//! attached at most once and only to a variant that accepts one.

mod delete;
mod factory;
mod patch;
mod post;
mod put;
mod read;

use std::sync::Arc;

use async_trait::async_trait;
use http::Method;
use ldp_dispatch_sdk::{
    ParsedRequestBody, PermissionSet, Representation, ResourceIdentifier, ResourceStore,
    StoreError,
};

pub use delete::DeleteOperation;
pub use factory::OperationFactory;
pub use patch::PatchOperation;
pub use post::PostOperation;
pub use put::PutOperation;
pub use read::{GetOperation, HeadOperation, OptionsOperation};

/// Method-specific behavior bound to one target.
#[async_trait]
pub trait LdpOperation: Send + Sync {
    /// The protocol method this operation implements.
    fn method(&self) -> Method;

    /// The resource this operation acts on.
    fn target(&self) -> &ResourceIdentifier;

    /// Permissions the agent must hold, before ACL escalation.
    fn required_permissions(&self) -> PermissionSet {
        PermissionSet::READ_ONLY
    }

    /// Whether [`LdpOperation::perform_modification`] mutates the store.
    fn performs_modification(&self) -> bool {
        self.required_permissions().is_mutating()
    }

    /// Execute the operation against the store.
    ///
    /// Returns the identifier of the resulting resource, if any. Read-only
    /// operations return their target without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the modification.
    async fn perform_modification(&self) -> Result<Option<ResourceIdentifier>, StoreError> {
        Ok(Some(self.target().clone()))
    }
}

type BodyConstructor =
    fn(Arc<dyn ResourceStore>, ResourceIdentifier, Representation) -> Box<dyn LdpOperation>;

/// An operation whose construction may still need the request body.
pub enum PendingOperation {
    /// The variant takes no body.
    Ready(Box<dyn LdpOperation>),
    /// The variant takes the raw request body.
    NeedsBody(BodyBinder),
    /// The variant takes a body decoded by a body parser.
    NeedsParsedBody(ParsedBodyBinder),
}

impl PendingOperation {
    /// The target the operation will be bound to.
    #[must_use]
    pub fn target(&self) -> &ResourceIdentifier {
        match self {
            Self::Ready(operation) => operation.target(),
            Self::NeedsBody(binder) => &binder.target,
            Self::NeedsParsedBody(binder) => &binder.target,
        }
    }
}

/// Completes a variant that accepts a raw body.
pub struct BodyBinder {
    store: Arc<dyn ResourceStore>,
    target: ResourceIdentifier,
    construct: BodyConstructor,
}

impl BodyBinder {
    fn new(
        store: Arc<dyn ResourceStore>,
        target: ResourceIdentifier,
        construct: BodyConstructor,
    ) -> Self {
        Self {
            store,
            target,
            construct,
        }
    }

    #[must_use]
    pub fn bind(self, body: Representation) -> Box<dyn LdpOperation> {
        (self.construct)(self.store, self.target, body)
    }
}

/// Completes a variant that accepts a parsed body.
pub struct ParsedBodyBinder {
    store: Arc<dyn ResourceStore>,
    target: ResourceIdentifier,
}

impl ParsedBodyBinder {
    #[must_use]
    pub fn bind(self, parsed_body: ParsedRequestBody) -> Box<dyn LdpOperation> {
        Box::new(PatchOperation::new(self.store, self.target, parsed_body))
    }
}
