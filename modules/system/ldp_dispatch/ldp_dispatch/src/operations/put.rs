use std::sync::Arc;

use async_trait::async_trait;
use http::Method;
use ldp_dispatch_sdk::{
    PermissionSet, Representation, ResourceIdentifier, ResourceStore, StoreError,
};

use super::LdpOperation;

/// Performs an LDP PUT operation: sets or replaces the target's representation.
pub struct PutOperation {
    store: Arc<dyn ResourceStore>,
    target: ResourceIdentifier,
    body: Representation,
}

impl PutOperation {
    #[must_use]
    pub fn new(
        store: Arc<dyn ResourceStore>,
        target: ResourceIdentifier,
        body: Representation,
    ) -> Self {
        Self {
            store,
            target,
            body,
        }
    }
}

#[async_trait]
impl LdpOperation for PutOperation {
    fn method(&self) -> Method {
        Method::PUT
    }

    fn target(&self) -> &ResourceIdentifier {
        &self.target
    }

    fn required_permissions(&self) -> PermissionSet {
        PermissionSet::WRITE_ONLY
    }

    async fn perform_modification(&self) -> Result<Option<ResourceIdentifier>, StoreError> {
        self.store
            .set_representation(&self.target, &self.body)
            .await?;
        Ok(Some(self.target.clone()))
    }
}
