use std::sync::Arc;

use async_trait::async_trait;
use http::Method;
use ldp_dispatch_sdk::{
    PermissionSet, Representation, ResourceIdentifier, ResourceStore, StoreError,
};

use super::LdpOperation;

/// Performs an LDP POST operation: adds a child to the target container.
pub struct PostOperation {
    store: Arc<dyn ResourceStore>,
    target: ResourceIdentifier,
    body: Representation,
}

impl PostOperation {
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
impl LdpOperation for PostOperation {
    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> &ResourceIdentifier {
        &self.target
    }

    fn required_permissions(&self) -> PermissionSet {
        PermissionSet::APPEND_ONLY
    }

    async fn perform_modification(&self) -> Result<Option<ResourceIdentifier>, StoreError> {
        let created = self.store.add_resource(&self.target, &self.body).await?;
        Ok(Some(created))
    }
}
