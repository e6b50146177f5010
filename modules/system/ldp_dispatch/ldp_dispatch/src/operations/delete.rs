use std::sync::Arc;

use async_trait::async_trait;
use http::Method;
use ldp_dispatch_sdk::{PermissionSet, ResourceIdentifier, ResourceStore, StoreError};

use super::LdpOperation;

/// Performs an LDP DELETE operation. Leaves no resource behind.
pub struct DeleteOperation {
    store: Arc<dyn ResourceStore>,
    target: ResourceIdentifier,
}

impl DeleteOperation {
    #[must_use]
    pub fn new(store: Arc<dyn ResourceStore>, target: ResourceIdentifier) -> Self {
        Self { store, target }
    }
}

#[async_trait]
impl LdpOperation for DeleteOperation {
    fn method(&self) -> Method {
        Method::DELETE
    }

    fn target(&self) -> &ResourceIdentifier {
        &self.target
    }

    fn required_permissions(&self) -> PermissionSet {
        PermissionSet::WRITE_ONLY
    }

    async fn perform_modification(&self) -> Result<Option<ResourceIdentifier>, StoreError> {
        self.store.delete_resource(&self.target).await?;
        Ok(None)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::operations::test_support::{RecordingStore, StoreCall, target};

    #[test]
    fn requires_write() {
        let store = Arc::new(RecordingStore::default());
        let operation = DeleteOperation::new(store, target("/foo"));
        assert!(operation.required_permissions().write());
        assert!(!operation.required_permissions().read());
        assert!(operation.performs_modification());
    }

    #[tokio::test]
    async fn deletes_target_and_returns_nothing() {
        let store = Arc::new(RecordingStore::default());
        let operation = DeleteOperation::new(store.clone(), target("/foo"));

        let result = operation.perform_modification().await.unwrap();

        assert_eq!(result, None);
        assert_eq!(store.calls(), vec![StoreCall::Delete(target("/foo"))]);
    }
}
