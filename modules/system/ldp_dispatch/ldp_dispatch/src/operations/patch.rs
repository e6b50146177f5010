use std::sync::Arc;

use async_trait::async_trait;
use http::Method;
use ldp_dispatch_sdk::{
    ParsedRequestBody, PermissionSet, ResourceIdentifier, ResourceStore, StoreError,
};

use super::LdpOperation;

/// Performs an LDP PATCH operation.
///
/// The permissions it needs come from the parsed body rather than the
/// method, since an insert-only patch needs less than one that deletes.
pub struct PatchOperation {
    store: Arc<dyn ResourceStore>,
    target: ResourceIdentifier,
    parsed_body: ParsedRequestBody,
}

impl PatchOperation {
    #[must_use]
    pub fn new(
        store: Arc<dyn ResourceStore>,
        target: ResourceIdentifier,
        parsed_body: ParsedRequestBody,
    ) -> Self {
        Self {
            store,
            target,
            parsed_body,
        }
    }
}

#[async_trait]
impl LdpOperation for PatchOperation {
    fn method(&self) -> Method {
        Method::PATCH
    }

    fn target(&self) -> &ResourceIdentifier {
        &self.target
    }

    fn required_permissions(&self) -> PermissionSet {
        self.parsed_body.required_permissions()
    }

    async fn perform_modification(&self) -> Result<Option<ResourceIdentifier>, StoreError> {
        self.store
            .modify_resource(&self.target, &self.parsed_body)
            .await?;
        Ok(Some(self.target.clone()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::operations::test_support::{RecordingStore, StoreCall, parsed_body, target};

    #[test]
    fn requires_what_the_parsed_body_requires() {
        let store = Arc::new(RecordingStore::default());
        let operation = PatchOperation::new(
            store,
            target("/foo"),
            parsed_body(PermissionSet::APPEND_ONLY),
        );
        assert_eq!(operation.required_permissions(), PermissionSet::APPEND_ONLY);
        assert!(operation.performs_modification());
    }

    #[tokio::test]
    async fn modifies_target() {
        let store = Arc::new(RecordingStore::default());
        let operation = PatchOperation::new(
            store.clone(),
            target("/foo"),
            parsed_body(PermissionSet::READ_WRITE),
        );

        let result = operation.perform_modification().await.unwrap();

        assert_eq!(result, Some(target("/foo")));
        assert_eq!(
            store.calls(),
            vec![StoreCall::Modify(target("/foo"), PermissionSet::READ_WRITE)]
        );
    }
}
