use std::sync::Arc;

use http::Method;
use ldp_dispatch_sdk::{LdpError, ResourceIdentifier, ResourceStore};

use super::{
    BodyBinder, DeleteOperation, GetOperation, HeadOperation, OptionsOperation, ParsedBodyBinder,
    PendingOperation, PostOperation, PutOperation,
};

type Constructor = fn(Arc<dyn ResourceStore>, ResourceIdentifier) -> PendingOperation;

const OPERATIONS: [(&str, Constructor); 7] = [
    ("GET", |_, target| {
        PendingOperation::Ready(Box::new(GetOperation::new(target)))
    }),
    ("HEAD", |_, target| {
        PendingOperation::Ready(Box::new(HeadOperation::new(target)))
    }),
    ("OPTIONS", |_, target| {
        PendingOperation::Ready(Box::new(OptionsOperation::new(target)))
    }),
    ("POST", |store, target| {
        PendingOperation::NeedsBody(BodyBinder::new(store, target, |store, target, body| {
            Box::new(PostOperation::new(store, target, body))
        }))
    }),
    ("PUT", |store, target| {
        PendingOperation::NeedsBody(BodyBinder::new(store, target, |store, target, body| {
            Box::new(PutOperation::new(store, target, body))
        }))
    }),
    ("DELETE", |store, target| {
        PendingOperation::Ready(Box::new(DeleteOperation::new(store, target)))
    }),
    ("PATCH", |store, target| {
        PendingOperation::NeedsParsedBody(ParsedBodyBinder { store, target })
    }),
];

/// Builds operation variants bound to one storage collaborator.
#[derive(Clone)]
pub struct OperationFactory {
    store: Arc<dyn ResourceStore>,
}

impl OperationFactory {
    #[must_use]
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self { store }
    }

    /// Build the variant for `method`, bound to `target`.
    ///
    /// Method names are matched case-sensitively.
    ///
    /// # Errors
    ///
    /// Returns [`LdpError::UnsupportedMethod`] for any method outside
    /// GET, HEAD, OPTIONS, POST, PUT, DELETE and PATCH.
    pub fn create(
        &self,
        method: &Method,
        target: ResourceIdentifier,
    ) -> Result<PendingOperation, LdpError> {
        let (_, construct) = OPERATIONS
            .iter()
            .find(|(name, _)| *name == method.as_str())
            .ok_or_else(|| LdpError::UnsupportedMethod(method.as_str().to_owned()))?;
        Ok(construct(self.store.clone(), target))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use ldp_dispatch_sdk::{PermissionSet, Representation};

    use super::*;
    use crate::operations::test_support::{RecordingStore, StoreCall, parsed_body, target};

    fn factory() -> (Arc<RecordingStore>, OperationFactory) {
        let store = Arc::new(RecordingStore::default());
        (store.clone(), OperationFactory::new(store))
    }

    #[test]
    fn builds_body_less_variants_ready() {
        let (_, factory) = factory();
        for method in [Method::GET, Method::HEAD, Method::OPTIONS, Method::DELETE] {
            match factory.create(&method, target("/foo")).unwrap() {
                PendingOperation::Ready(operation) => assert_eq!(operation.method(), method),
                _ => panic!("{method} should not need a body"),
            }
        }
    }

    #[test]
    fn post_and_put_need_raw_body() {
        let (_, factory) = factory();
        for method in [Method::POST, Method::PUT] {
            match factory.create(&method, target("/foo")).unwrap() {
                PendingOperation::NeedsBody(binder) => {
                    let operation = binder.bind(Representation::default());
                    assert_eq!(operation.method(), method);
                    assert_eq!(operation.target(), &target("/foo"));
                }
                _ => panic!("{method} should need a raw body"),
            }
        }
    }

    #[tokio::test]
    async fn patch_needs_parsed_body() {
        let (store, factory) = factory();
        let PendingOperation::NeedsParsedBody(binder) =
            factory.create(&Method::PATCH, target("/foo")).unwrap()
        else {
            panic!("PATCH should need a parsed body");
        };

        let operation = binder.bind(parsed_body(PermissionSet::APPEND_ONLY));
        assert_eq!(operation.method(), Method::PATCH);
        assert_eq!(operation.required_permissions(), PermissionSet::APPEND_ONLY);

        operation.perform_modification().await.unwrap();
        assert_eq!(
            store.calls(),
            vec![StoreCall::Modify(target("/foo"), PermissionSet::APPEND_ONLY)]
        );
    }

    #[test]
    fn pending_operation_exposes_target() {
        let (_, factory) = factory();
        for method in [Method::GET, Method::POST, Method::PATCH] {
            let pending = factory.create(&method, target("/a/b")).unwrap();
            assert_eq!(pending.target(), &target("/a/b"));
        }
    }

    #[test]
    fn rejects_unsupported_methods() {
        let (_, factory) = factory();
        for method in [Method::TRACE, Method::CONNECT] {
            let err = factory.create(&method, target("/foo")).err().unwrap();
            assert!(matches!(err, LdpError::UnsupportedMethod(ref m) if m == method.as_str()));
        }
    }

    #[test]
    fn method_lookup_is_case_sensitive() {
        let (_, factory) = factory();
        let method = Method::from_bytes(b"get").unwrap();
        assert!(matches!(
            factory.create(&method, target("/foo")),
            Err(LdpError::UnsupportedMethod(_))
        ));
    }
}
