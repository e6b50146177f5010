//! Request pipeline: credentials and target, operation, body, permissions,
//! authorization, execution.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use bytes::Bytes;
use futures::FutureExt;
use http::Request;
use ldp_dispatch_sdk::{
    AuthorizationClient, CredentialsExtractor, LdpError, PermissionFlags, PermissionSet,
    Representation, RequestBodyParser, ResourceIdentifier, ResourceStore, Responder,
};

use crate::body::{BodyParserSelector, content_type};
use crate::config::LdpDispatchConfig;
use crate::gate::AuthorizationGate;
use crate::method::MethodExtractor;
use crate::operations::{LdpOperation, OperationFactory, PendingOperation};
use crate::target::TargetExtractor;

/// Dispatches requests to operations, authorizing each before it runs.
///
/// One pipeline serves all requests concurrently; it holds no per-request
/// state.
#[derive(Clone)]
pub struct RequestPipeline {
    targets: TargetExtractor,
    methods: MethodExtractor,
    factory: OperationFactory,
    parsers: BodyParserSelector,
    gate: AuthorizationGate,
    credentials: Arc<dyn CredentialsExtractor>,
}

impl RequestPipeline {
    /// Build a pipeline. `parsers` are probed in order for PATCH bodies.
    #[must_use]
    pub fn new(
        cfg: &LdpDispatchConfig,
        store: Arc<dyn ResourceStore>,
        authz: Arc<dyn AuthorizationClient>,
        credentials: Arc<dyn CredentialsExtractor>,
        parsers: Vec<Arc<dyn RequestBodyParser>>,
    ) -> Self {
        Self {
            targets: TargetExtractor::from_config(cfg),
            methods: MethodExtractor::from_config(cfg),
            factory: OperationFactory::new(store),
            parsers: BodyParserSelector::new(parsers),
            gate: AuthorizationGate::new(authz),
            credentials,
        }
    }

    /// Handle one request and return the resulting resource, if any.
    ///
    /// Nothing is written to the store unless authorization succeeded.
    ///
    /// # Errors
    ///
    /// Returns the [`LdpError`] of the first step that failed.
    #[tracing::instrument(
        skip_all,
        fields(method = %request.method(), path = %request.uri().path())
    )]
    pub async fn handle(
        &self,
        request: Request<Bytes>,
    ) -> Result<Option<ResourceIdentifier>, LdpError> {
        let (parts, body) = request.into_parts();

        let agent = self.credentials.extract(&parts.headers);
        let target = self.targets.extract_from_parts(&parts)?;

        let method = self.methods.extract(&parts);
        let operation = match self.factory.create(&method, target)? {
            PendingOperation::Ready(operation) => operation,
            PendingOperation::NeedsBody(binder) => {
                binder.bind(Representation::new(content_type(&parts.headers), body))
            }
            PendingOperation::NeedsParsedBody(binder) => {
                binder.bind(self.parsers.parse(body, &parts.headers).await?)
            }
        };

        let required = required_permissions(operation.as_ref());
        self.gate
            .authorize(&agent, operation.target(), required)
            .await?;

        if operation.performs_modification() {
            operation
                .perform_modification()
                .await
                .map_err(LdpError::Storage)
        } else {
            Ok(Some(operation.target().clone()))
        }
    }

    /// Handle one request and report its outcome to `responder`.
    ///
    /// The responder receives exactly one call, including when handling
    /// panics.
    pub async fn handle_request(&self, request: Request<Bytes>, responder: &dyn Responder) {
        let outcome = AssertUnwindSafe(self.handle(request))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(LdpError::Internal(panic_message(panic.as_ref()))));

        match outcome {
            Ok(resource) => responder.respond(resource).await,
            Err(e) => responder.fail(e).await,
        }
    }
}

/// The operation's permissions, plus `control` when the target is an ACL.
fn required_permissions(operation: &dyn LdpOperation) -> PermissionSet {
    let required = operation.required_permissions();
    if operation.target().is_acl {
        required.update(PermissionFlags::new().control(true))
    } else {
        required
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "request handling panicked".to_owned())
}
