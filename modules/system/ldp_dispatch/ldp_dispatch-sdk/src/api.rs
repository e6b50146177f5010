//! Collaborator traits consumed by the request pipeline.
//!
//! Implementations must be safe for concurrent use: the pipeline shares one
//! instance of each collaborator across all in-flight requests and does not
//! serialize access.

use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

use crate::error::{AuthorizationError, BodyParseError, LdpError, StoreError};
use crate::identifier::ResourceIdentifier;
use crate::models::{Agent, ParsedRequestBody, Representation};
use crate::permissions::PermissionSet;

/// Storage engine holding resource representations.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Obtain a representation of the given resource.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the resource cannot be read.
    async fn get_representation(
        &self,
        target: &ResourceIdentifier,
    ) -> Result<Representation, StoreError>;

    /// Add a resource to the `container` and return its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the resource cannot be created.
    async fn add_resource(
        &self,
        container: &ResourceIdentifier,
        representation: &Representation,
    ) -> Result<ResourceIdentifier, StoreError>;

    /// Set or replace the representation of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the representation cannot be stored.
    async fn set_representation(
        &self,
        target: &ResourceIdentifier,
        representation: &Representation,
    ) -> Result<(), StoreError>;

    /// Delete the given resource.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the resource cannot be deleted.
    async fn delete_resource(&self, target: &ResourceIdentifier) -> Result<(), StoreError>;

    /// Apply a patch to the given resource.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the patch cannot be applied.
    async fn modify_resource(
        &self,
        target: &ResourceIdentifier,
        patch: &ParsedRequestBody,
    ) -> Result<(), StoreError>;
}

/// Authorization decision engine.
#[async_trait]
pub trait AuthorizationClient: Send + Sync {
    /// Verify whether `agent` holds `required` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError`] if no decision could be made. Callers
    /// treat this as a denial.
    async fn has_permissions(
        &self,
        agent: &Agent,
        target: &ResourceIdentifier,
        required: PermissionSet,
    ) -> Result<bool, AuthorizationError>;
}

/// Derives the requesting agent from request headers.
pub trait CredentialsExtractor: Send + Sync {
    /// Extract the agent. Never fails: unusable credentials yield an
    /// anonymous agent.
    fn extract(&self, headers: &HeaderMap) -> Agent;
}

/// Format-specific request body parser.
#[async_trait]
pub trait RequestBodyParser: Send + Sync {
    /// Whether this parser handles a body accompanied by `headers`.
    fn supports(&self, headers: &HeaderMap) -> bool;

    /// Decode `body` into a structured patch.
    ///
    /// # Errors
    ///
    /// Returns [`BodyParseError`] if the body is malformed.
    async fn parse(
        &self,
        body: Bytes,
        headers: &HeaderMap,
    ) -> Result<ParsedRequestBody, BodyParseError>;
}

/// Response-writing boundary.
///
/// Receives exactly one call per request: `respond` on success, `fail` for
/// every terminal error outcome.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Report a successful request. `resource` is absent for operations that
    /// leave no resource behind (DELETE).
    async fn respond(&self, resource: Option<ResourceIdentifier>);

    /// Report a terminal error outcome; map it with [`LdpError::status`].
    async fn fail(&self, error: LdpError);
}
