#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! LDP Dispatch SDK
//!
//! This crate provides the public contracts of the `ldp_dispatch` module:
//!
//! - [`PermissionSet`], [`PermissionFlags`] - Permission lattice (read/write/append/control)
//! - [`ResourceIdentifier`] - Resolved request target
//! - [`Agent`], [`Representation`], [`Patch`], [`ParsedRequestBody`] - Request models
//! - [`ResourceStore`], [`AuthorizationClient`], [`CredentialsExtractor`],
//!   [`RequestBodyParser`], [`Responder`] - Collaborator traits
//! - [`LdpError`] - Terminal outcomes, mapped to HTTP status by [`LdpError::status`]
//!
//! ## Usage
//!
//! ```ignore
//! use ldp_dispatch_sdk::{AuthorizationClient, PermissionSet};
//!
//! let allowed = authz
//!     .has_permissions(&agent, &target, PermissionSet::READ_ONLY)
//!     .await?;
//! ```

pub mod api;
pub mod error;
pub mod identifier;
pub mod models;
pub mod permissions;

// Re-export main types at crate root
pub use api::{
    AuthorizationClient, CredentialsExtractor, RequestBodyParser, Responder, ResourceStore,
};
pub use error::{
    AuthorizationError, BodyParseError, LdpError, PatchError, StoreError, TargetError,
};
pub use identifier::ResourceIdentifier;
pub use models::{Agent, ParsedRequestBody, Patch, Representation};
pub use permissions::{PermissionFlags, PermissionSet};
