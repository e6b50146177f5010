//! Error types for the LDP dispatch pipeline and its collaborators.

use http::StatusCode;
use thiserror::Error;

/// Target resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("Disallowed /.. segment in URL {path}")]
    DisallowedSegment { path: String },

    #[error("Invalid percent-encoding in URL {path}")]
    InvalidEncoding { path: String },

    /// `host` is `(none)` when the request carries no host.
    #[error("Invalid hostname: {host}")]
    InvalidHostname { host: String },
}

/// Failure raised by a body parser while decoding a body it claimed to support.
#[derive(Debug, Error)]
pub enum BodyParseError {
    #[error("unsupported body: {0}")]
    Unsupported(String),

    #[error("malformed body: {0}")]
    Malformed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failure raised while applying a patch.
#[derive(Debug, Error)]
#[error("patch could not be applied: {0}")]
pub struct PatchError(pub String);

/// Failure of the storage collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("storage error: {0}")]
    Internal(String),
}

/// Failure of the authorization collaborator.
///
/// The pipeline never surfaces this error: any failure is treated as a denial.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    #[error("authorization service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("authorization internal error: {0}")]
    Internal(String),
}

/// Terminal outcome of a request that did not succeed.
#[derive(Debug, Error)]
pub enum LdpError {
    #[error("invalid target: {0}")]
    InvalidTarget(#[from] TargetError),

    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("no body parser supports content type {}", .content_type.as_deref().unwrap_or("(none)"))]
    NoMatchingParser { content_type: Option<String> },

    #[error("request body could not be parsed")]
    BodyParseFailure(#[source] BodyParseError),

    #[error("authentication required")]
    AuthenticationRequired,

    #[error("insufficient permission")]
    InsufficientPermission,

    #[error("storage operation failed")]
    Storage(#[source] StoreError),

    /// The request could not be completed (e.g. an operation panicked).
    #[error("internal error: {0}")]
    Internal(String),
}

impl LdpError {
    /// HTTP status the transport should report for this outcome.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidTarget(_) | Self::BodyParseFailure(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::NoMatchingParser { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            Self::InsufficientPermission => StatusCode::FORBIDDEN,
            Self::Storage(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Storage(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
