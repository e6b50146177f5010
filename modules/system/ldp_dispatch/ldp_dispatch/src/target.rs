//! Target resolution: raw path + host header into a [`ResourceIdentifier`].

use std::sync::LazyLock;

use http::header::HOST;
use http::request::Parts;
use ldp_dispatch_sdk::{ResourceIdentifier, TargetError};
use regex::Regex;

use crate::config::LdpDispatchConfig;

#[allow(clippy::expect_used)]
static VALID_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z0-9-]+\.)*[a-z0-9-]+$").expect("valid host pattern"));

#[allow(clippy::expect_used)]
static PORT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\d+$").expect("valid port pattern"));

/// Resolves the resource addressed by a request.
#[derive(Debug, Clone)]
pub struct TargetExtractor {
    acl_extension: String,
}

impl Default for TargetExtractor {
    fn default() -> Self {
        Self::from_config(&LdpDispatchConfig::default())
    }
}

impl TargetExtractor {
    #[must_use]
    pub fn new(acl_extension: impl Into<String>) -> Self {
        Self {
            acl_extension: acl_extension.into(),
        }
    }

    #[must_use]
    pub fn from_config(cfg: &LdpDispatchConfig) -> Self {
        Self::new(cfg.acl_extension.clone())
    }

    /// Resolve the target of a request from its URI path and `Host` header.
    ///
    /// # Errors
    ///
    /// See [`TargetExtractor::extract`].
    pub fn extract_from_parts(&self, parts: &Parts) -> Result<ResourceIdentifier, TargetError> {
        let host = parts
            .headers
            .get(HOST)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
        self.extract(parts.uri.path(), host.as_deref())
    }

    /// Resolve a raw request path (query string allowed) and host.
    ///
    /// # Errors
    ///
    /// - [`TargetError::InvalidEncoding`] if the percent-decoded path is not UTF-8
    /// - [`TargetError::DisallowedSegment`] if the decoded path contains `/..`
    /// - [`TargetError::InvalidHostname`] if the host is missing or malformed
    pub fn extract(
        &self,
        raw_path: &str,
        host: Option<&str>,
    ) -> Result<ResourceIdentifier, TargetError> {
        let raw_path = raw_path.split_once('?').map_or(raw_path, |(path, _)| path);
        let decoded = urlencoding::decode(raw_path).map_err(|_| TargetError::InvalidEncoding {
            path: raw_path.to_owned(),
        })?;

        let trimmed = decoded.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        // Substring match: names that merely start with `..` are rejected too.
        if path.contains("/..") {
            return Err(TargetError::DisallowedSegment {
                path: raw_path.to_owned(),
            });
        }
        let is_acl = path.ends_with(&self.acl_extension);

        let domain = PORT_SUFFIX.replace(host.unwrap_or_default(), "");
        if !VALID_HOST.is_match(&domain) {
            let host = if domain.is_empty() {
                "(none)".to_owned()
            } else {
                domain.into_owned()
            };
            return Err(TargetError::InvalidHostname { host });
        }

        Ok(ResourceIdentifier::new(path, domain, is_acl))
    }
}
