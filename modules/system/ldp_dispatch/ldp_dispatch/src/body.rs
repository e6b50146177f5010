//! Body parser selection.

use std::sync::Arc;

use bytes::Bytes;
use http::HeaderMap;
use http::header::CONTENT_TYPE;
use ldp_dispatch_sdk::{LdpError, ParsedRequestBody, RequestBodyParser};

/// Ordered list of body parsers; the first that supports a request wins.
#[derive(Clone, Default)]
pub struct BodyParserSelector {
    parsers: Vec<Arc<dyn RequestBodyParser>>,
}

impl BodyParserSelector {
    #[must_use]
    pub fn new(parsers: Vec<Arc<dyn RequestBodyParser>>) -> Self {
        Self { parsers }
    }

    /// Parse `body` with the first parser whose `supports` accepts `headers`.
    ///
    /// Parsers after the first match are never probed, and a parse failure is
    /// not retried with another parser.
    ///
    /// # Errors
    ///
    /// - [`LdpError::NoMatchingParser`] if no parser supports the request
    /// - [`LdpError::BodyParseFailure`] if the selected parser fails
    pub async fn parse(
        &self,
        body: Bytes,
        headers: &HeaderMap,
    ) -> Result<ParsedRequestBody, LdpError> {
        let parser = self
            .parsers
            .iter()
            .find(|parser| parser.supports(headers))
            .ok_or_else(|| LdpError::NoMatchingParser {
                content_type: content_type(headers),
            })?;

        parser
            .parse(body, headers)
            .await
            .map_err(LdpError::BodyParseFailure)
    }
}

/// The request's `Content-Type`, if present and readable.
pub(crate) fn content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
