//! Method extraction.

use http::Method;
use http::request::Parts;

use crate::config::LdpDispatchConfig;

/// Header carrying the intended method of a tunnelled `POST`.
pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// Extracts the protocol method of a request.
///
/// `http` request heads always carry a method and default to `GET` when
/// built without one, so extraction cannot fail. With `method_override`
/// enabled, a `POST` may name another method in [`METHOD_OVERRIDE_HEADER`];
/// authorization follows the overriding method.
#[derive(Debug, Clone, Default)]
pub struct MethodExtractor {
    method_override: bool,
}

impl MethodExtractor {
    #[must_use]
    pub fn new(method_override: bool) -> Self {
        Self { method_override }
    }

    #[must_use]
    pub fn from_config(cfg: &LdpDispatchConfig) -> Self {
        Self::new(cfg.method_override)
    }

    #[must_use]
    pub fn extract(&self, parts: &Parts) -> Method {
        if self.method_override && parts.method == Method::POST {
            let overridden = parts
                .headers
                .get(METHOD_OVERRIDE_HEADER)
                .and_then(|value| Method::from_bytes(value.as_bytes()).ok());
            if let Some(method) = overridden {
                return method;
            }
        }
        parts.method.clone()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn parts(request: http::request::Builder) -> Parts {
        request.body(()).unwrap().into_parts().0
    }

    #[test]
    fn extracts_request_method() {
        let parts = parts(http::Request::builder().method(Method::PATCH));
        assert_eq!(MethodExtractor::default().extract(&parts), Method::PATCH);
    }

    #[test]
    fn defaults_to_get() {
        let parts = parts(http::Request::builder());
        assert_eq!(MethodExtractor::default().extract(&parts), Method::GET);
    }

    #[test]
    fn keeps_extension_methods() {
        let parts = parts(http::Request::builder().method("TRACE"));
        assert_eq!(MethodExtractor::default().extract(&parts).as_str(), "TRACE");
    }

    #[test]
    fn ignores_override_header_unless_enabled() {
        let parts = parts(
            http::Request::builder()
                .method(Method::POST)
                .header(METHOD_OVERRIDE_HEADER, "DELETE"),
        );
        assert_eq!(MethodExtractor::default().extract(&parts), Method::POST);
    }

    #[test]
    fn honors_override_header_on_post() {
        let parts = parts(
            http::Request::builder()
                .method(Method::POST)
                .header(METHOD_OVERRIDE_HEADER, "DELETE"),
        );
        assert_eq!(MethodExtractor::new(true).extract(&parts), Method::DELETE);
    }

    #[test]
    fn override_applies_only_to_post() {
        let parts = parts(
            http::Request::builder()
                .method(Method::GET)
                .header(METHOD_OVERRIDE_HEADER, "DELETE"),
        );
        assert_eq!(MethodExtractor::new(true).extract(&parts), Method::GET);
    }

    #[test]
    fn invalid_override_keeps_post() {
        let parts = parts(
            http::Request::builder()
                .method(Method::POST)
                .header(METHOD_OVERRIDE_HEADER, "NOT A METHOD"),
        );
        assert_eq!(MethodExtractor::new(true).extract(&parts), Method::POST);
    }
}
