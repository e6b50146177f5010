//! Read-only operations: GET, HEAD and OPTIONS.
//!
//! All three require `read` and hold no store handle; the pipeline reports
//! their target as the result.

use http::Method;
use ldp_dispatch_sdk::ResourceIdentifier;

use super::LdpOperation;

macro_rules! read_operation {
    ($(#[$doc:meta])* $name:ident, $method:expr) => {
        $(#[$doc])*
        pub struct $name {
            target: ResourceIdentifier,
        }

        impl $name {
            #[must_use]
            pub fn new(target: ResourceIdentifier) -> Self {
                Self { target }
            }
        }

        impl LdpOperation for $name {
            fn method(&self) -> Method {
                $method
            }

            fn target(&self) -> &ResourceIdentifier {
                &self.target
            }
        }
    };
}

read_operation!(
    /// Performs an LDP GET operation.
    GetOperation,
    Method::GET
);
read_operation!(
    /// Performs an LDP HEAD operation.
    HeadOperation,
    Method::HEAD
);
read_operation!(
    /// Performs an LDP OPTIONS operation.
    OptionsOperation,
    Method::OPTIONS
);
