#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! LDP request dispatch.
//!
//! [`RequestPipeline`] turns an HTTP request into an authorized storage
//! operation:
//!
//! 1. extract the agent's credentials and resolve the target resource
//! 2. build the operation variant for the request method
//! 3. attach the raw or parsed request body, if the variant takes one
//! 4. compute the required permissions, adding `control` for ACL resources
//! 5. authorize, failing closed
//! 6. execute the modification, if the operation performs one
//!
//! Storage, authorization, credentials and body parsing are collaborators
//! defined in `ldp_dispatch_sdk`.

pub mod body;
pub mod config;
pub mod gate;
pub mod method;
pub mod operations;
pub mod pipeline;
pub mod target;

pub use body::BodyParserSelector;
pub use config::LdpDispatchConfig;
pub use gate::AuthorizationGate;
pub use method::MethodExtractor;
pub use operations::{LdpOperation, OperationFactory, PendingOperation};
pub use pipeline::RequestPipeline;
pub use target::TargetExtractor;
