#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static ACL plugin for LDP dispatch.
//!
//! Answers authorization checks from a grant table in configuration, or
//! allows everything. Intended for development and tests.

pub mod config;
pub mod domain;

pub use config::{AclMode, GrantConfig, StaticAclPluginConfig};
pub use domain::Service;
