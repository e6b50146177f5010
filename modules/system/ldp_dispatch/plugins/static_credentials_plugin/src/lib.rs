#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static credentials plugin for LDP dispatch.
//!
//! Maps `Authorization: Bearer <token>` headers to agents from configuration.
//! Intended for development and tests.

pub mod config;
pub mod domain;

pub use config::{CredentialsMode, StaticCredentialsPluginConfig, TokenMapping};
pub use domain::Service;
