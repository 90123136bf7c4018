//! Infrastructure layer for bedrock-playground
//!
//! Implements the application ports:
//!
//! - [`vendors`] — one pure translation adapter per vendor family, plus the
//!   [`DispatchGateway`] that routes a model identifier to its adapter and
//!   performs exactly one transport round trip.
//! - [`transport`] — [`BedrockRuntimeTransport`], the `InvokeModel` call
//!   against the AWS Bedrock Runtime.
//! - [`config`] — TOML configuration loading with multi-source merging.

pub mod config;
pub mod transport;
pub mod vendors;

// Re-export commonly used types
pub use config::{ConfigLoader, FileAwsConfig, FileConfig};
pub use transport::bedrock::BedrockRuntimeTransport;
pub use vendors::dispatch::DispatchGateway;
