//! Domain layer for bedrock-playground
//!
//! This crate contains the core value objects and has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Model identifier
//!
//! Bedrock model identifiers are opaque strings of the form
//! `<vendor>.<family>-<variant>`. The token before the first `.` names the
//! vendor family, which in turn determines the wire schema used to talk to
//! the model. [`ModelId`] owns that resolution.
//!
//! ## Vendor
//!
//! [`Vendor`] is the closed set of model families the playground can invoke:
//! Anthropic, Meta, Mistral, Cohere, Amazon, and AI21. Each vendor has its
//! own request shape, fixed generation parameters ([`generation`]), and
//! response envelope.

pub mod core;
pub mod generation;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    model_id::{ModelId, Vendor},
    question::Question,
};
