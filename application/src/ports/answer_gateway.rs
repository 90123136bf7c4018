//! Answer gateway port
//!
//! The dispatcher's inbound contract: resolve a model identifier to a vendor
//! schema, perform one transport round trip, and hand back the extracted
//! answer text. Implementations live in the infrastructure layer.

use super::model_transport::TransportError;
use async_trait::async_trait;
use playground_domain::{ModelId, Question, Vendor};
use thiserror::Error;

/// A vendor response body that could not be decoded.
///
/// Either kind means the vendor's envelope contract drifted; the answer is
/// never silently defaulted to empty text.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Body was not valid JSON, or the top-level shape did not match the
    /// vendor's envelope.
    #[error("{vendor} response did not match the expected envelope: {detail}")]
    Envelope { vendor: Vendor, detail: String },

    /// Envelope decoded, but the text field was absent (e.g. an empty
    /// candidate array).
    #[error("{vendor} response is missing `{path}`")]
    MissingText { vendor: Vendor, path: &'static str },
}

impl ParseError {
    pub fn envelope(vendor: Vendor, err: serde_json::Error) -> Self {
        ParseError::Envelope {
            vendor,
            detail: err.to_string(),
        }
    }

    pub fn missing(vendor: Vendor, path: &'static str) -> Self {
        ParseError::MissingText { vendor, path }
    }
}

/// Errors that can occur while dispatching a question
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The identifier's prefix matched no registered vendor. The transport
    /// is never invoked in this case.
    #[error("Unknown vendor prefix in model id: {0}")]
    UnknownVendor(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Gateway that answers one question with one model invocation
#[async_trait]
pub trait AnswerGateway: Send + Sync {
    /// Ask `model` the given question and return its answer text verbatim.
    async fn ask(&self, model: &ModelId, question: &Question) -> Result<String, GatewayError>;
}
