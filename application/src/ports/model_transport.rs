//! Model transport port
//!
//! The generic "invoke model" operation: a target identifier plus a
//! serialized request body goes out, a serialized response body comes back.
//! The transport knows nothing about vendor schemas — both bodies are opaque
//! bytes to it — and owns any timeout or cancellation policy itself.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by the transport, surfaced to the caller unchanged.
///
/// None of these are retried here: one call to [`ModelTransport::invoke`]
/// means exactly one round trip.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Throttled by the service: {0}")]
    Throttled(String),

    #[error("Service error: {0}")]
    Service(String),
}

/// Black-box model invocation
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Send `body` to the model named by `model_id` and return the raw
    /// response body.
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, TransportError>;
}
