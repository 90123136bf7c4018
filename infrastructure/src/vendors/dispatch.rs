//! Vendor dispatch gateway
//!
//! Implements `AnswerGateway` over the closed adapter set: the model
//! identifier's prefix selects the adapter, the adapter builds the request,
//! the injected transport is called exactly once, and the adapter parses
//! the raw response. No retries, no fallback vendor, no caching.

use super::VendorAdapter;
use super::ai21::Ai21Adapter;
use super::amazon::AmazonAdapter;
use super::anthropic::AnthropicAdapter;
use super::cohere::CohereAdapter;
use super::meta::MetaAdapter;
use super::mistral::MistralAdapter;
use async_trait::async_trait;
use playground_application::ports::answer_gateway::{AnswerGateway, GatewayError};
use playground_application::ports::model_transport::ModelTransport;
use playground_domain::{ModelId, Question, Vendor};
use std::sync::Arc;
use tracing::debug;

pub struct DispatchGateway {
    transport: Arc<dyn ModelTransport>,
}

impl DispatchGateway {
    /// Create a gateway around an injected transport.
    ///
    /// The transport's lifecycle (client construction, credentials,
    /// timeouts) is owned by the caller.
    pub fn new(transport: Arc<dyn ModelTransport>) -> Self {
        Self { transport }
    }

    fn adapter_for(vendor: Vendor) -> &'static dyn VendorAdapter {
        match vendor {
            Vendor::Anthropic => &AnthropicAdapter,
            Vendor::Meta => &MetaAdapter,
            Vendor::Mistral => &MistralAdapter,
            Vendor::Cohere => &CohereAdapter,
            Vendor::Amazon => &AmazonAdapter,
            Vendor::Ai21 => &Ai21Adapter,
        }
    }
}

#[async_trait]
impl AnswerGateway for DispatchGateway {
    async fn ask(&self, model: &ModelId, question: &Question) -> Result<String, GatewayError> {
        let vendor = model
            .vendor()
            .ok_or_else(|| GatewayError::UnknownVendor(model.to_string()))?;
        let adapter = Self::adapter_for(vendor);

        let body = adapter.build_request(question);

        debug!(model = %model, vendor = %vendor, bytes = body.len(), "Invoking model");
        let raw = self.transport.invoke(model.as_str(), body).await?;

        let answer = adapter.parse_response(&raw)?;
        Ok(answer)
    }
}
