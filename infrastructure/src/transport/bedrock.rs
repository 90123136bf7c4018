//! Bedrock Runtime transport
//!
//! Implements `ModelTransport` over the AWS Bedrock Runtime `InvokeModel`
//! operation. The request and response bodies are opaque JSON blobs here —
//! vendor schemas are the adapters' concern. Handles AWS credential
//! initialization from the configured region and profile.

use crate::config::FileAwsConfig;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_smithy_types::Blob;
use playground_application::ports::model_transport::{ModelTransport, TransportError};
use tracing::{debug, info, warn};

const CONTENT_TYPE_JSON: &str = "application/json";

pub struct BedrockRuntimeTransport {
    client: BedrockClient,
    region: String,
}

impl BedrockRuntimeTransport {
    /// Create a new Bedrock Runtime transport.
    ///
    /// Initializes AWS credentials and creates a Bedrock Runtime client.
    pub async fn new(config: &FileAwsConfig) -> Self {
        let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(ref profile) = config.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        let aws_config = aws_config_loader.load().await;
        let client = BedrockClient::new(&aws_config);

        info!(region = %config.region, "Bedrock Runtime transport initialized");

        Self {
            client,
            region: config.region.clone(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl ModelTransport for BedrockRuntimeTransport {
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        debug!(model = model_id, bytes = body.len(), "Calling Bedrock InvokeModel");

        let response = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(CONTENT_TYPE_JSON)
            .accept(CONTENT_TYPE_JSON)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                let err = convert_invoke_error(e);
                warn!(model = model_id, error = %err, "InvokeModel failed");
                err
            })?;

        Ok(response.body().clone().into_inner())
    }
}

/// Map an SDK invoke error onto the transport error taxonomy.
fn convert_invoke_error(err: SdkError<InvokeModelError>) -> TransportError {
    match err {
        SdkError::ServiceError(context) => {
            let service_err = context.into_err();
            if service_err.is_throttling_exception()
                || service_err.is_service_quota_exceeded_exception()
            {
                TransportError::Throttled(service_err.to_string())
            } else if service_err.is_access_denied_exception() {
                TransportError::Auth(service_err.to_string())
            } else {
                TransportError::Service(service_err.to_string())
            }
        }
        other => TransportError::Connection(other.to_string()),
    }
}
