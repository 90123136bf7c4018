//! Ask Model use case.
//!
//! Drives a single question/answer exchange: validate the question, hand it
//! to the [`AnswerGateway`], return the answer. No retries, no fallback
//! model, no local recovery — gateway errors surface to the caller intact.

use crate::ports::answer_gateway::{AnswerGateway, GatewayError};
use playground_domain::{DomainError, ModelId, Question};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while asking a model.
#[derive(Error, Debug)]
pub enum AskError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the [`AskModelUseCase`].
#[derive(Debug, Clone)]
pub struct AskModelInput {
    /// The model that should answer.
    pub model: ModelId,
    /// The user's free-text question.
    pub question: String,
}

impl AskModelInput {
    pub fn new(model: ModelId, question: impl Into<String>) -> Self {
        Self {
            model,
            question: question.into(),
        }
    }
}

/// Use case for asking a single model a single question.
pub struct AskModelUseCase {
    gateway: Arc<dyn AnswerGateway>,
}

impl Clone for AskModelUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl AskModelUseCase {
    pub fn new(gateway: Arc<dyn AnswerGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the exchange and return the answer text.
    pub async fn execute(&self, input: AskModelInput) -> Result<String, AskError> {
        let question = Question::try_new(input.question)
            .ok_or_else(|| DomainError::InvalidQuestion("question is empty".to_string()))?;

        info!(model = %input.model, "Asking model");

        let answer = self.gateway.ask(&input.model, &question).await?;

        debug!(model = %input.model, chars = answer.len(), "Received answer");
        Ok(answer)
    }
}
