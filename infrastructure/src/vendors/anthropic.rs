//! Anthropic adapter
//!
//! Claude models use the versioned Bedrock messages API: the question is
//! wrapped in a single user message holding one text content block, and the
//! answer comes back as the first block of the `content` array.

use super::VendorAdapter;
use playground_application::ports::answer_gateway::ParseError;
use playground_domain::generation::ANTHROPIC_DEFAULTS;
use playground_domain::{Question, Vendor};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct Request<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: [ContentBlock<'a>; 1],
}

#[derive(Serialize)]
struct ContentBlock<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Deserialize)]
struct Response {
    content: Vec<ResponseBlock>,
}

#[derive(Deserialize)]
struct ResponseBlock {
    text: String,
}

pub struct AnthropicAdapter;

impl VendorAdapter for AnthropicAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Anthropic
    }

    fn build_request(&self, question: &Question) -> Vec<u8> {
        let request = Request {
            anthropic_version: ANTHROPIC_DEFAULTS.anthropic_version,
            max_tokens: ANTHROPIC_DEFAULTS.max_tokens,
            messages: [Message {
                role: "user",
                content: [ContentBlock {
                    kind: "text",
                    text: question.content(),
                }],
            }],
        };
        serde_json::to_vec(&request).expect("static request shape serializes")
    }

    fn parse_response(&self, body: &[u8]) -> Result<String, ParseError> {
        let response: Response = serde_json::from_slice(body)
            .map_err(|e| ParseError::envelope(Vendor::Anthropic, e))?;
        response
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| ParseError::missing(Vendor::Anthropic, "content[0].text"))
    }
}
