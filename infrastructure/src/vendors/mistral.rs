//! Mistral adapter
//!
//! Flat `prompt` request; the answer is the first element of the `outputs`
//! candidate array.

use super::VendorAdapter;
use playground_application::ports::answer_gateway::ParseError;
use playground_domain::generation::MISTRAL_DEFAULTS;
use playground_domain::{Question, Vendor};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct Request<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
    top_k: u32,
    top_p: f64,
}

#[derive(Deserialize)]
struct Response {
    outputs: Vec<Output>,
}

#[derive(Deserialize)]
struct Output {
    text: String,
}

pub struct MistralAdapter;

impl VendorAdapter for MistralAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Mistral
    }

    fn build_request(&self, question: &Question) -> Vec<u8> {
        let request = Request {
            prompt: question.content(),
            max_tokens: MISTRAL_DEFAULTS.max_tokens,
            temperature: MISTRAL_DEFAULTS.temperature,
            top_k: MISTRAL_DEFAULTS.top_k,
            top_p: MISTRAL_DEFAULTS.top_p,
        };
        serde_json::to_vec(&request).expect("static request shape serializes")
    }

    fn parse_response(&self, body: &[u8]) -> Result<String, ParseError> {
        let response: Response =
            serde_json::from_slice(body).map_err(|e| ParseError::envelope(Vendor::Mistral, e))?;
        response
            .outputs
            .into_iter()
            .next()
            .map(|output| output.text)
            .ok_or_else(|| ParseError::missing(Vendor::Mistral, "outputs[0].text"))
    }
}
