//! Meta adapter
//!
//! Llama models take a flat `prompt` request; the answer is the top-level
//! `generation` string (no candidate array).

use super::VendorAdapter;
use playground_application::ports::answer_gateway::ParseError;
use playground_domain::generation::META_DEFAULTS;
use playground_domain::{Question, Vendor};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct Request<'a> {
    prompt: &'a str,
    max_gen_len: u32,
    temperature: f64,
    top_p: f64,
}

#[derive(Deserialize)]
struct Response {
    generation: String,
}

pub struct MetaAdapter;

impl VendorAdapter for MetaAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Meta
    }

    fn build_request(&self, question: &Question) -> Vec<u8> {
        let request = Request {
            prompt: question.content(),
            max_gen_len: META_DEFAULTS.max_gen_len,
            temperature: META_DEFAULTS.temperature,
            top_p: META_DEFAULTS.top_p,
        };
        serde_json::to_vec(&request).expect("static request shape serializes")
    }

    fn parse_response(&self, body: &[u8]) -> Result<String, ParseError> {
        let response: Response =
            serde_json::from_slice(body).map_err(|e| ParseError::envelope(Vendor::Meta, e))?;
        Ok(response.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendors::test_support::request_json;

    #[test]
    fn request_embeds_the_fixed_parameters() {
        let body = request_json(&MetaAdapter, "What is Rust?");

        assert_eq!(body["prompt"], "What is Rust?");
        assert_eq!(body["max_gen_len"], META_DEFAULTS.max_gen_len);
        assert_eq!(body["temperature"], META_DEFAULTS.temperature);
        assert_eq!(body["top_p"], META_DEFAULTS.top_p);
    }

    #[test]
    fn extracts_generation_verbatim() {
        let body = br#"{"generation": "\n Llama says hi ", "prompt_token_count": 5}"#;
        assert_eq!(MetaAdapter.parse_response(body).unwrap(), "\n Llama says hi ");
    }

    #[test]
    fn missing_generation_key_is_a_parse_error() {
        let err = MetaAdapter
            .parse_response(br#"{"outputs": [{"text": "wrong vendor"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ParseError::Envelope { vendor: Vendor::Meta, .. }));
    }
}
