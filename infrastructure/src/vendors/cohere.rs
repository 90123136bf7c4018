//! Cohere adapter
//!
//! Flat `prompt` request; the answer is the first element of the
//! `generations` candidate array.

use super::VendorAdapter;
use playground_application::ports::answer_gateway::ParseError;
use playground_domain::generation::COHERE_DEFAULTS;
use playground_domain::{Question, Vendor};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct Request<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct Response {
    generations: Vec<Generation>,
}

#[derive(Deserialize)]
struct Generation {
    text: String,
}

pub struct CohereAdapter;

impl VendorAdapter for CohereAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Cohere
    }

    fn build_request(&self, question: &Question) -> Vec<u8> {
        let request = Request {
            prompt: question.content(),
            max_tokens: COHERE_DEFAULTS.max_tokens,
            temperature: COHERE_DEFAULTS.temperature,
        };
        serde_json::to_vec(&request).expect("static request shape serializes")
    }

    fn parse_response(&self, body: &[u8]) -> Result<String, ParseError> {
        let response: Response =
            serde_json::from_slice(body).map_err(|e| ParseError::envelope(Vendor::Cohere, e))?;
        response
            .generations
            .into_iter()
            .next()
            .map(|generation| generation.text)
            .ok_or_else(|| ParseError::missing(Vendor::Cohere, "generations[0].text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendors::test_support::request_json;

    #[test]
    fn request_embeds_the_fixed_parameters() {
        let body = request_json(&CohereAdapter, "What is Rust?");

        assert_eq!(body["prompt"], "What is Rust?");
        assert_eq!(body["max_tokens"], COHERE_DEFAULTS.max_tokens);
        assert_eq!(body["temperature"], COHERE_DEFAULTS.temperature);
        // Cohere takes no top_p/top_k in this playground
        assert!(body.get("top_p").is_none());
        assert!(body.get("top_k").is_none());
    }

    #[test]
    fn first_candidate_wins() {
        let body = br#"{"generations": [{"text": "first"}, {"text": "second"}]}"#;
        assert_eq!(CohereAdapter.parse_response(body).unwrap(), "first");
    }

    #[test]
    fn empty_generations_array_is_a_parse_error() {
        let err = CohereAdapter
            .parse_response(br#"{"generations": []}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingText {
                vendor: Vendor::Cohere,
                path: "generations[0].text"
            }
        ));
    }
}
