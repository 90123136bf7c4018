//! AI21 adapter
//!
//! Jurassic models take a flat `prompt` with camelCase parameters; the
//! answer sits two levels deep, at `completions[0].data.text`.

use super::VendorAdapter;
use playground_application::ports::answer_gateway::ParseError;
use playground_domain::generation::AI21_DEFAULTS;
use playground_domain::{Question, Vendor};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    stop_sequences: &'static [&'static str],
}

#[derive(Deserialize)]
struct Response {
    completions: Vec<Completion>,
}

#[derive(Deserialize)]
struct Completion {
    data: CompletionData,
}

#[derive(Deserialize)]
struct CompletionData {
    text: String,
}

pub struct Ai21Adapter;

impl VendorAdapter for Ai21Adapter {
    fn vendor(&self) -> Vendor {
        Vendor::Ai21
    }

    fn build_request(&self, question: &Question) -> Vec<u8> {
        let request = Request {
            prompt: question.content(),
            max_tokens: AI21_DEFAULTS.max_tokens,
            temperature: AI21_DEFAULTS.temperature,
            top_p: AI21_DEFAULTS.top_p,
            stop_sequences: AI21_DEFAULTS.stop_sequences,
        };
        serde_json::to_vec(&request).expect("static request shape serializes")
    }

    fn parse_response(&self, body: &[u8]) -> Result<String, ParseError> {
        let response: Response =
            serde_json::from_slice(body).map_err(|e| ParseError::envelope(Vendor::Ai21, e))?;
        response
            .completions
            .into_iter()
            .next()
            .map(|completion| completion.data.text)
            .ok_or_else(|| ParseError::missing(Vendor::Ai21, "completions[0].data.text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendors::test_support::request_json;

    #[test]
    fn request_embeds_the_fixed_parameters() {
        let body = request_json(&Ai21Adapter, "What is Rust?");

        assert_eq!(body["prompt"], "What is Rust?");
        assert_eq!(body["maxTokens"], AI21_DEFAULTS.max_tokens);
        assert_eq!(body["temperature"], AI21_DEFAULTS.temperature);
        assert_eq!(body["topP"], AI21_DEFAULTS.top_p);
        assert_eq!(body["stopSequences"], serde_json::json!([]));
        // camelCase, unlike the snake_case vendors
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn extracts_nested_completion_text() {
        let body = br#"{"completions": [{"data": {"text": "deep answer"}}]}"#;
        assert_eq!(Ai21Adapter.parse_response(body).unwrap(), "deep answer");
    }

    #[test]
    fn empty_completions_array_is_a_parse_error() {
        let err = Ai21Adapter
            .parse_response(br#"{"completions": []}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingText {
                vendor: Vendor::Ai21,
                path: "completions[0].data.text"
            }
        ));
    }

    #[test]
    fn completion_without_data_is_a_parse_error() {
        assert!(
            Ai21Adapter
                .parse_response(br#"{"completions": [{"text": "flat"}]}"#)
                .is_err()
        );
    }
}
