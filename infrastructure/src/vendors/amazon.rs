//! Amazon adapter
//!
//! Titan models take `inputText` plus a nested `textGenerationConfig`
//! object (camelCase throughout); the answer is the first element of the
//! `results` array at `outputText`.

use super::VendorAdapter;
use playground_application::ports::answer_gateway::ParseError;
use playground_domain::generation::AMAZON_DEFAULTS;
use playground_domain::{Question, Vendor};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request<'a> {
    input_text: &'a str,
    text_generation_config: GenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_token_count: u32,
    stop_sequences: &'static [&'static str],
    temperature: f64,
    top_p: f64,
}

#[derive(Deserialize)]
struct Response {
    results: Vec<GenerationResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerationResult {
    output_text: String,
}

pub struct AmazonAdapter;

impl VendorAdapter for AmazonAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Amazon
    }

    fn build_request(&self, question: &Question) -> Vec<u8> {
        let request = Request {
            input_text: question.content(),
            text_generation_config: GenerationConfig {
                max_token_count: AMAZON_DEFAULTS.max_token_count,
                stop_sequences: AMAZON_DEFAULTS.stop_sequences,
                temperature: AMAZON_DEFAULTS.temperature,
                top_p: AMAZON_DEFAULTS.top_p,
            },
        };
        serde_json::to_vec(&request).expect("static request shape serializes")
    }

    fn parse_response(&self, body: &[u8]) -> Result<String, ParseError> {
        let response: Response =
            serde_json::from_slice(body).map_err(|e| ParseError::envelope(Vendor::Amazon, e))?;
        response
            .results
            .into_iter()
            .next()
            .map(|result| result.output_text)
            .ok_or_else(|| ParseError::missing(Vendor::Amazon, "results[0].outputText"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendors::test_support::request_json;

    #[test]
    fn request_embeds_the_fixed_parameters() {
        let body = request_json(&AmazonAdapter, "What is Rust?");

        assert_eq!(body["inputText"], "What is Rust?");
        let config = &body["textGenerationConfig"];
        assert_eq!(config["maxTokenCount"], AMAZON_DEFAULTS.max_token_count);
        assert_eq!(config["temperature"], AMAZON_DEFAULTS.temperature);
        assert_eq!(config["topP"], AMAZON_DEFAULTS.top_p);
        assert_eq!(config["stopSequences"], serde_json::json!([]));
    }

    #[test]
    fn generation_config_is_nested_not_flattened() {
        let body = request_json(&AmazonAdapter, "hi");
        assert!(body.get("maxTokenCount").is_none());
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn first_result_wins() {
        let body = br#"{"results": [{"outputText": "first"}, {"outputText": "second"}]}"#;
        assert_eq!(AmazonAdapter.parse_response(body).unwrap(), "first");
    }

    #[test]
    fn empty_results_array_is_a_parse_error() {
        let err = AmazonAdapter
            .parse_response(br#"{"results": []}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingText {
                vendor: Vendor::Amazon,
                path: "results[0].outputText"
            }
        ));
    }
}
