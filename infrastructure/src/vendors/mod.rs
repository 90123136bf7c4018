//! Vendor adapters
//!
//! Each Bedrock vendor family speaks its own JSON dialect: a flat `prompt`
//! string (Meta, Mistral, Cohere, AI21 — all with different parameter
//! names), a nested messages envelope (Anthropic), or a nested generation
//! config object (Amazon Titan). Response text is likewise buried at a
//! different path per vendor.
//!
//! An adapter is a pure translation unit: question in, request bytes out;
//! response bytes in, answer text out. It never touches the network, so the
//! dispatcher can treat vendors uniformly and tests can exercise the wire
//! shapes without a transport.

pub mod ai21;
pub mod amazon;
pub mod anthropic;
pub mod cohere;
pub mod dispatch;
pub mod meta;
pub mod mistral;

use playground_application::ports::answer_gateway::ParseError;
use playground_domain::{Question, Vendor};

/// Per-vendor request building and response parsing
pub trait VendorAdapter: Send + Sync {
    fn vendor(&self) -> Vendor;

    /// Serialize the vendor's request body for `question`, embedding that
    /// vendor's fixed generation parameters.
    fn build_request(&self, question: &Question) -> Vec<u8>;

    /// Extract the generated text from the vendor's response envelope.
    ///
    /// The text is returned exactly as the vendor produced it — no trimming,
    /// no reformatting.
    fn parse_response(&self, body: &[u8]) -> Result<String, ParseError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Decode a built request body back into a JSON value for assertions.
    pub fn request_json(adapter: &dyn VendorAdapter, question: &str) -> serde_json::Value {
        let question = Question::try_new(question).unwrap();
        serde_json::from_slice(&adapter.build_request(&question)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_application::ports::answer_gateway::ParseError;

    fn adapters() -> Vec<Box<dyn VendorAdapter>> {
        vec![
            Box::new(anthropic::AnthropicAdapter),
            Box::new(meta::MetaAdapter),
            Box::new(mistral::MistralAdapter),
            Box::new(cohere::CohereAdapter),
            Box::new(amazon::AmazonAdapter),
            Box::new(ai21::Ai21Adapter),
        ]
    }

    /// A documented-shape response per vendor, each carrying a text payload
    /// that no other vendor's parser should be able to extract.
    fn sample_responses() -> Vec<(Vendor, &'static str)> {
        vec![
            (
                Vendor::Anthropic,
                r#"{"content": [{"type": "text", "text": "from anthropic"}]}"#,
            ),
            (Vendor::Meta, r#"{"generation": "from meta"}"#),
            (
                Vendor::Mistral,
                r#"{"outputs": [{"text": "from mistral"}]}"#,
            ),
            (
                Vendor::Cohere,
                r#"{"generations": [{"text": "from cohere"}]}"#,
            ),
            (
                Vendor::Amazon,
                r#"{"results": [{"outputText": "from amazon"}]}"#,
            ),
            (
                Vendor::Ai21,
                r#"{"completions": [{"data": {"text": "from ai21"}}]}"#,
            ),
        ]
    }

    #[test]
    fn each_parser_accepts_only_its_own_envelope() {
        for adapter in adapters() {
            for (vendor, body) in sample_responses() {
                let result = adapter.parse_response(body.as_bytes());
                if vendor == adapter.vendor() {
                    assert_eq!(
                        result.unwrap(),
                        format!("from {}", vendor),
                        "{} failed on its own envelope",
                        vendor
                    );
                } else {
                    assert!(
                        result.is_err(),
                        "{} parser accepted a {} envelope",
                        adapter.vendor(),
                        vendor
                    );
                }
            }
        }
    }

    #[test]
    fn request_bodies_never_share_top_level_fields_across_schemas() {
        // "prompt"-style vendors intentionally share that key; the structural
        // confusion risk is between the three distinct schemas (messages
        // envelope, flat prompt, nested generation config).
        let question = playground_domain::Question::try_new("hi").unwrap();

        let anthropic: serde_json::Value =
            serde_json::from_slice(&anthropic::AnthropicAdapter.build_request(&question)).unwrap();
        let amazon: serde_json::Value =
            serde_json::from_slice(&amazon::AmazonAdapter.build_request(&question)).unwrap();
        let meta: serde_json::Value =
            serde_json::from_slice(&meta::MetaAdapter.build_request(&question)).unwrap();

        assert!(anthropic.get("messages").is_some());
        assert!(anthropic.get("prompt").is_none());
        assert!(anthropic.get("inputText").is_none());

        assert!(amazon.get("inputText").is_some());
        assert!(amazon.get("messages").is_none());
        assert!(amazon.get("prompt").is_none());

        assert!(meta.get("prompt").is_some());
        assert!(meta.get("messages").is_none());
        assert!(meta.get("inputText").is_none());
    }

    #[test]
    fn non_json_body_is_an_envelope_error_for_every_vendor() {
        for adapter in adapters() {
            let err = adapter.parse_response(b"not json").unwrap_err();
            assert!(matches!(err, ParseError::Envelope { vendor, .. } if vendor == adapter.vendor()));
        }
    }
}
