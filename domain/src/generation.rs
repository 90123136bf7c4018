//! Fixed generation parameters per vendor family.
//!
//! Every vendor is invoked with a fixed parameter set — there is no
//! per-request override. The values live here as named constants so the
//! adapter that serializes them and the tests that assert on the wire
//! payload both read from one place.
//!
//! Field names are in each vendor's own casing convention because they map
//! 1:1 onto that vendor's request body.

/// Anthropic messages-API envelope parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnthropicDefaults {
    /// Version tag of the Bedrock messages API
    pub anthropic_version: &'static str,
    pub max_tokens: u32,
}

pub const ANTHROPIC_DEFAULTS: AnthropicDefaults = AnthropicDefaults {
    anthropic_version: "bedrock-2023-05-31",
    max_tokens: 4096,
};

/// Meta Llama text-generation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetaDefaults {
    pub max_gen_len: u32,
    pub temperature: f64,
    pub top_p: f64,
}

pub const META_DEFAULTS: MetaDefaults = MetaDefaults {
    max_gen_len: 2048,
    temperature: 0.5,
    top_p: 0.5,
};

/// Mistral text-generation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MistralDefaults {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
}

pub const MISTRAL_DEFAULTS: MistralDefaults = MistralDefaults {
    max_tokens: 4096,
    temperature: 0.0,
    top_k: 200,
    top_p: 0.5,
};

/// Cohere Command text-generation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohereDefaults {
    pub max_tokens: u32,
    pub temperature: f64,
}

pub const COHERE_DEFAULTS: CohereDefaults = CohereDefaults {
    max_tokens: 4096,
    temperature: 0.5,
};

/// Amazon Titan `textGenerationConfig` parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmazonDefaults {
    pub max_token_count: u32,
    pub stop_sequences: &'static [&'static str],
    pub temperature: f64,
    pub top_p: f64,
}

pub const AMAZON_DEFAULTS: AmazonDefaults = AmazonDefaults {
    max_token_count: 4096,
    stop_sequences: &[],
    temperature: 0.5,
    top_p: 0.5,
};

/// AI21 Jurassic text-generation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ai21Defaults {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub stop_sequences: &'static [&'static str],
}

pub const AI21_DEFAULTS: Ai21Defaults = Ai21Defaults {
    max_tokens: 4096,
    temperature: 0.5,
    top_p: 0.5,
    stop_sequences: &[],
};
