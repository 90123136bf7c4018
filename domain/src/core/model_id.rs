//! Model identifier and vendor value objects

use serde::{Deserialize, Serialize};

/// The vendor families whose models the playground can invoke (Value Object)
///
/// This is a closed set: routing is an exhaustive match on this enum, never
/// a lookup by method name or string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Anthropic,
    Meta,
    Mistral,
    Cohere,
    Amazon,
    Ai21,
}

impl Vendor {
    /// Resolve a vendor from the leading token of a model identifier.
    ///
    /// Returns `None` for unrecognized prefixes — callers must treat that as
    /// an error, never fall back to a default vendor.
    pub fn from_prefix(prefix: &str) -> Option<Vendor> {
        match prefix {
            "anthropic" => Some(Vendor::Anthropic),
            // The Claude-3 entries shipped in the model catalog with this
            // misspelled prefix. They are live identifiers, so the typo is a
            // compatibility rule here, not something to correct.
            "antrhopic" => Some(Vendor::Anthropic),
            "meta" => Some(Vendor::Meta),
            "mistral" => Some(Vendor::Mistral),
            "cohere" => Some(Vendor::Cohere),
            "amazon" => Some(Vendor::Amazon),
            "ai21" => Some(Vendor::Ai21),
            _ => None,
        }
    }

    /// Canonical lowercase name for this vendor
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Anthropic => "anthropic",
            Vendor::Meta => "meta",
            Vendor::Mistral => "mistral",
            Vendor::Cohere => "cohere",
            Vendor::Amazon => "amazon",
            Vendor::Ai21 => "ai21",
        }
    }

    /// All vendors, in catalog order
    pub fn all() -> [Vendor; 6] {
        [
            Vendor::Anthropic,
            Vendor::Meta,
            Vendor::Mistral,
            Vendor::Cohere,
            Vendor::Amazon,
            Vendor::Ai21,
        ]
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A Bedrock model identifier (Value Object)
///
/// Opaque to everything except vendor resolution: the substring before the
/// first `.` selects the wire schema, the rest names the concrete variant
/// and is passed through to the transport untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the full identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading vendor token (everything before the first `.`)
    pub fn prefix(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// Resolve the vendor family for this identifier, if recognized
    pub fn vendor(&self) -> Option<Vendor> {
        Vendor::from_prefix(self.prefix())
    }

    /// The model identifiers offered in the playground's selection menu.
    ///
    /// The dispatcher does not consult this list — any identifier with a
    /// recognized prefix is routable. The two `antrhopic.*` entries are the
    /// misspelled Claude-3 identifiers; see [`Vendor::from_prefix`].
    pub fn catalog() -> Vec<ModelId> {
        [
            "anthropic.claude-instant-v1",
            "anthropic.claude-v2",
            "anthropic.claude-v2:1",
            "antrhopic.claude-3-haiku-20240307-v1:0",
            "antrhopic.claude-3-sonnet-20240229-v1:0",
            "mistral.mistral-7b-instruct-v0:2",
            "mistral.mixtral-8x7b-instruct-v0:1",
            "mistral.mistral-large-2402-v1:0",
            "meta.llama2-13b-chat-v1",
            "meta.llama2-70b-chat-v1",
            "meta.llama3-8b-instruct-v1:0",
            "meta.llama3-70b-instruct-v1:0",
            "cohere.command-text-v14",
            "cohere.command-light-text-v14",
            "amazon.titan-text-lite-v1",
            "amazon.titan-text-express-v1",
            "ai21.j2-mid-v1",
            "ai21.j2-ultra-v1",
        ]
        .into_iter()
        .map(ModelId::new)
        .collect()
    }

    /// The catalog's first entry, used when no model is configured
    pub fn default_model() -> ModelId {
        ModelId::new("anthropic.claude-instant-v1")
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        ModelId::new(s)
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        ModelId::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_token_before_first_dot() {
        let id = ModelId::new("meta.llama3-8b-instruct-v1:0");
        assert_eq!(id.prefix(), "meta");
    }

    #[test]
    fn prefix_of_dotless_identifier_is_whole_string() {
        let id = ModelId::new("llama");
        assert_eq!(id.prefix(), "llama");
        assert_eq!(id.vendor(), None);
    }

    #[test]
    fn every_vendor_prefix_resolves() {
        for (prefix, vendor) in [
            ("anthropic", Vendor::Anthropic),
            ("meta", Vendor::Meta),
            ("mistral", Vendor::Mistral),
            ("cohere", Vendor::Cohere),
            ("amazon", Vendor::Amazon),
            ("ai21", Vendor::Ai21),
        ] {
            assert_eq!(Vendor::from_prefix(prefix), Some(vendor));
        }
    }

    #[test]
    fn misspelled_claude3_prefix_resolves_to_anthropic() {
        let id = ModelId::new("antrhopic.claude-3-haiku-20240307-v1:0");
        assert_eq!(id.vendor(), Some(Vendor::Anthropic));
    }

    #[test]
    fn unknown_prefix_resolves_to_none() {
        assert_eq!(ModelId::new("unknown.vendor-v1").vendor(), None);
        // Case-sensitive: these are wire identifiers, not user input
        assert_eq!(Vendor::from_prefix("Anthropic"), None);
    }

    #[test]
    fn whole_catalog_is_routable() {
        for id in ModelId::catalog() {
            assert!(id.vendor().is_some(), "catalog entry {} has no vendor", id);
        }
    }

    #[test]
    fn default_model_is_first_catalog_entry() {
        assert_eq!(ModelId::default_model(), ModelId::catalog()[0]);
    }
}
