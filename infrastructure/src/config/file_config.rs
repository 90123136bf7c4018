//! Configuration schema for the TOML config file

use playground_domain::ModelId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("default model `{0}` has no recognized vendor prefix")]
    UnknownDefaultModel(String),
}

/// AWS settings (`[aws]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAwsConfig {
    /// AWS region for Bedrock (default: "us-east-1")
    pub region: String,
    /// AWS profile name for credentials
    pub profile: Option<String>,
}

impl Default for FileAwsConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
        }
    }
}

/// Default selections (`[defaults]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    /// Model used when no `-m` flag is given
    pub model: String,
}

impl Default for FileDefaultsConfig {
    fn default() -> Self {
        Self {
            model: ModelId::default_model().to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// AWS settings.
    pub aws: FileAwsConfig,
    /// Default selections.
    pub defaults: FileDefaultsConfig,
}

impl FileConfig {
    /// Check that the configured values are usable.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let model = ModelId::new(self.defaults.model.clone());
        if model.vendor().is_none() {
            return Err(ConfigValidationError::UnknownDefaultModel(
                self.defaults.model.clone(),
            ));
        }
        Ok(())
    }

    /// The default model as a typed identifier.
    pub fn default_model(&self) -> ModelId {
        ModelId::new(self.defaults.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn unknown_default_model_fails_validation() {
        let config = FileConfig {
            defaults: FileDefaultsConfig {
                model: "openai.gpt-4".to_string(),
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnknownDefaultModel(_))
        ));
    }

    #[test]
    fn toml_sections_deserialize() {
        let config: FileConfig = toml::from_str(
            r#"
            [aws]
            region = "eu-west-1"
            profile = "playground"

            [defaults]
            model = "meta.llama3-8b-instruct-v1:0"
            "#,
        )
        .unwrap();

        assert_eq!(config.aws.region, "eu-west-1");
        assert_eq!(config.aws.profile.as_deref(), Some("playground"));
        assert_eq!(config.defaults.model, "meta.llama3-8b-instruct-v1:0");
    }
}
