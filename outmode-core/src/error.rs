//! Error types for Outmode registry and strategy operations.
//!
//! Mode resolution itself never fails; these errors surface only when a
//! registry is loaded, validated, or queried through the strict lookups,
//! and when an output strategy cannot render its instructions.

/// The main error type for Outmode operations.
#[derive(Debug, thiserror::Error)]
pub enum OutmodeError {
    /// A model name not present in the registry
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// A string that is not a known model name
    #[error("Unknown model name: {0}")]
    UnknownModel(String),

    /// A string that is not a known provider name
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// A string that is not a known structured output mode
    #[error("Unknown structured output mode: {0}")]
    UnknownMode(String),

    /// A string that is not a known model family
    #[error("Unknown model family: {0}")]
    UnknownFamily(String),

    /// A string that is not a known parser id
    #[error("Unknown parser: {0}")]
    UnknownParser(String),

    /// The same model appears twice in a registry
    #[error("Duplicate model: {0}")]
    DuplicateModel(String),

    /// The same provider appears twice within one model
    #[error("Duplicate provider {provider} for model {model}")]
    DuplicateProvider { model: String, provider: String },

    /// A provider entry whose flags contradict each other
    #[error("Invalid provider {provider} for model {model}: {message}")]
    InvalidProvider {
        model: String,
        provider: String,
        message: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors reading registry data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry data that loads but cannot be used
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl OutmodeError {
    /// Create a model not found error
    pub fn model_not_found(name: impl Into<String>) -> Self {
        Self::ModelNotFound(name.into())
    }

    /// Create a duplicate model error
    pub fn duplicate_model(name: impl Into<String>) -> Self {
        Self::DuplicateModel(name.into())
    }

    /// Create a duplicate provider error
    pub fn duplicate_provider(model: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::DuplicateProvider {
            model: model.into(),
            provider: provider.into(),
        }
    }

    /// Create an invalid provider error
    pub fn invalid_provider(
        model: impl Into<String>,
        provider: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidProvider {
            model: model.into(),
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if this error comes from parsing an unrecognized identifier
    pub fn is_unknown_identifier(&self) -> bool {
        matches!(
            self,
            OutmodeError::UnknownModel(_)
                | OutmodeError::UnknownProvider(_)
                | OutmodeError::UnknownMode(_)
                | OutmodeError::UnknownFamily(_)
                | OutmodeError::UnknownParser(_)
        )
    }

    /// Check if this error reports a broken registry invariant
    pub fn is_invalid_registry(&self) -> bool {
        matches!(
            self,
            OutmodeError::DuplicateModel(_)
                | OutmodeError::DuplicateProvider { .. }
                | OutmodeError::InvalidProvider { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutmodeError::duplicate_provider("gpt_4_1", "openai");
        assert_eq!(
            err.to_string(),
            "Duplicate provider openai for model gpt_4_1"
        );

        let err = OutmodeError::model_not_found("gpt_4_1");
        assert_eq!(err.to_string(), "Model not found: gpt_4_1");
    }

    #[test]
    fn test_error_classification() {
        assert!(OutmodeError::UnknownProvider("nope".into()).is_unknown_identifier());
        assert!(!OutmodeError::model_not_found("x").is_unknown_identifier());

        assert!(OutmodeError::duplicate_model("x").is_invalid_registry());
        assert!(OutmodeError::invalid_provider("m", "p", "bad").is_invalid_registry());
        assert!(!OutmodeError::configuration("x").is_invalid_registry());
    }
}
