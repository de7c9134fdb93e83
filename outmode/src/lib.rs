//! # Outmode
//!
//! Structured output mode lookup for LLM model/provider pairs.
//!
//! Outmode ships an immutable registry of models and the provider routes that
//! serve them, and answers one question: how should this model on this
//! provider be asked for schema-constrained output?
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! outmode = { version = "0.1", features = ["schema"] }
//! ```
//!
//! ```
//! use outmode::prelude::*;
//!
//! let resolver = ModeResolver::builtin();
//!
//! let mode = resolver.resolve_default("gpt_4_1", ProviderName::OpenAi);
//! assert_eq!(mode, StructuredOutputMode::JsonSchema);
//!
//! // Misses fall back to the caller's default
//! let options = ResolveOptions::new().with_default(StructuredOutputMode::JsonInstructions);
//! let mode = resolver.resolve_mode("invalid_model_name", ProviderName::OpenAi, &options);
//! assert_eq!(mode, StructuredOutputMode::JsonInstructions);
//! ```
//!
//! ## Feature Flags
//!
//! - `schema`: re-exports `schemars` for building schemas handed to strategies
//! - `full`: All features enabled

// Re-export core types and traits
pub use outmode_core::*;

// Re-export schemars when schema feature is enabled
#[cfg(feature = "schema")]
pub mod schemars {
    pub use ::schemars::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    //! Prelude module containing the most commonly used types and traits.
    //!
    //! ```
    //! use outmode::prelude::*;
    //! ```

    pub use crate::{
        ChatCompletionRequest, JsonOutputStrategy, Message, ModeResolver, Model, ModelName,
        ModelRegistry, OutmodeError, ProviderEntry, ProviderName, ResolveOptions, Result,
        StructuredOutputMode,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_resolves() {
        let resolver = ModeResolver::default();
        assert_eq!(
            resolver.resolve_default("claude_3_5_sonnet", ProviderName::Anthropic),
            StructuredOutputMode::FunctionCalling
        );
    }

    #[test]
    fn test_resolved_strategy_shapes_request() {
        let resolver = ModeResolver::builtin();
        let strategy = resolver.resolve_strategy(
            "gpt_4_1",
            ProviderName::OpenAi,
            &ResolveOptions::new(),
        );

        let mut req = ChatCompletionRequest::new("gpt-4.1", vec![Message::user("Hi")]);
        let schema = serde_json::json!({"type": "object"});
        strategy.apply(&mut req, &schema).unwrap();

        assert!(matches!(
            req.response_format,
            Some(crate::ResponseFormat::JsonSchema { strict: true, .. })
        ));
    }
}
