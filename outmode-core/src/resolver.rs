//! Structured output mode resolution.
//!
//! [`ModeResolver::resolve_mode`] maps a `(model, provider)` pair to the mode
//! recorded in the registry. Every miss (unknown model, unknown provider for
//! the model, disallowed mode) falls back to the caller's default; resolution
//! never fails.

use crate::model::{ProviderName, StructuredOutputMode};
use crate::registry::ModelRegistry;
use crate::strategy::{strategy_for_mode, JsonOutputStrategy};
use std::sync::Arc;

/// Options for a single resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Returned on any miss
    pub default: StructuredOutputMode,
    /// Modes that must not be returned from the registry
    pub disallowed_modes: Vec<StructuredOutputMode>,
}

impl ResolveOptions {
    /// Default fallback, nothing disallowed
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback mode
    pub fn with_default(mut self, default: StructuredOutputMode) -> Self {
        self.default = default;
        self
    }

    /// Disallow one more mode
    pub fn disallow(mut self, mode: StructuredOutputMode) -> Self {
        self.disallowed_modes.push(mode);
        self
    }

    /// Replace the disallowed modes
    pub fn with_disallowed_modes(
        mut self,
        modes: impl IntoIterator<Item = StructuredOutputMode>,
    ) -> Self {
        self.disallowed_modes = modes.into_iter().collect();
        self
    }

    fn is_disallowed(&self, mode: StructuredOutputMode) -> bool {
        self.disallowed_modes.contains(&mode)
    }
}

/// Resolves structured output modes against an immutable registry.
#[derive(Debug, Clone)]
pub struct ModeResolver {
    registry: Arc<ModelRegistry>,
}

impl ModeResolver {
    /// Create a resolver over a registry
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Create a resolver over the built-in registry
    pub fn builtin() -> Self {
        Self::new(ModelRegistry::builtin())
    }

    /// The registry this resolver reads
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Resolve the structured output mode for a model/provider pair.
    ///
    /// Returns `options.default` when the model is unknown, when the model has
    /// no entry for `provider`, or when the entry's mode is disallowed. If a
    /// model lists the same provider twice, the first entry is used.
    pub fn resolve_mode(
        &self,
        model_name: &str,
        provider: ProviderName,
        options: &ResolveOptions,
    ) -> StructuredOutputMode {
        let Some(model) = self.registry.get_by_name(model_name) else {
            tracing::debug!(
                "no model {}, using default mode {}",
                model_name,
                options.default
            );
            return options.default;
        };

        let Some(entry) = model.provider(provider) else {
            tracing::debug!(
                "model {} has no provider {}, using default mode {}",
                model_name,
                provider,
                options.default
            );
            return options.default;
        };

        let mode = entry.structured_output_mode;
        if options.is_disallowed(mode) {
            tracing::debug!(
                "mode {} disallowed for {}/{}, using default mode {}",
                mode,
                model_name,
                provider,
                options.default
            );
            return options.default;
        }

        tracing::trace!("resolved {}/{} to mode {}", model_name, provider, mode);
        mode
    }

    /// Resolve with the default fallback and no disallowed modes
    pub fn resolve_default(&self, model_name: &str, provider: ProviderName) -> StructuredOutputMode {
        self.resolve_mode(model_name, provider, &ResolveOptions::default())
    }

    /// Resolve the mode and return the output strategy for it
    pub fn resolve_strategy(
        &self,
        model_name: &str,
        provider: ProviderName,
        options: &ResolveOptions,
    ) -> Box<dyn JsonOutputStrategy> {
        strategy_for_mode(self.resolve_mode(model_name, provider, options), provider)
    }
}

impl Default for ModeResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve against the built-in registry.
pub fn default_structured_output_mode(
    model_name: &str,
    provider: ProviderName,
    options: &ResolveOptions,
) -> StructuredOutputMode {
    ModeResolver::builtin().resolve_mode(model_name, provider, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Model, ModelFamily, ModelName, ProviderEntry};

    use StructuredOutputMode as Mode;

    fn resolve(model: &str, provider: ProviderName) -> Mode {
        ModeResolver::builtin().resolve_default(model, provider)
    }

    #[test]
    fn test_valid_model_and_provider_returns_provider_mode() {
        assert_eq!(resolve("gpt_4_1", ProviderName::OpenAi), Mode::JsonSchema);
    }

    #[test]
    fn test_valid_model_different_provider_modes() {
        assert_eq!(
            resolve("claude_3_5_sonnet", ProviderName::Anthropic),
            Mode::FunctionCalling
        );
        assert_eq!(
            resolve("claude_3_5_sonnet", ProviderName::Vertex),
            Mode::FunctionCallingWeak
        );
    }

    #[test]
    fn test_invalid_model_name_returns_default() {
        assert_eq!(resolve("invalid_model_name", ProviderName::OpenAi), Mode::Default);
    }

    #[test]
    fn test_invalid_model_name_returns_custom_default() {
        let options = ResolveOptions::new().with_default(Mode::JsonInstructions);
        let result =
            default_structured_output_mode("invalid_model_name", ProviderName::OpenAi, &options);
        assert_eq!(result, Mode::JsonInstructions);
    }

    #[test]
    fn test_unknown_model_ignores_provider() {
        let options = ResolveOptions::new().with_default(Mode::JsonMode);
        for provider in ProviderName::ALL {
            assert_eq!(
                default_structured_output_mode("invalid_model_name", *provider, &options),
                Mode::JsonMode
            );
        }
    }

    #[test]
    fn test_valid_model_invalid_provider_returns_default() {
        assert_eq!(resolve("gpt_4_1", ProviderName::GeminiApi), Mode::Default);
    }

    #[test]
    fn test_disallowed_modes_returns_default() {
        let options = ResolveOptions::new().disallow(Mode::JsonSchema);
        let result = default_structured_output_mode("gpt_4_1", ProviderName::OpenAi, &options);
        assert_eq!(result, Mode::Default);
    }

    #[test]
    fn test_disallowed_modes_with_custom_default() {
        let options = ResolveOptions::new()
            .with_default(Mode::JsonInstructions)
            .disallow(Mode::JsonSchema);
        let result = default_structured_output_mode("gpt_4_1", ProviderName::OpenAi, &options);
        assert_eq!(result, Mode::JsonInstructions);
    }

    #[test]
    fn test_disallowed_custom_default_is_still_returned() {
        // The fallback is returned as-is even when it is itself disallowed.
        let options = ResolveOptions::new()
            .with_default(Mode::JsonSchema)
            .disallow(Mode::JsonSchema);
        let result = default_structured_output_mode("gpt_4_1", ProviderName::OpenAi, &options);
        assert_eq!(result, Mode::JsonSchema);
    }

    #[test]
    fn test_empty_disallowed_modes_list() {
        let options = ResolveOptions::new().with_disallowed_modes(Vec::new());
        let result = default_structured_output_mode("gpt_4_1", ProviderName::OpenAi, &options);
        assert_eq!(result, Mode::JsonSchema);
        assert_eq!(options, ResolveOptions::default());
    }

    #[test]
    fn test_multiple_disallowed_modes() {
        let options = ResolveOptions::new()
            .with_disallowed_modes([Mode::JsonSchema, Mode::FunctionCalling]);
        let resolver = ModeResolver::builtin();

        assert_eq!(
            resolver.resolve_mode("gpt_4_1", ProviderName::OpenAi, &options),
            Mode::Default
        );
        assert_eq!(
            resolver.resolve_mode("claude_3_5_sonnet", ProviderName::Anthropic, &options),
            Mode::Default
        );
        assert_eq!(
            resolver.resolve_mode("claude_3_5_sonnet", ProviderName::Vertex, &options),
            Mode::FunctionCallingWeak
        );
    }

    #[test]
    fn test_reasoning_model_with_different_providers() {
        assert_eq!(
            resolve("deepseek_r1", ProviderName::OpenRouter),
            Mode::JsonInstructions
        );
    }

    #[test]
    fn test_valid_combinations() {
        let cases = [
            ("gpt_4o", ProviderName::OpenAi, Mode::JsonSchema),
            ("claude_3_5_haiku", ProviderName::Anthropic, Mode::FunctionCalling),
            ("gemini_2_5_pro", ProviderName::GeminiApi, Mode::JsonSchema),
            ("llama_3_1_8b", ProviderName::Groq, Mode::Default),
            ("qwq_32b", ProviderName::FireworksAi, Mode::JsonInstructions),
        ];
        for (model, provider, expected) in cases {
            assert_eq!(resolve(model, provider), expected, "{}/{}", model, provider);
        }
    }

    #[test]
    fn test_model_with_single_provider() {
        let resolver = ModeResolver::builtin();
        let model = resolver.registry().get(ModelName::Gpt41Nano).unwrap();
        assert!(!model.providers.is_empty());

        let first = &model.providers[0];
        assert_eq!(
            resolver.resolve_default("gpt_4_1_nano", first.name),
            first.structured_output_mode
        );
    }

    #[test]
    fn test_every_registry_entry_resolves_to_its_mode() {
        let resolver = ModeResolver::builtin();
        for model in resolver.registry().models() {
            for entry in &model.providers {
                assert_eq!(
                    resolver.resolve_default(model.name.as_str(), entry.name),
                    entry.structured_output_mode
                );
            }
        }
    }

    #[test]
    fn test_duplicate_provider_first_match_wins() {
        let model = Model::new(ModelName::Phi4, ModelFamily::Phi, "Phi 4")
            .with_provider(ProviderEntry::new(ProviderName::Ollama).with_mode(Mode::JsonMode))
            .with_provider(ProviderEntry::new(ProviderName::Ollama).with_mode(Mode::JsonSchema));
        let resolver = ModeResolver::new(Arc::new(ModelRegistry::new(vec![model])));

        assert_eq!(resolver.resolve_default("phi_4", ProviderName::Ollama), Mode::JsonMode);
    }

    #[test]
    fn test_custom_registry() {
        let model = Model::new(ModelName::KimiK2, ModelFamily::Kimi, "Kimi K2")
            .with_provider(ProviderEntry::new(ProviderName::Groq).with_mode(Mode::JsonMode));
        let registry = ModelRegistry::builder().model(model).build().unwrap();
        let resolver = ModeResolver::new(Arc::new(registry));

        assert_eq!(resolver.resolve_default("kimi_k2", ProviderName::Groq), Mode::JsonMode);
        assert_eq!(resolver.resolve_default("gpt_4_1", ProviderName::OpenAi), Mode::Default);
    }

    #[test]
    fn test_resolve_strategy() {
        let resolver = ModeResolver::builtin();
        let options = ResolveOptions::new();

        let strategy = resolver.resolve_strategy("claude_3_5_sonnet", ProviderName::Vertex, &options);
        assert_eq!(strategy.name(), "FunctionCallingWeakStrategy");

        // A miss resolves to `default`, which picks the provider's strategy.
        let strategy = resolver.resolve_strategy("invalid_model_name", ProviderName::OpenAi, &options);
        assert_eq!(strategy.name(), "JsonSchemaStrategy");
    }

    #[test]
    fn test_uncensored() {
        let registry = ModelRegistry::builtin();

        let model = registry.model_by_name("grok_3_mini").unwrap();
        assert!(!model.providers.is_empty());
        for provider in &model.providers {
            assert!(provider.uncensored);
            assert!(!provider.suggested_for_uncensored_data_gen);
        }

        let model = registry.model_by_name("gpt_4_1_nano").unwrap();
        for provider in &model.providers {
            assert!(!provider.uncensored);
            assert!(!provider.suggested_for_uncensored_data_gen);
        }

        let model = registry.model_by_name("grok_4").unwrap();
        assert!(!model.providers.is_empty());
        for provider in &model.providers {
            assert!(provider.uncensored);
            assert!(provider.suggested_for_uncensored_data_gen);
        }
    }

    #[test]
    fn test_resolver_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ModeResolver>();
        assert_send_sync::<ModelRegistry>();
    }
}
