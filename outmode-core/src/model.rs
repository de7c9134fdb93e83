//! Model list types.
//!
//! A [`Model`] is a named model with the ordered list of provider routes
//! through which it can be invoked. Each [`ProviderEntry`] records how that
//! route produces structured output and a handful of capability flags.

use crate::error::OutmodeError;
use serde::{Deserialize, Serialize};

string_enum! {
    /// Known model keys
    pub enum ModelName: OutmodeError::UnknownModel {
        Gpt41 => "gpt_4_1",
        Gpt41Mini => "gpt_4_1_mini",
        Gpt41Nano => "gpt_4_1_nano",
        Gpt4o => "gpt_4o",
        Gpt4oMini => "gpt_4o_mini",
        O3Mini => "o3_mini",
        Claude35Haiku => "claude_3_5_haiku",
        Claude35Sonnet => "claude_3_5_sonnet",
        Claude37Sonnet => "claude_3_7_sonnet",
        ClaudeSonnet4 => "claude_sonnet_4",
        Gemini20Flash => "gemini_2_0_flash",
        Gemini25Flash => "gemini_2_5_flash",
        Gemini25Pro => "gemini_2_5_pro",
        Llama318b => "llama_3_1_8b",
        Llama3170b => "llama_3_1_70b",
        Llama3370b => "llama_3_3_70b",
        Qwq32b => "qwq_32b",
        Qwen332b => "qwen_3_32b",
        DeepseekR1 => "deepseek_r1",
        Deepseek3 => "deepseek_3",
        Grok3 => "grok_3",
        Grok3Mini => "grok_3_mini",
        Grok4 => "grok_4",
        MistralSmall3 => "mistral_small_3",
        Gemma327b => "gemma_3_27b",
        Phi4 => "phi_4",
        Dolphin298x22b => "dolphin_2_9_8x22b",
        KimiK2 => "kimi_k2",
    }
}

string_enum! {
    /// Backends a model can be routed through
    pub enum ProviderName: OutmodeError::UnknownProvider {
        OpenAi => "openai",
        Anthropic => "anthropic",
        GeminiApi => "gemini_api",
        Vertex => "vertex",
        AzureOpenAi => "azure_openai",
        AmazonBedrock => "amazon_bedrock",
        OpenRouter => "openrouter",
        Groq => "groq",
        FireworksAi => "fireworks_ai",
        TogetherAi => "together_ai",
        Ollama => "ollama",
        HuggingFace => "huggingface",
        Cerebras => "cerebras",
        SiliconflowCn => "siliconflow_cn",
        DockerModelRunner => "docker_model_runner",
        OpenAiCompatible => "openai_compatible",
        KilnFineTune => "kiln_fine_tune",
        KilnCustomRegistry => "kiln_custom_registry",
    }
}

string_enum! {
    /// How a model/provider pair is asked for schema-constrained output
    #[derive(Default)]
    pub enum StructuredOutputMode: OutmodeError::UnknownMode {
        /// Let the caller pick for the provider
        #[default]
        Default => "default",
        /// Native JSON schema response format
        JsonSchema => "json_schema",
        /// Forced tool call without strict schema enforcement
        FunctionCallingWeak => "function_calling_weak",
        /// Forced tool call with strict schema enforcement
        FunctionCalling => "function_calling",
        /// JSON object response format, schema not sent
        JsonMode => "json_mode",
        /// Schema described in the prompt only
        JsonInstructions => "json_instructions",
        /// Schema in the prompt plus JSON object response format
        JsonInstructionAndObject => "json_instruction_and_object",
        /// The prompt already carries the caller's own instructions
        JsonCustomInstructions => "json_custom_instructions",
        Unknown => "unknown",
    }
}

string_enum! {
    /// Model families
    pub enum ModelFamily: OutmodeError::UnknownFamily {
        Gpt => "gpt",
        Claude => "claude",
        Gemini => "gemini",
        Llama => "llama",
        Qwen => "qwen",
        Deepseek => "deepseek",
        Grok => "grok",
        Mistral => "mistral",
        Gemma => "gemma",
        Phi => "phi",
        Dolphin => "dolphin",
        Kimi => "kimi",
    }
}

string_enum! {
    /// Output parsers a provider route may require
    pub enum ModelParserId: OutmodeError::UnknownParser {
        /// Output always starts with a `<think>` block
        R1Thinking => "r1_thinking",
        /// Output may start with a `<think>` block
        OptionalR1Thinking => "optional_r1_thinking",
    }
}

fn default_true() -> bool {
    true
}

/// A provider route for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEntry {
    pub name: ProviderName,

    /// Model id as the provider spells it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    #[serde(default)]
    pub structured_output_mode: StructuredOutputMode,

    #[serde(default = "default_true")]
    pub supports_structured_output: bool,

    #[serde(default = "default_true")]
    pub supports_data_gen: bool,

    #[serde(default)]
    pub supports_logprobs: bool,

    #[serde(default)]
    pub reasoning_capable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<ModelParserId>,

    /// Serves an unmoderated variant of the model
    #[serde(default)]
    pub uncensored: bool,

    /// Recommended for generating data a moderated model would refuse
    #[serde(default)]
    pub suggested_for_uncensored_data_gen: bool,

    #[serde(default)]
    pub suggested_for_data_gen: bool,

    #[serde(default)]
    pub suggested_for_evals: bool,
}

impl ProviderEntry {
    /// Create a provider entry with default flags
    pub fn new(name: ProviderName) -> Self {
        Self {
            name,
            model_id: None,
            structured_output_mode: StructuredOutputMode::Default,
            supports_structured_output: true,
            supports_data_gen: true,
            supports_logprobs: false,
            reasoning_capable: false,
            parser: None,
            uncensored: false,
            suggested_for_uncensored_data_gen: false,
            suggested_for_data_gen: false,
            suggested_for_evals: false,
        }
    }

    /// Set the provider-specific model id
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Set the structured output mode
    pub fn with_mode(mut self, mode: StructuredOutputMode) -> Self {
        self.structured_output_mode = mode;
        self
    }

    /// Mark structured output as unsupported
    pub fn without_structured_output(mut self) -> Self {
        self.supports_structured_output = false;
        self
    }

    /// Mark data generation as unsupported
    pub fn without_data_gen(mut self) -> Self {
        self.supports_data_gen = false;
        self
    }

    /// Mark logprobs as supported
    pub fn with_logprobs(mut self) -> Self {
        self.supports_logprobs = true;
        self
    }

    /// Mark the route as reasoning capable
    pub fn reasoning(mut self) -> Self {
        self.reasoning_capable = true;
        self
    }

    /// Set the output parser
    pub fn with_parser(mut self, parser: ModelParserId) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Mark the route as uncensored
    pub fn uncensored(mut self) -> Self {
        self.uncensored = true;
        self
    }

    /// Mark the route as uncensored and suggested for uncensored data generation
    pub fn suggested_for_uncensored_data_gen(mut self) -> Self {
        self.uncensored = true;
        self.suggested_for_uncensored_data_gen = true;
        self
    }

    /// Mark the route as suggested for data generation
    pub fn suggested_for_data_gen(mut self) -> Self {
        self.suggested_for_data_gen = true;
        self
    }

    /// Mark the route as suggested for evals
    pub fn suggested_for_evals(mut self) -> Self {
        self.suggested_for_evals = true;
        self
    }
}

/// A model and its provider routes, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub name: ModelName,
    pub family: ModelFamily,
    pub friendly_name: String,
    #[serde(default)]
    pub providers: Vec<ProviderEntry>,
}

impl Model {
    /// Create a model without providers
    pub fn new(name: ModelName, family: ModelFamily, friendly_name: impl Into<String>) -> Self {
        Self {
            name,
            family,
            friendly_name: friendly_name.into(),
            providers: Vec::new(),
        }
    }

    /// Append a provider route
    pub fn with_provider(mut self, provider: ProviderEntry) -> Self {
        self.providers.push(provider);
        self
    }

    /// First provider entry with the given name
    pub fn provider(&self, name: ProviderName) -> Option<&ProviderEntry> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Provider names in registry order
    pub fn provider_names(&self) -> impl Iterator<Item = ProviderName> + '_ {
        self.providers.iter().map(|p| p.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_string_forms() {
        for name in ModelName::ALL {
            assert_eq!(name.as_str().parse::<ModelName>().unwrap(), *name);
        }
        for provider in ProviderName::ALL {
            assert_eq!(provider.to_string().parse::<ProviderName>().unwrap(), *provider);
        }
        for mode in StructuredOutputMode::ALL {
            let json = serde_json::to_string(mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "invalid_model_name".parse::<ModelName>().unwrap_err();
        assert!(matches!(err, OutmodeError::UnknownModel(ref s) if s == "invalid_model_name"));

        let err = "nope".parse::<ProviderName>().unwrap_err();
        assert!(matches!(err, OutmodeError::UnknownProvider(_)));

        let err = "xml".parse::<StructuredOutputMode>().unwrap_err();
        assert!(matches!(err, OutmodeError::UnknownMode(_)));
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(StructuredOutputMode::default(), StructuredOutputMode::Default);
    }

    #[test]
    fn test_provider_entry_builder() {
        let entry = ProviderEntry::new(ProviderName::OpenRouter)
            .with_model_id("x-ai/grok-4")
            .with_mode(StructuredOutputMode::JsonSchema)
            .suggested_for_uncensored_data_gen();

        assert_eq!(entry.model_id.as_deref(), Some("x-ai/grok-4"));
        assert!(entry.uncensored);
        assert!(entry.suggested_for_uncensored_data_gen);
        assert!(entry.supports_structured_output);
        assert!(!entry.suggested_for_evals);
    }

    #[test]
    fn test_provider_entry_defaults_from_json() {
        let entry: ProviderEntry = serde_json::from_str(r#"{"name": "groq"}"#).unwrap();
        assert_eq!(entry, ProviderEntry::new(ProviderName::Groq));
    }

    #[test]
    fn test_model_provider_lookup_first_match() {
        let model = Model::new(ModelName::Gpt41, ModelFamily::Gpt, "GPT 4.1")
            .with_provider(
                ProviderEntry::new(ProviderName::OpenAi).with_mode(StructuredOutputMode::JsonSchema),
            )
            .with_provider(
                ProviderEntry::new(ProviderName::OpenAi).with_mode(StructuredOutputMode::JsonMode),
            );

        let entry = model.provider(ProviderName::OpenAi).unwrap();
        assert_eq!(entry.structured_output_mode, StructuredOutputMode::JsonSchema);
        assert!(model.provider(ProviderName::Vertex).is_none());
        assert_eq!(
            model.provider_names().collect::<Vec<_>>(),
            vec![ProviderName::OpenAi, ProviderName::OpenAi]
        );
    }
}
