//! Built-in model list.

use crate::model::{
    Model, ModelFamily, ModelName, ModelParserId, ProviderEntry, ProviderName,
    StructuredOutputMode as Mode,
};

fn route(name: ProviderName, model_id: &str, mode: Mode) -> ProviderEntry {
    ProviderEntry::new(name).with_model_id(model_id).with_mode(mode)
}

pub(super) fn built_in_models() -> Vec<Model> {
    use ModelFamily as F;
    use ModelName as M;
    use ProviderName as P;

    vec![
        // GPT
        Model::new(M::Gpt41, F::Gpt, "GPT 4.1")
            .with_provider(
                route(P::OpenAi, "gpt-4.1", Mode::JsonSchema)
                    .with_logprobs()
                    .suggested_for_data_gen()
                    .suggested_for_evals(),
            )
            .with_provider(
                route(P::OpenRouter, "openai/gpt-4.1", Mode::JsonSchema)
                    .with_logprobs()
                    .suggested_for_data_gen()
                    .suggested_for_evals(),
            )
            .with_provider(
                route(P::AzureOpenAi, "gpt-4.1", Mode::JsonSchema)
                    .suggested_for_data_gen()
                    .suggested_for_evals(),
            ),
        Model::new(M::Gpt41Mini, F::Gpt, "GPT 4.1 Mini")
            .with_provider(route(P::OpenAi, "gpt-4.1-mini", Mode::JsonSchema).with_logprobs())
            .with_provider(route(P::OpenRouter, "openai/gpt-4.1-mini", Mode::JsonSchema))
            .with_provider(route(P::AzureOpenAi, "gpt-4.1-mini", Mode::JsonSchema)),
        Model::new(M::Gpt41Nano, F::Gpt, "GPT 4.1 Nano")
            .with_provider(route(P::OpenAi, "gpt-4.1-nano", Mode::JsonSchema).with_logprobs())
            .with_provider(route(P::OpenRouter, "openai/gpt-4.1-nano", Mode::JsonSchema))
            .with_provider(route(P::AzureOpenAi, "gpt-4.1-nano", Mode::JsonSchema)),
        Model::new(M::Gpt4o, F::Gpt, "GPT 4o")
            .with_provider(route(P::OpenAi, "gpt-4o", Mode::JsonSchema).with_logprobs())
            .with_provider(
                route(P::OpenRouter, "openai/gpt-4o", Mode::JsonSchema).with_logprobs(),
            )
            .with_provider(route(P::AzureOpenAi, "gpt-4o", Mode::JsonSchema)),
        Model::new(M::Gpt4oMini, F::Gpt, "GPT 4o Mini")
            .with_provider(route(P::OpenAi, "gpt-4o-mini", Mode::JsonSchema).with_logprobs())
            .with_provider(
                route(P::OpenRouter, "openai/gpt-4o-mini", Mode::JsonSchema).with_logprobs(),
            )
            .with_provider(route(P::AzureOpenAi, "gpt-4o-mini", Mode::JsonSchema)),
        Model::new(M::O3Mini, F::Gpt, "o3 Mini")
            .with_provider(route(P::OpenAi, "o3-mini", Mode::JsonSchema).reasoning())
            .with_provider(route(P::AzureOpenAi, "o3-mini", Mode::JsonSchema).reasoning()),
        // Claude
        Model::new(M::Claude35Haiku, F::Claude, "Claude 3.5 Haiku")
            .with_provider(route(
                P::OpenRouter,
                "anthropic/claude-3-5-haiku",
                Mode::FunctionCalling,
            ))
            .with_provider(route(
                P::Anthropic,
                "claude-3-5-haiku-20241022",
                Mode::FunctionCalling,
            ))
            .with_provider(route(
                P::Vertex,
                "claude-3-5-haiku",
                Mode::FunctionCallingWeak,
            )),
        Model::new(M::Claude35Sonnet, F::Claude, "Claude 3.5 Sonnet")
            .with_provider(route(
                P::OpenRouter,
                "anthropic/claude-3.5-sonnet",
                Mode::FunctionCalling,
            ))
            .with_provider(route(
                P::Anthropic,
                "claude-3-5-sonnet-20241022",
                Mode::FunctionCalling,
            ))
            .with_provider(route(
                P::Vertex,
                "claude-3-5-sonnet",
                Mode::FunctionCallingWeak,
            )),
        Model::new(M::Claude37Sonnet, F::Claude, "Claude 3.7 Sonnet")
            .with_provider(route(
                P::OpenRouter,
                "anthropic/claude-3.7-sonnet",
                Mode::FunctionCalling,
            ))
            .with_provider(route(
                P::Anthropic,
                "claude-3-7-sonnet-20250219",
                Mode::FunctionCalling,
            ))
            .with_provider(
                route(P::Vertex, "claude-3-7-sonnet", Mode::FunctionCallingWeak)
                    .without_data_gen(),
            ),
        Model::new(M::ClaudeSonnet4, F::Claude, "Claude Sonnet 4")
            .with_provider(
                route(
                    P::OpenRouter,
                    "anthropic/claude-sonnet-4",
                    Mode::FunctionCalling,
                )
                .suggested_for_data_gen()
                .suggested_for_evals(),
            )
            .with_provider(
                route(
                    P::Anthropic,
                    "claude-sonnet-4-20250514",
                    Mode::FunctionCalling,
                )
                .suggested_for_data_gen()
                .suggested_for_evals(),
            ),
        // Gemini
        Model::new(M::Gemini20Flash, F::Gemini, "Gemini 2.0 Flash")
            .with_provider(route(
                P::OpenRouter,
                "google/gemini-2.0-flash-001",
                Mode::JsonSchema,
            ))
            .with_provider(route(P::GeminiApi, "gemini-2.0-flash", Mode::JsonSchema))
            .with_provider(route(P::Vertex, "gemini-2.0-flash", Mode::JsonSchema)),
        Model::new(M::Gemini25Flash, F::Gemini, "Gemini 2.5 Flash")
            .with_provider(
                route(P::OpenRouter, "google/gemini-2.5-flash", Mode::JsonSchema).reasoning(),
            )
            .with_provider(route(P::GeminiApi, "gemini-2.5-flash", Mode::JsonSchema).reasoning())
            .with_provider(route(P::Vertex, "gemini-2.5-flash", Mode::JsonSchema).reasoning()),
        Model::new(M::Gemini25Pro, F::Gemini, "Gemini 2.5 Pro")
            .with_provider(
                route(P::OpenRouter, "google/gemini-2.5-pro", Mode::JsonSchema)
                    .reasoning()
                    .suggested_for_data_gen()
                    .suggested_for_evals(),
            )
            .with_provider(
                route(P::GeminiApi, "gemini-2.5-pro", Mode::JsonSchema)
                    .reasoning()
                    .suggested_for_data_gen()
                    .suggested_for_evals(),
            )
            .with_provider(
                route(P::Vertex, "gemini-2.5-pro", Mode::JsonSchema)
                    .reasoning()
                    .suggested_for_data_gen()
                    .suggested_for_evals(),
            ),
        // Llama
        Model::new(M::Llama318b, F::Llama, "Llama 3.1 8B")
            .with_provider(
                route(P::Groq, "llama-3.1-8b-instant", Mode::Default).without_structured_output(),
            )
            .with_provider(
                route(
                    P::AmazonBedrock,
                    "meta.llama3-1-8b-instruct-v1:0",
                    Mode::JsonSchema,
                )
                .without_structured_output(),
            )
            .with_provider(route(P::Ollama, "llama3.1:8b", Mode::JsonSchema))
            .with_provider(
                route(
                    P::FireworksAi,
                    "accounts/fireworks/models/llama-v3p1-8b-instruct",
                    Mode::JsonMode,
                )
                .without_data_gen(),
            )
            .with_provider(
                route(
                    P::OpenRouter,
                    "meta-llama/llama-3.1-8b-instruct",
                    Mode::JsonSchema,
                )
                .without_data_gen(),
            )
            .with_provider(route(
                P::TogetherAi,
                "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo",
                Mode::JsonInstructionAndObject,
            ))
            .with_provider(route(P::Cerebras, "llama3.1-8b", Mode::FunctionCalling)),
        Model::new(M::Llama3170b, F::Llama, "Llama 3.1 70B")
            .with_provider(
                route(
                    P::OpenRouter,
                    "meta-llama/llama-3.1-70b-instruct",
                    Mode::FunctionCallingWeak,
                )
                .with_logprobs(),
            )
            .with_provider(route(P::Ollama, "llama3.1:70b", Mode::JsonSchema))
            .with_provider(route(
                P::FireworksAi,
                "accounts/fireworks/models/llama-v3p1-70b-instruct",
                Mode::FunctionCallingWeak,
            ))
            .with_provider(route(
                P::TogetherAi,
                "meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo",
                Mode::FunctionCallingWeak,
            )),
        Model::new(M::Llama3370b, F::Llama, "Llama 3.3 70B")
            .with_provider(route(
                P::OpenRouter,
                "meta-llama/llama-3.3-70b-instruct",
                Mode::JsonSchema,
            ))
            .with_provider(route(P::Groq, "llama-3.3-70b-versatile", Mode::Default))
            .with_provider(route(P::Ollama, "llama3.3", Mode::JsonSchema))
            .with_provider(route(
                P::FireworksAi,
                "accounts/fireworks/models/llama-v3p3-70b-instruct",
                Mode::FunctionCallingWeak,
            ))
            .with_provider(route(
                P::TogetherAi,
                "meta-llama/Llama-3.3-70B-Instruct-Turbo",
                Mode::FunctionCallingWeak,
            )),
        // Qwen
        Model::new(M::Qwq32b, F::Qwen, "QwQ 32B")
            .with_provider(
                route(P::OpenRouter, "qwen/qwq-32b", Mode::JsonInstructions)
                    .reasoning()
                    .with_parser(ModelParserId::R1Thinking),
            )
            .with_provider(
                route(
                    P::FireworksAi,
                    "accounts/fireworks/models/qwq-32b",
                    Mode::JsonInstructions,
                )
                .reasoning()
                .with_parser(ModelParserId::R1Thinking),
            )
            .with_provider(
                route(P::Ollama, "qwq", Mode::JsonInstructions)
                    .reasoning()
                    .with_parser(ModelParserId::R1Thinking),
            )
            .with_provider(
                route(P::Groq, "qwen-qwq-32b", Mode::JsonInstructions)
                    .reasoning()
                    .with_parser(ModelParserId::R1Thinking),
            )
            .with_provider(
                route(P::TogetherAi, "Qwen/QwQ-32B", Mode::JsonInstructions)
                    .reasoning()
                    .with_parser(ModelParserId::R1Thinking),
            ),
        Model::new(M::Qwen332b, F::Qwen, "Qwen 3 32B")
            .with_provider(
                route(P::OpenRouter, "qwen/qwen3-32b", Mode::JsonInstructions)
                    .reasoning()
                    .with_parser(ModelParserId::R1Thinking),
            )
            .with_provider(
                route(P::Ollama, "qwen3:32b", Mode::JsonSchema)
                    .reasoning()
                    .with_parser(ModelParserId::R1Thinking),
            )
            .with_provider(
                route(P::Groq, "qwen/qwen3-32b", Mode::JsonInstructions)
                    .reasoning()
                    .with_parser(ModelParserId::R1Thinking),
            )
            .with_provider(
                route(P::Cerebras, "qwen-3-32b", Mode::JsonSchema)
                    .reasoning()
                    .with_parser(ModelParserId::OptionalR1Thinking),
            ),
        // DeepSeek
        Model::new(M::DeepseekR1, F::Deepseek, "DeepSeek R1")
            .with_provider(
                route(P::OpenRouter, "deepseek/deepseek-r1", Mode::JsonInstructions)
                    .reasoning()
                    .suggested_for_evals(),
            )
            .with_provider(
                route(
                    P::FireworksAi,
                    "accounts/fireworks/models/deepseek-r1",
                    Mode::JsonInstructions,
                )
                .reasoning()
                .with_parser(ModelParserId::R1Thinking),
            )
            .with_provider(
                route(P::Ollama, "deepseek-r1:671b", Mode::JsonInstructions)
                    .reasoning()
                    .with_parser(ModelParserId::R1Thinking),
            )
            .with_provider(
                route(P::TogetherAi, "deepseek-ai/DeepSeek-R1", Mode::JsonInstructions)
                    .reasoning()
                    .with_parser(ModelParserId::R1Thinking),
            ),
        Model::new(M::Deepseek3, F::Deepseek, "DeepSeek V3")
            .with_provider(route(
                P::OpenRouter,
                "deepseek/deepseek-chat",
                Mode::FunctionCalling,
            ))
            .with_provider(route(
                P::FireworksAi,
                "accounts/fireworks/models/deepseek-v3",
                Mode::JsonMode,
            ))
            .with_provider(route(
                P::TogetherAi,
                "deepseek-ai/DeepSeek-V3",
                Mode::JsonInstructions,
            )),
        // Grok
        Model::new(M::Grok3, F::Grok, "Grok 3")
            .with_provider(
                route(P::OpenRouter, "x-ai/grok-3-beta", Mode::JsonSchema)
                    .suggested_for_uncensored_data_gen(),
            ),
        Model::new(M::Grok3Mini, F::Grok, "Grok 3 Mini")
            .with_provider(
                route(P::OpenRouter, "x-ai/grok-3-mini-beta", Mode::JsonSchema)
                    .reasoning()
                    .uncensored(),
            ),
        Model::new(M::Grok4, F::Grok, "Grok 4")
            .with_provider(
                route(P::OpenRouter, "x-ai/grok-4", Mode::JsonSchema)
                    .reasoning()
                    .suggested_for_uncensored_data_gen(),
            ),
        // Mistral
        Model::new(M::MistralSmall3, F::Mistral, "Mistral Small 3")
            .with_provider(route(
                P::OpenRouter,
                "mistralai/mistral-small-24b-instruct-2501",
                Mode::JsonSchema,
            ))
            .with_provider(route(P::Ollama, "mistral-small:24b", Mode::JsonSchema)),
        // Gemma
        Model::new(M::Gemma327b, F::Gemma, "Gemma 3 27B")
            .with_provider(route(P::Ollama, "gemma3:27b", Mode::JsonSchema))
            .with_provider(route(
                P::OpenRouter,
                "google/gemma-3-27b-it",
                Mode::JsonInstructionAndObject,
            )),
        // Phi
        Model::new(M::Phi4, F::Phi, "Phi 4")
            .with_provider(route(P::Ollama, "phi4", Mode::JsonSchema))
            .with_provider(
                route(P::OpenRouter, "microsoft/phi-4", Mode::JsonInstructionAndObject)
                    .without_data_gen(),
            ),
        // Dolphin
        Model::new(M::Dolphin298x22b, F::Dolphin, "Dolphin 2.9 8x22B")
            .with_provider(
                route(P::Ollama, "dolphin-mixtral:8x22b", Mode::JsonSchema)
                    .suggested_for_uncensored_data_gen(),
            )
            .with_provider(
                route(
                    P::OpenRouter,
                    "cognitivecomputations/dolphin-mixtral-8x22b",
                    Mode::JsonInstructionAndObject,
                )
                .suggested_for_uncensored_data_gen(),
            ),
        // Kimi
        Model::new(M::KimiK2, F::Kimi, "Kimi K2")
            .with_provider(route(P::OpenRouter, "moonshotai/kimi-k2", Mode::JsonSchema))
            .with_provider(route(
                P::FireworksAi,
                "accounts/fireworks/models/kimi-k2-instruct",
                Mode::JsonMode,
            ))
            .with_provider(route(
                P::Groq,
                "moonshotai/kimi-k2-instruct",
                Mode::FunctionCalling,
            ))
            .with_provider(route(
                P::TogetherAi,
                "moonshotai/Kimi-K2-Instruct",
                Mode::JsonInstructionAndObject,
            )),
    ]
}
