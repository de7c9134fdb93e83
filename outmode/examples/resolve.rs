//! Resolve structured output modes and shape requests with schemars.
//!
//! This demonstrates:
//! 1. Looking up the mode for every provider route of a model
//! 2. Fallback behavior for unknown models and disallowed modes
//! 3. Using schemars to build the schema a strategy injects into a request

use outmode::prelude::*;
use outmode::schemars::{schema_for, JsonSchema};
use outmode::strategy_for_mode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct PersonInfo {
    /// Full name of the person
    name: String,
    /// Age in years
    age: u32,
    /// Current occupation or job title
    occupation: String,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let resolver = ModeResolver::builtin();
    let model = resolver.registry().model_by_name("claude_3_5_sonnet")?;

    println!("=== {} ===", model.friendly_name);
    for entry in &model.providers {
        let mode = resolver.resolve_default(model.name.as_str(), entry.name);
        println!("{:<14} {}", entry.name, mode);
    }

    println!("\n=== Fallbacks ===");
    let options = ResolveOptions::new()
        .with_default(StructuredOutputMode::JsonInstructions)
        .disallow(StructuredOutputMode::JsonSchema);
    for (model_name, provider) in [
        ("invalid_model_name", ProviderName::OpenAi),
        ("gpt_4_1", ProviderName::GeminiApi),
        ("gpt_4_1", ProviderName::OpenAi),
    ] {
        let mode = resolver.resolve_mode(model_name, provider, &options);
        println!("{}/{} -> {}", model_name, provider, mode);
    }

    println!("\n=== Request shaping ===");
    let schema = serde_json::to_value(schema_for!(PersonInfo))?;
    for (model_name, provider) in [
        ("gpt_4_1", ProviderName::OpenAi),
        ("claude_3_5_sonnet", ProviderName::Vertex),
        ("deepseek_r1", ProviderName::OpenRouter),
    ] {
        let mode = resolver.resolve_default(model_name, provider);
        let strategy = strategy_for_mode(mode, provider);

        let mut req = ChatCompletionRequest::new(
            model_name,
            vec![Message::user("Tell me about Ada Lovelace.")],
        );
        strategy.apply(&mut req, &schema)?;

        println!("--- {}/{} via {} ---", model_name, provider, strategy.name());
        println!("{}", serde_json::to_string_pretty(&req)?);
    }

    Ok(())
}
