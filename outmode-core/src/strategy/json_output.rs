//! JSON output strategies for structured output modes.
//!
//! Each [`StructuredOutputMode`] maps to one strategy that shapes a chat
//! completion request so the model answers with JSON matching a schema:
//! - JsonSchemaStrategy: native `response_format.json_schema`
//! - FunctionCallingStrategy: a forced tool call whose parameters are the schema
//! - JsonModeStrategy: `response_format.json_object`, optionally with instructions
//! - JsonInstructionsStrategy: schema described in the prompt only
//! - PassthroughStrategy: the caller already wrote the instructions

use crate::error::OutmodeError;
use crate::model::{ProviderName, StructuredOutputMode};
use crate::types::{ChatCompletionRequest, ContentPart, Message, ResponseFormat, Role, Tool, ToolChoice};

/// Name of the tool used to carry structured output.
pub const TASK_RESPONSE_TOOL: &str = "task_response";

/// Strategy for handling JSON output in chat completion requests.
pub trait JsonOutputStrategy: Send + Sync {
    /// Get the strategy name for debugging
    fn name(&self) -> &str;

    /// Apply this strategy to a chat completion request to enable JSON output.
    fn apply(
        &self,
        req: &mut ChatCompletionRequest,
        schema: &serde_json::Value,
    ) -> Result<(), OutmodeError>;
}

/// Build a JSON instruction from a schema
fn build_json_instruction(schema: &serde_json::Value) -> Result<String, OutmodeError> {
    let schema_str = serde_json::to_string_pretty(schema)?;
    Ok(format!(
        "You must respond with valid JSON that matches this schema:\n```json\n{}\n```\n\nIMPORTANT:\n\
        1. Only return the JSON object, nothing else\n\
        2. Ensure all required fields are present\n\
        3. Follow the schema structure exactly\n\
        4. Use the correct data types for each field",
        schema_str
    ))
}

/// Inject an instruction as a leading system message, or append it to the
/// last user message.
fn inject_instruction(req: &mut ChatCompletionRequest, instruction: String, use_system_message: bool) {
    if use_system_message {
        req.messages.insert(0, Message::system(instruction));
        return;
    }

    if let Some(last_msg) = req
        .messages
        .iter_mut()
        .rev()
        .find(|m| m.role == Role::User)
    {
        last_msg.content.push(ContentPart::Text {
            text: format!("\n\n{}", instruction),
        });
    } else {
        req.messages.push(Message::user(instruction));
    }
}

/// JSON Schema strategy for providers that support strict JSON Schema.
#[derive(Debug, Clone)]
pub struct JsonSchemaStrategy {
    /// Whether to enable strict mode
    pub strict: bool,
}

impl JsonSchemaStrategy {
    /// Create a new JSON Schema strategy with strict mode enabled
    pub fn new() -> Self {
        Self { strict: true }
    }
}

impl Default for JsonSchemaStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonOutputStrategy for JsonSchemaStrategy {
    fn name(&self) -> &str {
        "JsonSchemaStrategy"
    }

    fn apply(
        &self,
        req: &mut ChatCompletionRequest,
        schema: &serde_json::Value,
    ) -> Result<(), OutmodeError> {
        req.response_format = Some(ResponseFormat::JsonSchema {
            name: TASK_RESPONSE_TOOL.to_string(),
            schema: schema.clone(),
            strict: self.strict,
        });

        Ok(())
    }
}

/// Function calling strategy.
///
/// Declares a single tool whose parameters are the schema and forces the
/// model to call it. The tool is never executed; its arguments are the output.
#[derive(Debug, Clone)]
pub struct FunctionCallingStrategy {
    /// Whether the provider should enforce the schema strictly
    pub strict: bool,
}

impl FunctionCallingStrategy {
    /// Strict function calling
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Function calling without strict schema enforcement
    pub fn weak() -> Self {
        Self { strict: false }
    }
}

impl Default for FunctionCallingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonOutputStrategy for FunctionCallingStrategy {
    fn name(&self) -> &str {
        if self.strict {
            "FunctionCallingStrategy"
        } else {
            "FunctionCallingWeakStrategy"
        }
    }

    fn apply(
        &self,
        req: &mut ChatCompletionRequest,
        schema: &serde_json::Value,
    ) -> Result<(), OutmodeError> {
        let tool = Tool {
            name: TASK_RESPONSE_TOOL.to_string(),
            description: "Respond by calling this tool with the structured output.".to_string(),
            parameters: schema.clone(),
            strict: self.strict.then_some(true),
        };

        let tools = req.tools.get_or_insert_with(Vec::new);
        tools.retain(|t| t.name != TASK_RESPONSE_TOOL);
        tools.push(tool);

        req.tool_choice = Some(ToolChoice::Function {
            name: TASK_RESPONSE_TOOL.to_string(),
        });
        req.response_format = None;

        Ok(())
    }
}

/// JSON Mode strategy for providers that only support basic JSON object mode.
///
/// Sets response_format to JsonObject and, unless disabled, injects the
/// schema into the prompt to guide the model.
#[derive(Debug, Clone)]
pub struct JsonModeStrategy {
    /// Whether to inject the schema instruction as a system message
    pub inject_instructions: bool,
}

impl JsonModeStrategy {
    /// JSON object mode with schema instructions in a system message
    pub fn new() -> Self {
        Self {
            inject_instructions: true,
        }
    }

    /// JSON object mode without any schema instructions
    pub fn without_instructions() -> Self {
        Self {
            inject_instructions: false,
        }
    }
}

impl Default for JsonModeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonOutputStrategy for JsonModeStrategy {
    fn name(&self) -> &str {
        "JsonModeStrategy"
    }

    fn apply(
        &self,
        req: &mut ChatCompletionRequest,
        schema: &serde_json::Value,
    ) -> Result<(), OutmodeError> {
        req.response_format = Some(ResponseFormat::JsonObject);

        if self.inject_instructions {
            let instruction = build_json_instruction(schema)?;
            inject_instruction(req, instruction, true);
        }

        Ok(())
    }
}

/// Prompt-only strategy: the schema is described in the messages and the
/// response format is left as plain text.
#[derive(Debug, Clone)]
pub struct JsonInstructionsStrategy {
    /// Whether to inject schema as a system message (true) or append to last user message (false)
    pub use_system_message: bool,
}

impl JsonInstructionsStrategy {
    /// Instructions-only strategy that injects a system message
    pub fn new() -> Self {
        Self {
            use_system_message: true,
        }
    }

    /// Instructions-only strategy with configurable message injection
    pub fn with_system_message(use_system_message: bool) -> Self {
        Self { use_system_message }
    }
}

impl Default for JsonInstructionsStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonOutputStrategy for JsonInstructionsStrategy {
    fn name(&self) -> &str {
        "JsonInstructionsStrategy"
    }

    fn apply(
        &self,
        req: &mut ChatCompletionRequest,
        schema: &serde_json::Value,
    ) -> Result<(), OutmodeError> {
        let instruction = build_json_instruction(schema)?;
        inject_instruction(req, instruction, self.use_system_message);
        Ok(())
    }
}

/// Leaves the request untouched.
#[derive(Debug, Clone, Default)]
pub struct PassthroughStrategy;

impl JsonOutputStrategy for PassthroughStrategy {
    fn name(&self) -> &str {
        "PassthroughStrategy"
    }

    fn apply(
        &self,
        _req: &mut ChatCompletionRequest,
        _schema: &serde_json::Value,
    ) -> Result<(), OutmodeError> {
        Ok(())
    }
}

/// Auto-detect the appropriate JSON output strategy for a provider.
///
/// Used when a mode leaves the choice to the caller.
pub fn detect_json_strategy(provider: ProviderName) -> Box<dyn JsonOutputStrategy> {
    match provider {
        // Providers that support JSON Schema
        ProviderName::OpenAi | ProviderName::AzureOpenAi | ProviderName::GeminiApi => {
            Box::new(JsonSchemaStrategy::new())
        }

        ProviderName::Anthropic => Box::new(FunctionCallingStrategy::new()),

        // Default to JSON Mode for everything else
        _ => Box::new(JsonModeStrategy::new()),
    }
}

/// Strategy for a resolved mode on a provider.
pub fn strategy_for_mode(
    mode: StructuredOutputMode,
    provider: ProviderName,
) -> Box<dyn JsonOutputStrategy> {
    let strategy: Box<dyn JsonOutputStrategy> = match mode {
        StructuredOutputMode::JsonSchema => Box::new(JsonSchemaStrategy::new()),
        StructuredOutputMode::FunctionCalling => Box::new(FunctionCallingStrategy::new()),
        StructuredOutputMode::FunctionCallingWeak => Box::new(FunctionCallingStrategy::weak()),
        StructuredOutputMode::JsonMode => Box::new(JsonModeStrategy::without_instructions()),
        StructuredOutputMode::JsonInstructionAndObject => Box::new(JsonModeStrategy::new()),
        StructuredOutputMode::JsonInstructions => Box::new(JsonInstructionsStrategy::new()),
        StructuredOutputMode::JsonCustomInstructions => Box::new(PassthroughStrategy),
        StructuredOutputMode::Default | StructuredOutputMode::Unknown => {
            detect_json_strategy(provider)
        }
    };

    tracing::debug!(
        "selected {} for mode={}, provider={}",
        strategy.name(),
        mode,
        provider
    );

    strategy
}
