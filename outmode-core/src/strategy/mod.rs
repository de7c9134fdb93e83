//! Strategy layer for structured output modes.
//!
//! This module turns a resolved [`StructuredOutputMode`](crate::model::StructuredOutputMode)
//! into a concrete change to a chat completion request.

pub mod json_output;

pub use json_output::{
    detect_json_strategy, strategy_for_mode, FunctionCallingStrategy, JsonInstructionsStrategy,
    JsonModeStrategy, JsonOutputStrategy, JsonSchemaStrategy, PassthroughStrategy,
    TASK_RESPONSE_TOOL,
};
