//! # Outmode Core
//!
//! Model registry and structured output mode resolution.
//!
//! This crate holds the immutable model list (which providers serve which
//! model, and how each route produces structured output), the resolver that
//! looks up a mode for a model/provider pair with fallback rules, and the
//! strategies that turn a mode into a concrete request shape.

#[macro_use]
mod macros;

pub mod error;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod strategy;
pub mod types;

// Re-exports
pub use error::OutmodeError;
pub use model::{
    Model, ModelFamily, ModelName, ModelParserId, ProviderEntry, ProviderName,
    StructuredOutputMode,
};
pub use registry::{ModelRegistry, ModelRegistryBuilder};
pub use resolver::{default_structured_output_mode, ModeResolver, ResolveOptions};
pub use strategy::{
    detect_json_strategy, strategy_for_mode, FunctionCallingStrategy, JsonInstructionsStrategy,
    JsonModeStrategy, JsonOutputStrategy, JsonSchemaStrategy, PassthroughStrategy,
};
pub use types::*;

/// Result type alias for Outmode operations
pub type Result<T> = std::result::Result<T, OutmodeError>;
