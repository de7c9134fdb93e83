//! Model registry.
//!
//! The registry is an immutable, ordered list of [`Model`] records with a name
//! index. It is built once, either from the built-in list or from JSON data,
//! and shared behind an `Arc` afterwards.

mod builtin;

use crate::error::OutmodeError;
use crate::model::{Model, ModelName, ProviderEntry, ProviderName};
use crate::Result;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<ModelRegistry>> =
    Lazy::new(|| Arc::new(ModelRegistry::new(builtin::built_in_models())));

/// Immutable registry of models and their provider routes.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Vec<Model>,
    index: HashMap<ModelName, usize>,
}

impl ModelRegistry {
    /// Create a registry from models in order.
    ///
    /// Does not validate. When a model name repeats, lookups see the first
    /// occurrence.
    pub fn new(models: Vec<Model>) -> Self {
        let mut index = HashMap::with_capacity(models.len());
        for (pos, model) in models.iter().enumerate() {
            if index.contains_key(&model.name) {
                tracing::warn!(
                    "duplicate model {} at position {}, keeping first entry",
                    model.name,
                    pos
                );
                continue;
            }
            index.insert(model.name, pos);
        }
        Self { models, index }
    }

    /// Create a builder
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::new()
    }

    /// The built-in model list, constructed on first use
    pub fn builtin() -> Arc<ModelRegistry> {
        Arc::clone(&*BUILTIN)
    }

    /// Parse and validate a JSON array of models. The array must not be empty.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let models: Vec<Model> = serde_json::from_str(json)?;
        Self::from_loaded(models)
    }

    /// Parse and validate a JSON array of models from a reader
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let models: Vec<Model> = serde_json::from_reader(reader)?;
        Self::from_loaded(models)
    }

    /// Parse and validate a JSON array of models from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("loading model registry from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn from_loaded(models: Vec<Model>) -> Result<Self> {
        if models.is_empty() {
            return Err(OutmodeError::configuration("model registry data contains no models"));
        }
        let registry = Self::new(models);
        registry.validate()?;
        tracing::debug!("loaded model registry with {} models", registry.len());
        Ok(registry)
    }

    /// Check registry invariants.
    ///
    /// - every model name appears once
    /// - every provider appears at most once per model
    /// - `suggested_for_uncensored_data_gen` implies `uncensored`
    pub fn validate(&self) -> Result<()> {
        let mut seen_models = HashSet::with_capacity(self.models.len());
        for model in &self.models {
            if !seen_models.insert(model.name) {
                return Err(OutmodeError::duplicate_model(model.name.as_str()));
            }

            let mut seen_providers = HashSet::with_capacity(model.providers.len());
            for provider in &model.providers {
                if !seen_providers.insert(provider.name) {
                    return Err(OutmodeError::duplicate_provider(
                        model.name.as_str(),
                        provider.name.as_str(),
                    ));
                }

                if provider.suggested_for_uncensored_data_gen && !provider.uncensored {
                    return Err(OutmodeError::invalid_provider(
                        model.name.as_str(),
                        provider.name.as_str(),
                        "suggested_for_uncensored_data_gen requires uncensored",
                    ));
                }
            }
        }
        Ok(())
    }

    /// All models in registry order
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Number of models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry has no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Look up a model by name
    pub fn get(&self, name: ModelName) -> Option<&Model> {
        self.index.get(&name).map(|&pos| &self.models[pos])
    }

    /// Look up a model by its string key. Unknown keys are absent.
    pub fn get_by_name(&self, name: &str) -> Option<&Model> {
        name.parse::<ModelName>().ok().and_then(|n| self.get(n))
    }

    /// Look up a model by its string key, failing when it is absent
    pub fn model_by_name(&self, name: &str) -> Result<&Model> {
        self.get_by_name(name)
            .ok_or_else(|| OutmodeError::model_not_found(name))
    }

    /// Provider entry for a model/provider pair
    pub fn provider_entry(&self, model: ModelName, provider: ProviderName) -> Option<&ProviderEntry> {
        self.get(model).and_then(|m| m.provider(provider))
    }

    /// Every model routed through `provider`, with its entry
    pub fn models_for_provider(
        &self,
        provider: ProviderName,
    ) -> impl Iterator<Item = (&Model, &ProviderEntry)> + '_ {
        self.models
            .iter()
            .filter_map(move |m| m.provider(provider).map(|p| (m, p)))
    }
}

/// Builder for a validated [`ModelRegistry`].
#[derive(Debug, Default)]
pub struct ModelRegistryBuilder {
    models: Vec<Model>,
}

impl ModelRegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the built-in model list
    pub fn with_builtin(mut self) -> Self {
        self.models.extend(builtin::built_in_models());
        self
    }

    /// Add a model
    pub fn model(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }

    /// Add several models
    pub fn models(mut self, models: impl IntoIterator<Item = Model>) -> Self {
        self.models.extend(models);
        self
    }

    /// Build and validate the registry
    pub fn build(self) -> Result<ModelRegistry> {
        let registry = ModelRegistry::new(self.models);
        registry.validate()?;
        Ok(registry)
    }
}
