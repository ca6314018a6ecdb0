//! Suggestion sources.
//!
//! Callers ask for suggestions through [`SuggestionSource`] and do not care
//! whether the answer comes from the local graph ([`OfflineSource`]) or
//! from a language-model service implemented outside this crate. Both
//! return the same [`Suggestions`] shape with the request's own category
//! left empty.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::dataset::Locale;
use crate::model::{Category, Rotation, Suggestions};
use crate::sample::Sampler;
use crate::storage::GraphStore;
use crate::traversal::{QuadrantWalker, TraversalConfig};
use crate::Result;

/// One request for the three missing quadrants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Category the user filled in.
    pub category: Category,
    /// Trait id for the offline source, free text for an online one.
    pub input: String,
    #[serde(default)]
    pub locale: Locale,
}

impl SuggestionRequest {
    pub fn new(category: Category, input: impl Into<String>) -> Self {
        Self { category, input: input.into(), locale: Locale::default() }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Anything that can fill in the missing quadrants.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    async fn suggest(&self, request: &SuggestionRequest) -> Result<Suggestions>;
}

// ============================================================================
// OfflineSource
// ============================================================================

/// Serves suggestions by walking the active graph.
pub struct OfflineSource<S: Sampler> {
    store: Arc<GraphStore<S>>,
    config: TraversalConfig,
    rotation: Rotation,
}

impl<S: Sampler> OfflineSource<S> {
    pub fn new(store: Arc<GraphStore<S>>) -> Self {
        Self { store, config: TraversalConfig::default(), rotation: Rotation::Clockwise }
    }

    pub fn with_config(mut self, config: TraversalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn store(&self) -> &GraphStore<S> {
        &self.store
    }
}

#[async_trait]
impl<S: Sampler + 'static> SuggestionSource for OfflineSource<S> {
    fn name(&self) -> &str {
        "offline"
    }

    async fn suggest(&self, request: &SuggestionRequest) -> Result<Suggestions> {
        if let Some(origin) = self.store.origin() {
            tracing::debug!(?origin, locale = %request.locale, "offline suggestion request");
        }
        let walker = QuadrantWalker::with_config(&self.store, self.config);
        Ok(walker.traverse_with(request.category, &request.input, self.rotation))
    }
}
