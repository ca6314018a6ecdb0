//! # Graph Store
//!
//! Holds the one active [`TraitGraph`] and answers every lookup against it.
//!
//! Loading never mutates the current graph in place: a new `TraitGraph` is
//! validated and indexed off to the side, then swapped in under a write
//! lock. Readers take an `Arc` snapshot and never observe a half-loaded
//! dataset. A rejected payload leaves the previous graph active.
//!
//! | Operation | Mutates | Missing data |
//! |-----------|---------|--------------|
//! | `load` / `import` / `load_default` / `replace` | yes | n/a |
//! | `get_by_id` | no | `None` |
//! | `by_polarity` / `search` | no | empty |
//! | `linked_from` / `linked_to` | no | empty |

pub mod memory;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::dataset::Locale;
use crate::import;
use crate::model::*;
use crate::sample::{RandomSampler, Sampler};
use crate::Result;

pub use memory::TraitGraph;

// ============================================================================
// Origin
// ============================================================================

/// Where the active graph came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "locale", rename_all = "lowercase")]
pub enum Origin {
    /// A bundled dataset.
    Default(Locale),
    /// A user-supplied import.
    Custom,
}

impl Origin {
    pub fn is_custom(self) -> bool {
        matches!(self, Origin::Custom)
    }
}

// ============================================================================
// ActiveGraph
// ============================================================================

/// A loaded graph together with its provenance.
#[derive(Debug)]
pub struct ActiveGraph {
    graph: TraitGraph,
    origin: Origin,
    loaded_at: DateTime<Utc>,
}

impl ActiveGraph {
    pub fn graph(&self) -> &TraitGraph {
        &self.graph
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo {
            origin: self.origin,
            traits: self.graph.trait_count(),
            links: self.graph.link_count(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Summary of the active graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInfo {
    pub origin: Origin,
    pub traits: usize,
    pub links: usize,
    pub loaded_at: DateTime<Utc>,
}

// ============================================================================
// GraphStore
// ============================================================================

/// Owner of the active graph.
///
/// Generic over the sampling strategy used by bounded lookups. The default
/// is uniform random sampling; tests plug in [`crate::sample::Sequential`]
/// or a seeded sampler.
pub struct GraphStore<S: Sampler = RandomSampler> {
    current: RwLock<Option<Arc<ActiveGraph>>>,
    sampler: S,
}

impl GraphStore<RandomSampler> {
    /// Empty store with entropy-seeded random sampling.
    pub fn new() -> Self {
        Self::with_sampler(RandomSampler::new())
    }
}

impl Default for GraphStore<RandomSampler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sampler> std::fmt::Debug for GraphStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphStore")
            .field("info", &self.info())
            .finish_non_exhaustive()
    }
}

impl<S: Sampler> GraphStore<S> {
    pub fn with_sampler(sampler: S) -> Self {
        Self { current: RwLock::new(None), sampler }
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Validate `raw` and make it the active graph.
    ///
    /// On failure the previous graph stays active.
    pub fn load(&self, raw: &str, origin: Origin) -> Result<GraphInfo> {
        match import::validate(raw) {
            Ok(graph) => Ok(self.replace(graph, origin)),
            Err(err) => {
                tracing::warn!(?origin, error = %err, "rejected graph payload");
                Err(err.into())
            }
        }
    }

    /// Load a user-supplied document.
    pub fn import(&self, raw: &str) -> Result<GraphInfo> {
        self.load(raw, Origin::Custom)
    }

    /// Load the bundled dataset for `locale`.
    pub fn load_default(&self, locale: Locale) -> Result<GraphInfo> {
        self.load(locale.default_dataset(), Origin::Default(locale))
    }

    /// Validate a typed document and make it the active graph.
    pub fn load_payload(&self, payload: GraphPayload, origin: Origin) -> Result<GraphInfo> {
        let graph = import::validate_payload(payload)?;
        Ok(self.replace(graph, origin))
    }

    /// Swap in an already-built graph.
    pub fn replace(&self, graph: TraitGraph, origin: Origin) -> GraphInfo {
        let active = Arc::new(ActiveGraph { graph, origin, loaded_at: Utc::now() });
        let info = active.info();
        *self.current.write() = Some(active);
        tracing::info!(?origin, traits = info.traits, links = info.links, "graph loaded");
        info
    }

    // ========================================================================
    // State
    // ========================================================================

    /// The active graph, if any. Stays valid across later loads.
    pub fn snapshot(&self) -> Option<Arc<ActiveGraph>> {
        self.current.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn is_custom(&self) -> bool {
        self.origin().is_some_and(Origin::is_custom)
    }

    pub fn origin(&self) -> Option<Origin> {
        self.current.read().as_ref().map(|a| a.origin)
    }

    pub fn info(&self) -> Option<GraphInfo> {
        self.current.read().as_ref().map(|a| a.info())
    }

    pub fn trait_count(&self) -> usize {
        self.read(|g| g.trait_count())
    }

    pub fn link_count(&self) -> usize {
        self.read(|g| g.link_count())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get_by_id(&self, id: &str) -> Option<TraitNode> {
        self.snapshot().and_then(|a| a.graph.get(id).cloned())
    }

    pub fn by_polarity(&self, polarity: Polarity) -> Vec<TraitNode> {
        self.read(|g| owned(g.by_polarity(polarity)))
    }

    pub fn search(&self, query: &str, polarity: Option<Polarity>) -> Vec<TraitNode> {
        self.read(|g| owned(g.search(query, polarity)))
    }

    /// Up to `limit` traits that `id` links to with `kind`.
    pub fn linked_from(&self, id: &str, kind: LinkKind, limit: usize) -> Vec<TraitNode> {
        self.read(|g| owned(g.linked_from(id, kind, limit, &self.sampler)))
    }

    /// Up to `limit` traits linking to `id` with `kind`.
    pub fn linked_to(&self, id: &str, kind: LinkKind, limit: usize) -> Vec<TraitNode> {
        self.read(|g| owned(g.linked_to(id, kind, limit, &self.sampler)))
    }

    /// Run `f` against the active graph, or an empty one if none is loaded.
    fn read<T>(&self, f: impl FnOnce(&TraitGraph) -> T) -> T {
        match self.snapshot() {
            Some(active) => f(&active.graph),
            None => f(&TraitGraph::empty()),
        }
    }
}

fn owned(nodes: Vec<&TraitNode>) -> Vec<TraitNode> {
    nodes.into_iter().cloned().collect()
}

// ============================================================================
// Tests
// ============================================================================
