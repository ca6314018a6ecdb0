//! # ofman-quadrant: Core Quadrant Suggestion Engine
//!
//! Given one trait in one quadrant category (core quality, pitfall,
//! challenge, allergy), suggests words for the other three by walking a
//! small trait/link graph.
//!
//! ## Design Principles
//!
//! 1. **One active graph**: `GraphStore` owns it; loads swap it atomically
//! 2. **Plain data model**: `TraitNode`, `TraitLink`, `Category`, `Suggestions` cross all boundaries
//! 3. **Position-derived cycle**: link kind and direction per step come from the category's place in the cycle
//! 4. **Injectable sampling**: every random narrowing goes through a `Sampler`
//! 5. **Not found is not an error**: unknown ids and empty queries return empty results
//!
//! ## Quick Start
//!
//! ```rust
//! use ofman_quadrant::{Category, GraphStore, Locale, QuadrantWalker};
//!
//! # fn example() -> ofman_quadrant::Result<()> {
//! let store = GraphStore::new();
//! store.load_default(Locale::En)?;
//!
//! let walker = QuadrantWalker::new(&store);
//! let suggestions = walker.traverse(Category::CoreQuality, "analytical");
//!
//! for (category, labels) in suggestions.iter() {
//!     println!("{category}: {labels:?}");
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Importing a dataset
//!
//! | Source | Call | Origin |
//! |--------|------|--------|
//! | Bundled (`en`, `fr`) | `GraphStore::load_default` | `Origin::Default(locale)` |
//! | User file | `GraphStore::import` | `Origin::Custom` |
//! | Built in code | `GraphBuilder` → `GraphStore::replace` | caller's choice |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod sample;
pub mod storage;
pub mod import;
pub mod dataset;
pub mod traversal;
pub mod suggest;
pub mod builder;
pub mod export;
pub mod session;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Category, Direction, GraphPayload, Hop, LinkKind, Polarity, Rotation,
    Suggestions, TraitId, TraitLink, TraitNode, CYCLE,
};

// ============================================================================
// Re-exports: Store, import, traversal
// ============================================================================

pub use storage::{ActiveGraph, GraphInfo, GraphStore, Origin, TraitGraph};
pub use import::ValidationError;
pub use dataset::Locale;
pub use sample::{RandomSampler, Sampler, Sequential};
pub use traversal::{QuadrantWalker, TraversalConfig};

// ============================================================================
// Re-exports: Sources, tooling
// ============================================================================

pub use suggest::{OfflineSource, SuggestionRequest, SuggestionSource};
pub use builder::{GraphBuilder, QuadrantSet};
pub use session::QuadrantSession;
pub use config::QuadrantConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to import database: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Raised by suggestion sources that call out to an external service.
    #[error("Generation error: {0}")]
    Generation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
