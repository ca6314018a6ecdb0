//! # Quadrant Graph Model
//!
//! Plain data types shared by the store, the traversal engine, the importer
//! and the suggestion sources.
//!
//! Design rule: this module is pure data. No I/O, no state, no async.

pub mod node;
pub mod relationship;
pub mod category;
pub mod suggestions;
pub mod payload;

pub use node::{Labels, Polarity, TraitId, TraitNode};
pub use relationship::{Direction, LinkKind, TraitLink};
pub use category::{Category, Hop, Rotation, CYCLE};
pub use suggestions::Suggestions;
pub use payload::GraphPayload;
