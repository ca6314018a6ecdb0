//! The serialized graph document: `{"traits": [...], "links": [...]}`.

use serde::{Deserialize, Serialize};
use super::{TraitLink, TraitNode};

/// A whole dataset as it is imported and exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub traits: Vec<TraitNode>,
    pub links: Vec<TraitLink>,
}

impl GraphPayload {
    pub fn new(traits: Vec<TraitNode>, links: Vec<TraitLink>) -> Self {
        Self { traits, links }
    }
}
