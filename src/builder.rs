//! Dataset builder.
//!
//! Assembles a graph from complete quadrants, e.g. the answers a suggestion
//! service gave for a list of core qualities. Each category's labels are
//! grouped into one trait whose id is the normalized first label; when the
//! same id shows up again its labels are merged into the existing trait.
//!
//! Per quadrant the four canonical links are added whenever both ends exist:
//!
//! ```text
//! core ─excess→ pitfall ─balance→ challenge ─excess→ allergy ─balance→ core
//! ```

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::storage::TraitGraph;

/// One quadrant's worth of labels, first label of each list canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantSet {
    #[serde(default)]
    pub cores: Vec<String>,
    #[serde(default)]
    pub pitfalls: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl QuadrantSet {
    pub fn labels(&self, category: Category) -> &[String] {
        match category {
            Category::CoreQuality => &self.cores,
            Category::Pitfall => &self.pitfalls,
            Category::Challenge => &self.challenges,
            Category::Allergy => &self.allergies,
        }
    }
}

impl From<Suggestions> for QuadrantSet {
    fn from(s: Suggestions) -> Self {
        Self {
            cores: s.core_quality,
            pitfalls: s.pitfall,
            challenges: s.challenge,
            allergies: s.allergy,
        }
    }
}

/// Incremental graph builder. Output order follows first appearance.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    traits: Vec<TraitNode>,
    by_id: HashMap<TraitId, usize>,
    links: Vec<TraitLink>,
    link_set: HashSet<TraitLink>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one quadrant. Sets without a usable core label are skipped.
    pub fn add(&mut self, set: &QuadrantSet) -> &mut Self {
        let core = Category::CoreQuality;
        let Some(core_id) = self.add_trait(set.labels(core), core.polarity()) else {
            tracing::debug!(?set, "skipping quadrant without core quality");
            return self;
        };

        let mut ids: [Option<TraitId>; 4] = [Some(core_id), None, None, None];
        for category in CYCLE.into_iter().skip(1) {
            ids[category.position()] = self.add_trait(set.labels(category), category.polarity());
        }

        for category in CYCLE {
            let from = &ids[category.position()];
            let to = &ids[category.next().position()];
            if let (Some(from), Some(to)) = (from, to) {
                self.add_link(TraitLink::new(from.clone(), to.clone(), category.outgoing_kind()));
            }
        }
        self
    }

    pub fn extend<'a>(&mut self, sets: impl IntoIterator<Item = &'a QuadrantSet>) -> &mut Self {
        for set in sets {
            self.add(set);
        }
        self
    }

    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn to_payload(&self) -> GraphPayload {
        GraphPayload::new(self.traits.clone(), self.links.clone())
    }

    pub fn build(self) -> TraitGraph {
        tracing::info!(traits = self.traits.len(), links = self.links.len(), "built graph");
        TraitGraph::from_parts(self.traits, self.links)
    }

    /// Returns the id the labels were filed under. A repeated id keeps the
    /// polarity it was first seen with.
    fn add_trait(&mut self, labels: &[String], polarity: Polarity) -> Option<TraitId> {
        let labels: Vec<&str> = labels
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        let id = TraitId(normalize_id(labels.first()?));
        if id.as_str().is_empty() {
            return None;
        }

        let pos = match self.by_id.get(&id) {
            Some(&pos) => pos,
            None => {
                self.traits.push(TraitNode { id: id.clone(), labels: Labels::new(), polarity });
                self.by_id.insert(id.clone(), self.traits.len() - 1);
                self.traits.len() - 1
            }
        };
        let node = &mut self.traits[pos];
        for label in labels {
            if !node.labels.iter().any(|l| l == label) {
                node.labels.push(label.to_string());
            }
        }
        Some(id)
    }

    fn add_link(&mut self, link: TraitLink) {
        if self.link_set.insert(link.clone()) {
            self.links.push(link);
        }
    }
}

/// Stable id for a label: lowercased, trimmed, punctuation dropped,
/// whitespace runs collapsed to `-`.
///
/// ```
/// use ofman_quadrant::builder::normalize_id;
/// assert_eq!(normalize_id("  Analysis Paralysis! "), "analysis-paralysis");
/// assert_eq!(normalize_id("Self-care"), "self-care");
/// ```
pub fn normalize_id(label: &str) -> String {
    let kept: String = label
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Split a comma-separated list, dropping blank entries.
pub fn parse_core_qualities(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
