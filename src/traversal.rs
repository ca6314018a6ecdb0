//! # Quadrant Traversal
//!
//! Derives the three missing quadrants from one known trait by walking the
//! category cycle. Each step:
//!
//! 1. takes the (kind, direction) of the hop from [`Category::walk`]
//! 2. expands every frontier trait one hop, at most `neighbor_limit` each
//! 3. unions the results, first occurrence of an id wins
//! 4. samples at most `frontier_size` traits as the next frontier
//! 5. flattens all their labels and samples at most `labels_per_category`
//!
//! A start id that is not in the graph yields empty lists, not an error.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::sample::{sample, Sampler};
use crate::storage::{GraphStore, TraitGraph};
use crate::{Error, Result};

// ============================================================================
// Config
// ============================================================================

/// Limits applied at every traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Neighbors fetched per frontier trait.
    pub neighbor_limit: usize,
    /// Traits carried into the next step.
    pub frontier_size: usize,
    /// Labels reported per category.
    pub labels_per_category: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self { neighbor_limit: 5, frontier_size: 5, labels_per_category: 5 }
    }
}

impl TraversalConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("neighbor_limit", self.neighbor_limit),
            ("frontier_size", self.frontier_size),
            ("labels_per_category", self.labels_per_category),
        ];
        match fields.iter().find(|(_, v)| *v == 0) {
            Some((name, _)) => Err(Error::Config(format!("traversal.{name} must be at least 1"))),
            None => Ok(()),
        }
    }
}

// ============================================================================
// QuadrantWalker
// ============================================================================

/// Traversal engine bound to a store.
pub struct QuadrantWalker<'s, S: Sampler> {
    store: &'s GraphStore<S>,
    config: TraversalConfig,
}

impl<'s, S: Sampler> QuadrantWalker<'s, S> {
    pub fn new(store: &'s GraphStore<S>) -> Self {
        Self::with_config(store, TraversalConfig::default())
    }

    pub fn with_config(store: &'s GraphStore<S>, config: TraversalConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Suggestions for the three categories after `start`, walking clockwise.
    pub fn traverse(&self, start: Category, start_id: &str) -> Suggestions {
        self.traverse_with(start, start_id, Rotation::Clockwise)
    }

    /// As [`traverse`](Self::traverse), in the given rotation.
    ///
    /// The whole walk runs against a single snapshot of the active graph.
    pub fn traverse_with(&self, start: Category, start_id: &str, rotation: Rotation) -> Suggestions {
        let Some(active) = self.store.snapshot() else {
            tracing::debug!(%start, start_id, "no graph loaded; nothing to traverse");
            return Suggestions::new();
        };
        walk(active.graph(), self.store.sampler(), &self.config, start, start_id, rotation)
    }
}

/// Walk `graph` from `start_id`, which fills the `start` category.
///
/// The `start` list in the result is always empty.
pub fn walk<'g, S: Sampler + ?Sized>(
    graph: &'g TraitGraph,
    sampler: &S,
    config: &TraversalConfig,
    start: Category,
    start_id: &'g str,
    rotation: Rotation,
) -> Suggestions {
    let mut out = Suggestions::new();
    let mut frontier: Vec<&'g str> = vec![start_id];

    for hop in start.walk(rotation) {
        let mut seen: HashSet<&str> = HashSet::new();
        let candidates: Vec<&TraitNode> = frontier
            .iter()
            .flat_map(|id| graph.linked(id, hop.kind, hop.direction, config.neighbor_limit, sampler))
            .filter(|node| seen.insert(node.id.as_str()))
            .collect();
        let candidate_count = candidates.len();

        let selected = sample(sampler, candidates, config.frontier_size);
        let labels: Vec<String> = selected
            .iter()
            .flat_map(|node| node.labels.iter().cloned())
            .collect();
        let labels = sample(sampler, labels, config.labels_per_category);

        tracing::debug!(
            from = %hop.from,
            to = %hop.to,
            kind = %hop.kind,
            direction = ?hop.direction,
            candidates = candidate_count,
            frontier = selected.len(),
            labels = labels.len(),
            "traversal step"
        );

        out.set(hop.to, labels);
        frontier = selected.iter().map(|node| node.id.as_str()).collect();
    }

    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{RandomSampler, Sequential};
    use pretty_assertions::assert_eq;

    fn cycle_graph() -> TraitGraph {
        TraitGraph::from_parts(
            vec![
                TraitNode::new("core", "Core", Polarity::Positive),
                TraitNode::new("pit", "Pit", Polarity::Negative),
                TraitNode::new("chal", "Chal", Polarity::Positive),
                TraitNode::new("allg", "Allg", Polarity::Negative),
            ],
            vec![
                TraitLink::new("core", "pit", LinkKind::Excess),
                TraitLink::new("pit", "chal", LinkKind::Balance),
                TraitLink::new("chal", "allg", LinkKind::Excess),
                TraitLink::new("allg", "core", LinkKind::Balance),
            ],
        )
    }

    fn labels(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_walk_from_pitfall() {
        let g = cycle_graph();
        let s = walk(&g, &Sequential, &TraversalConfig::default(), Category::Pitfall, "pit", Rotation::Clockwise);
        assert_eq!(s.challenge, labels(&["Chal"]));
        assert_eq!(s.allergy, labels(&["Allg"]));
        assert_eq!(s.core_quality, labels(&["Core"]));
        assert!(s.pitfall.is_empty());
    }

    #[test]
    fn test_counter_clockwise_matches_clockwise_on_cycle() {
        let g = cycle_graph();
        let cfg = TraversalConfig::default();
        for (start, id) in [
            (Category::CoreQuality, "core"),
            (Category::Pitfall, "pit"),
            (Category::Challenge, "chal"),
            (Category::Allergy, "allg"),
        ] {
            let cw = walk(&g, &Sequential, &cfg, start, id, Rotation::Clockwise);
            let ccw = walk(&g, &Sequential, &cfg, start, id, Rotation::CounterClockwise);
            assert_eq!(cw, ccw, "start = {start}");
        }
    }

    #[test]
    fn test_unknown_start_yields_empty() {
        let g = cycle_graph();
        let s = walk(&g, &Sequential, &TraversalConfig::default(), Category::CoreQuality, "nope", Rotation::Clockwise);
        assert!(s.is_empty());
    }

    #[test]
    fn test_labels_are_capped() {
        // one core fanning out to seven pitfalls with two labels each
        let mut traits = vec![TraitNode::new("c", "C", Polarity::Positive)];
        let mut links = Vec::new();
        for i in 0..7 {
            let id = format!("p{i}");
            traits.push(
                TraitNode::new(id.as_str(), "x", Polarity::Negative)
                    .with_labels([format!("P{i}"), format!("P{i} alt")]),
            );
            links.push(TraitLink::new("c", id.as_str(), LinkKind::Excess));
        }
        let g = TraitGraph::from_parts(traits, links);
        let sampler = RandomSampler::seeded(11);
        let s = walk(&g, &sampler, &TraversalConfig::default(), Category::CoreQuality, "c", Rotation::Clockwise);
        assert_eq!(s.pitfall.len(), 5);
        let unique: HashSet<_> = s.pitfall.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_config_rejects_zero() {
        let cfg = TraversalConfig { frontier_size: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(Error::Config(msg)) if msg.contains("frontier_size")));
        assert!(TraversalConfig::default().validate().is_ok());
    }

    #[test]
    fn test_walker_without_graph() {
        let store = GraphStore::with_sampler(Sequential);
        let walker = QuadrantWalker::new(&store);
        assert!(walker.traverse(Category::Allergy, "x").is_empty());
    }
}
