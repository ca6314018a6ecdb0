//! In-memory trait graph.
//!
//! An immutable, indexed snapshot of one dataset. Built once by the importer
//! (or the builder) and never mutated afterwards; replacing the dataset means
//! building a new `TraitGraph`.
//!
//! ## Indexes
//!
//! - **by id**: trait id → position in `traits`
//! - **outgoing / incoming**: trait id → link positions, keyed by id rather
//!   than by trait so that links whose endpoints are missing still index
//!   cleanly. Lookups skip endpoints that do not resolve to a trait.

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::model::*;
use crate::sample::{sample, Sampler};

type LinkList = SmallVec<[usize; 4]>;

/// Indexed trait/link graph.
#[derive(Debug, Clone, Default)]
pub struct TraitGraph {
    traits: Vec<TraitNode>,
    links: Vec<TraitLink>,
    by_id: HashMap<TraitId, usize>,
    /// source id → link positions
    outgoing: HashMap<TraitId, LinkList>,
    /// target id → link positions
    incoming: HashMap<TraitId, LinkList>,
}

impl TraitGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index already-validated parts. Trait ids are expected to be unique;
    /// if one repeats, lookups resolve to its first occurrence.
    pub(crate) fn from_parts(traits: Vec<TraitNode>, links: Vec<TraitLink>) -> Self {
        let mut by_id = HashMap::with_capacity(traits.len());
        for (pos, node) in traits.iter().enumerate() {
            by_id.entry(node.id.clone()).or_insert(pos);
        }

        let mut outgoing: HashMap<TraitId, LinkList> = HashMap::new();
        let mut incoming: HashMap<TraitId, LinkList> = HashMap::new();
        for (pos, link) in links.iter().enumerate() {
            outgoing.entry(link.from.clone()).or_default().push(pos);
            incoming.entry(link.to.clone()).or_default().push(pos);
        }

        Self { traits, links, by_id, outgoing, incoming }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn traits(&self) -> &[TraitNode] {
        &self.traits
    }

    pub fn links(&self) -> &[TraitLink] {
        &self.links
    }

    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Copy out as a serializable document.
    pub fn to_payload(&self) -> GraphPayload {
        GraphPayload::new(self.traits.clone(), self.links.clone())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get(&self, id: &str) -> Option<&TraitNode> {
        self.by_id.get(id).map(|&pos| &self.traits[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All traits with `polarity`, in storage order.
    pub fn by_polarity(&self, polarity: Polarity) -> Vec<&TraitNode> {
        self.traits.iter().filter(|t| t.polarity == polarity).collect()
    }

    /// Case-insensitive substring search over every label.
    ///
    /// An empty query matches nothing.
    pub fn search(&self, query: &str, polarity: Option<Polarity>) -> Vec<&TraitNode> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.traits
            .iter()
            .filter(|t| t.matches_lowercase(&needle))
            .filter(|t| polarity.map_or(true, |p| t.polarity == p))
            .collect()
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Every distinct trait one `kind` hop away from `id` in `dir`, in link
    /// order. Dangling endpoints are skipped; unknown ids yield nothing.
    pub fn neighbors(&self, id: &str, kind: LinkKind, dir: Direction) -> Vec<&TraitNode> {
        let index = match dir {
            Direction::Outgoing => &self.outgoing,
            Direction::Incoming => &self.incoming,
        };
        let Some(positions) = index.get(id) else {
            return Vec::new();
        };

        let mut seen: HashSet<&str> = HashSet::new();
        positions
            .iter()
            .map(|&pos| &self.links[pos])
            .filter(|link| link.kind == kind)
            .filter_map(|link| self.get(link.far_end(dir).as_str()))
            .filter(|node| seen.insert(node.id.as_str()))
            .collect()
    }

    /// [`neighbors`](Self::neighbors), narrowed to at most `limit` by `sampler`.
    pub fn linked<S: Sampler + ?Sized>(
        &self,
        id: &str,
        kind: LinkKind,
        dir: Direction,
        limit: usize,
        sampler: &S,
    ) -> Vec<&TraitNode> {
        sample(sampler, self.neighbors(id, kind, dir), limit)
    }

    /// Traits that `id` links to.
    pub fn linked_from<S: Sampler + ?Sized>(
        &self,
        id: &str,
        kind: LinkKind,
        limit: usize,
        sampler: &S,
    ) -> Vec<&TraitNode> {
        self.linked(id, kind, Direction::Outgoing, limit, sampler)
    }

    /// Traits that link to `id`.
    pub fn linked_to<S: Sampler + ?Sized>(
        &self,
        id: &str,
        kind: LinkKind,
        limit: usize,
        sampler: &S,
    ) -> Vec<&TraitNode> {
        self.linked(id, kind, Direction::Incoming, limit, sampler)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{RandomSampler, Sequential};

    fn ids(nodes: &[&TraitNode]) -> Vec<String> {
        nodes.iter().map(|n| n.id.to_string()).collect()
    }

    fn fixture() -> TraitGraph {
        let traits = vec![
            TraitNode::new("analytical", "Analytical", Polarity::Positive)
                .with_labels(["Analytical", "Methodical", "Systematic"]),
            TraitNode::new("overthinking", "Overthinking", Polarity::Negative)
                .with_labels(["Overthinking", "Analysis Paralysis"]),
            TraitNode::new("perfectionism", "Perfectionism", Polarity::Negative),
            TraitNode::new("rigidity", "Rigidity", Polarity::Negative),
            TraitNode::new("intuition", "Intuition", Polarity::Positive),
        ];
        let links = vec![
            TraitLink::new("analytical", "overthinking", LinkKind::Excess),
            TraitLink::new("analytical", "perfectionism", LinkKind::Excess),
            TraitLink::new("analytical", "rigidity", LinkKind::Excess),
            TraitLink::new("analytical", "ghost", LinkKind::Excess),
            TraitLink::new("overthinking", "intuition", LinkKind::Balance),
            TraitLink::new("rigidity", "intuition", LinkKind::Balance),
        ];
        TraitGraph::from_parts(traits, links)
    }

    #[test]
    fn test_get_by_id() {
        let g = fixture();
        assert_eq!(g.get("rigidity").map(|t| t.primary_label()), Some("Rigidity"));
        assert!(g.get("missing").is_none());
        assert!(g.contains("intuition"));
    }

    #[test]
    fn test_by_polarity_keeps_order() {
        let g = fixture();
        assert_eq!(ids(&g.by_polarity(Polarity::Positive)), ["analytical", "intuition"]);
        assert_eq!(g.by_polarity(Polarity::Negative).len(), 3);
    }

    #[test]
    fn test_search_matches_synonyms_case_insensitively() {
        let g = fixture();
        assert_eq!(ids(&g.search("SYSTEM", None)), ["analytical"]);
        assert_eq!(ids(&g.search("analy", None)), ["analytical", "overthinking"]);
        assert_eq!(ids(&g.search("analy", Some(Polarity::Negative))), ["overthinking"]);
    }

    #[test]
    fn test_search_empty_query_matches_nothing() {
        assert!(fixture().search("", None).is_empty());
    }

    #[test]
    fn test_neighbors_skip_dangling_targets() {
        let g = fixture();
        let out = g.neighbors("analytical", LinkKind::Excess, Direction::Outgoing);
        assert_eq!(ids(&out), ["overthinking", "perfectionism", "rigidity"]);
        assert!(g.neighbors("analytical", LinkKind::Balance, Direction::Outgoing).is_empty());
    }

    #[test]
    fn test_incoming_neighbors() {
        let g = fixture();
        let into = g.neighbors("intuition", LinkKind::Balance, Direction::Incoming);
        assert_eq!(ids(&into), ["overthinking", "rigidity"]);
        // A link into a missing trait still resolves its existing source.
        assert_eq!(ids(&g.neighbors("ghost", LinkKind::Excess, Direction::Incoming)), ["analytical"]);
        assert!(g.neighbors("ghost", LinkKind::Excess, Direction::Outgoing).is_empty());
    }

    #[test]
    fn test_duplicate_links_yield_distinct_neighbors() {
        let g = TraitGraph::from_parts(
            vec![
                TraitNode::new("a", "A", Polarity::Positive),
                TraitNode::new("b", "B", Polarity::Negative),
            ],
            vec![
                TraitLink::new("a", "b", LinkKind::Excess),
                TraitLink::new("a", "b", LinkKind::Excess),
            ],
        );
        assert_eq!(g.neighbors("a", LinkKind::Excess, Direction::Outgoing).len(), 1);
    }

    #[test]
    fn test_linked_respects_limit() {
        let g = fixture();
        let sampler = RandomSampler::seeded(3);
        for _ in 0..20 {
            let picked = g.linked_from("analytical", LinkKind::Excess, 2, &sampler);
            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0].id, picked[1].id);
        }
        assert_eq!(ids(&g.linked_from("analytical", LinkKind::Excess, 1, &Sequential)), ["overthinking"]);
    }

    #[test]
    fn test_unknown_id_links_nothing() {
        let g = fixture();
        assert!(g.linked_from("nobody", LinkKind::Excess, 5, &Sequential).is_empty());
        assert!(g.linked_to("nobody", LinkKind::Balance, 5, &Sequential).is_empty());
    }
}
