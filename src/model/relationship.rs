//! Directed link between two traits.

use serde::{Deserialize, Serialize};
use super::TraitId;

/// What a link means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Target is the source taken to an extreme.
    Excess,
    /// Target is the complementary trait that balances the source.
    Balance,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Excess => "excess",
            LinkKind::Balance => "balance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "excess" => Some(LinkKind::Excess),
            "balance" => Some(LinkKind::Balance),
            _ => None,
        }
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way a hop follows a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Source → target (`linked_from`).
    Outgoing,
    /// Target → source (`linked_to`).
    Incoming,
}

/// A directed, typed link. Serialized as `{"from", "to", "type"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitLink {
    pub from: TraitId,
    pub to: TraitId,
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

impl TraitLink {
    pub fn new(from: impl Into<TraitId>, to: impl Into<TraitId>, kind: LinkKind) -> Self {
        Self { from: from.into(), to: to.into(), kind }
    }

    /// The endpoint a hop in `dir` lands on.
    pub fn far_end(&self, dir: Direction) -> &TraitId {
        match dir {
            Direction::Outgoing => &self.to,
            Direction::Incoming => &self.from,
        }
    }

    /// The endpoint a hop in `dir` starts from.
    pub fn near_end(&self, dir: Direction) -> &TraitId {
        match dir {
            Direction::Outgoing => &self.from,
            Direction::Incoming => &self.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_serializes_kind_as_type() {
        let link = TraitLink::new("analytical", "overthinking", LinkKind::Excess);
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["from"], "analytical");
        assert_eq!(json["to"], "overthinking");
        assert_eq!(json["type"], "excess");
    }

    #[test]
    fn test_ends_by_direction() {
        let link = TraitLink::new("a", "b", LinkKind::Balance);
        assert_eq!(link.far_end(Direction::Outgoing).as_str(), "b");
        assert_eq!(link.far_end(Direction::Incoming).as_str(), "a");
        assert_eq!(link.near_end(Direction::Incoming).as_str(), "b");
    }
}
