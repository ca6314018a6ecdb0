//! The four quadrant categories and the fixed cycle that connects them.
//!
//! ```text
//!   core_quality ──excess──▶ pitfall
//!        ▲                      │
//!     balance                balance
//!        │                      ▼
//!     allergy ◀──excess──── challenge
//! ```
//!
//! Every link in a dataset is stored in this canonical (clockwise)
//! orientation. Link kind and polarity both follow from a category's
//! position in [`CYCLE`]: even positions are positive and emit `excess`
//! links, odd positions are negative and emit `balance` links.

use serde::{Deserialize, Serialize};
use super::{Direction, LinkKind, Polarity};

/// A role in the quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CoreQuality,
    Pitfall,
    Challenge,
    Allergy,
}

/// Categories in cycle order.
pub const CYCLE: [Category; 4] = [
    Category::CoreQuality,
    Category::Pitfall,
    Category::Challenge,
    Category::Allergy,
];

impl Category {
    pub fn position(self) -> usize {
        match self {
            Category::CoreQuality => 0,
            Category::Pitfall => 1,
            Category::Challenge => 2,
            Category::Allergy => 3,
        }
    }

    /// Category at `pos`, wrapping around the cycle.
    pub fn at(pos: usize) -> Self {
        CYCLE[pos % CYCLE.len()]
    }

    pub fn next(self) -> Self {
        Self::at(self.position() + 1)
    }

    pub fn prev(self) -> Self {
        Self::at(self.position() + CYCLE.len() - 1)
    }

    /// Kind of the canonical link from this category to [`Category::next`].
    pub fn outgoing_kind(self) -> LinkKind {
        if self.position() % 2 == 0 { LinkKind::Excess } else { LinkKind::Balance }
    }

    /// Polarity of the traits that fill this category.
    pub fn polarity(self) -> Polarity {
        if self.position() % 2 == 0 { Polarity::Positive } else { Polarity::Negative }
    }

    /// The three hops that visit every other category, starting here.
    pub fn walk(self, rotation: Rotation) -> [Hop; 3] {
        let mut at = self;
        std::array::from_fn(|_| {
            let hop = rotation.hop_from(at);
            at = hop.to;
            hop
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::CoreQuality => "core_quality",
            Category::Pitfall => "pitfall",
            Category::Challenge => "challenge",
            Category::Allergy => "allergy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        CYCLE.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way round the cycle a walk goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// start+1, start+2, start+3: follows links forward.
    #[default]
    Clockwise,
    /// start-1, start-2, start-3: follows links backward.
    CounterClockwise,
}

impl Rotation {
    /// One step of this rotation leaving `from`.
    pub fn hop_from(self, from: Category) -> Hop {
        match self {
            Rotation::Clockwise => Hop {
                from,
                to: from.next(),
                kind: from.outgoing_kind(),
                direction: Direction::Outgoing,
            },
            // The canonical link points prev → from, so walk it backwards.
            Rotation::CounterClockwise => Hop {
                from,
                to: from.prev(),
                kind: from.prev().outgoing_kind(),
                direction: Direction::Incoming,
            },
        }
    }
}

/// One traversal step between adjacent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub from: Category,
    pub to: Category,
    pub kind: LinkKind,
    pub direction: Direction,
}
