//! Trait node in the quadrant graph.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Stable trait identifier (e.g. `"analytical"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitId(pub String);

impl TraitId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TraitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TraitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TraitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TraitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Whether a trait is a strength or its overextension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Polarity::Positive),
            "negative" => Some(Polarity::Negative),
            _ => None,
        }
    }
}

/// Display labels of a trait. Most traits carry one or two synonyms.
pub type Labels = SmallVec<[String; 2]>;

/// A trait in the quadrant graph.
///
/// The first label is the canonical one; the rest are synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitNode {
    pub id: TraitId,
    pub labels: Labels,
    pub polarity: Polarity,
}

impl TraitNode {
    pub fn new(id: impl Into<TraitId>, label: impl Into<String>, polarity: Polarity) -> Self {
        let mut labels = Labels::new();
        labels.push(label.into());
        Self { id: id.into(), labels, polarity }
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Canonical display label. Empty only for hand-built nodes that skipped validation.
    pub fn primary_label(&self) -> &str {
        self.labels.first().map(String::as_str).unwrap_or("")
    }

    /// Case-insensitive substring match against every label.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.labels.iter().any(|l| l.to_lowercase().contains(needle))
    }
}
