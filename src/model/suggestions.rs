//! Per-category suggestion lists, the output shape shared by every
//! suggestion source.

use serde::{Deserialize, Serialize};
use super::{Category, CYCLE};

/// Up to N labels for each quadrant category.
///
/// Serializes as `{"core_quality": [...], "pitfall": [...], ...}`, which is
/// also the shape a language-model source is asked to return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub core_quality: Vec<String>,
    #[serde(default)]
    pub pitfall: Vec<String>,
    #[serde(default)]
    pub challenge: Vec<String>,
    #[serde(default)]
    pub allergy: Vec<String>,
}

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::CoreQuality => &self.core_quality,
            Category::Pitfall => &self.pitfall,
            Category::Challenge => &self.challenge,
            Category::Allergy => &self.allergy,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::CoreQuality => &mut self.core_quality,
            Category::Pitfall => &mut self.pitfall,
            Category::Challenge => &mut self.challenge,
            Category::Allergy => &mut self.allergy,
        }
    }

    pub fn set(&mut self, category: Category, labels: Vec<String>) {
        *self.get_mut(category) = labels;
    }

    /// Drop the list for `category` (typically the one the user typed in).
    pub fn without(mut self, category: Category) -> Self {
        self.get_mut(category).clear();
        self
    }

    /// Lists in cycle order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        CYCLE.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, labels)| labels.is_empty())
    }

    /// Total number of labels across all categories.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, labels)| labels.len()).sum()
    }
}
