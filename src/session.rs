//! Working state of one quadrant being filled in.

use serde::{Deserialize, Serialize};

use crate::model::{Category, Suggestions};

/// The user's input, the suggestions offered, and the words picked so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantSession {
    input: Option<(Category, String)>,
    suggestions: Suggestions,
    selected: Suggestions,
}

impl QuadrantSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what the user typed; it also becomes the selected word for
    /// that category.
    pub fn set_input(&mut self, category: Category, value: impl Into<String>) {
        let value = value.into();
        self.select_word(category, value.clone());
        self.input = Some((category, value));
    }

    pub fn input(&self) -> Option<(Category, &str)> {
        self.input.as_ref().map(|(c, v)| (*c, v.as_str()))
    }

    /// Replace the suggestion lists for the categories present in `update`.
    pub fn set_suggestions(&mut self, update: impl IntoIterator<Item = (Category, Vec<String>)>) {
        for (category, labels) in update {
            self.suggestions.set(category, labels);
        }
    }

    /// Take a source's answer for every category except the input one.
    ///
    /// Categories the answer left empty are cleared.
    pub fn apply(&mut self, suggestions: &Suggestions) {
        let input = self.input.as_ref().map(|(c, _)| *c);
        let update: Vec<_> = suggestions
            .iter()
            .filter(|(category, _)| Some(*category) != input)
            .map(|(c, labels)| (c, labels.to_vec()))
            .collect();
        self.set_suggestions(update);
    }

    pub fn suggestions(&self) -> &Suggestions {
        &self.suggestions
    }

    pub fn select_word(&mut self, category: Category, word: impl Into<String>) {
        self.selected.set(category, vec![word.into()]);
    }

    pub fn selected(&self, category: Category) -> Option<&str> {
        self.selected.get(category).first().map(String::as_str)
    }

    /// An input category is set and its value is not blank.
    pub fn is_ready(&self) -> bool {
        self.input.as_ref().is_some_and(|(_, v)| !v.trim().is_empty())
    }

    /// Every category has a selected word.
    pub fn is_complete(&self) -> bool {
        self.selected.iter().all(|(_, words)| words.first().is_some_and(|w| !w.is_empty()))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
