//! Bundled default datasets, one per supported locale.

use serde::{Deserialize, Serialize};

const DATABASE_EN: &str = include_str!("../data/database.en.json");
const DATABASE_FR: &str = include_str!("../data/database.fr.json");

/// Supported dataset languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "en-US")]
    En,
    #[serde(rename = "fr", alias = "fr-FR")]
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Resolve a language tag. French tags (`fr`, `fr-FR`, `fr_CA`, ...)
    /// select French; anything else falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if primary == "fr" { Locale::Fr } else { Locale::En }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Raw JSON of the bundled dataset.
    pub fn default_dataset(self) -> &'static str {
        match self {
            Locale::En => DATABASE_EN,
            Locale::Fr => DATABASE_FR,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
