//! Runtime configuration.
//!
//! Loaded from a JSON file (every field optional), then optionally
//! overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `OFMAN_LOCALE` | `locale` (language tag, e.g. `fr-FR`) |
//! | `OFMAN_SEED` | `seed` (u64; fixes the sampling sequence) |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dataset::Locale;
use crate::sample::RandomSampler;
use crate::storage::GraphStore;
use crate::traversal::TraversalConfig;
use crate::{Error, Result};

pub const ENV_LOCALE: &str = "OFMAN_LOCALE";
pub const ENV_SEED: &str = "OFMAN_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadrantConfig {
    /// Which bundled dataset to load.
    pub locale: Locale,
    pub traversal: TraversalConfig,
    /// Fixed sampling seed; entropy when absent.
    pub seed: Option<u64>,
}

impl QuadrantConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Apply `OFMAN_LOCALE` / `OFMAN_SEED` if set.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(tag) = lookup(ENV_LOCALE) {
            self.locale = Locale::from_tag(&tag);
        }
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| Error::Config(format!("{ENV_SEED}={raw:?}: {e}")))?;
            self.seed = Some(seed);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        self.traversal.validate()
    }

    pub fn sampler(&self) -> RandomSampler {
        match self.seed {
            Some(seed) => RandomSampler::seeded(seed),
            None => RandomSampler::new(),
        }
    }

    /// A store with this config's sampler and its locale's dataset loaded.
    pub fn open_store(&self) -> Result<GraphStore<RandomSampler>> {
        self.validate()?;
        let store = GraphStore::with_sampler(self.sampler());
        store.load_default(self.locale)?;
        Ok(store)
    }
}
