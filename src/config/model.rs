// src/config/model.rs

use serde::Deserialize;

use crate::types::Strategy;

/// Default number of relabelings (the identity plus ten random ones).
pub const DEFAULT_SEEDS: usize = 11;

/// Default number of linear extensions drawn per relabeling.
pub const DEFAULT_BUDGET: usize = 10_000;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [search]
/// strategy = "auto"
/// seeds = 11
/// budget = 10000
/// exhaustive_limit = 110000
/// rng_seed = 7
/// ```
///
/// All sections and keys are optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub search: SearchSection,
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub strategy: Strategy,

    /// Relabelings used by the sampler, including the identity.
    #[serde(default = "default_seeds")]
    pub seeds: usize,

    /// Linear extensions drawn per relabeling.
    #[serde(default = "default_budget")]
    pub budget: usize,

    /// Upper bound on the extension count for which `auto` enumerates
    /// exhaustively. If `None`, `seeds * budget` is used.
    #[serde(default)]
    pub exhaustive_limit: Option<usize>,

    /// Fixed RNG seed; if `None` the sampler seeds from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_seeds() -> usize {
    DEFAULT_SEEDS
}

fn default_budget() -> usize {
    DEFAULT_BUDGET
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            seeds: default_seeds(),
            budget: default_budget(),
            exhaustive_limit: None,
            rng_seed: None,
        }
    }
}

/// Validated configuration. Construct through `ConfigFile::try_from`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub search: SearchSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(search: SearchSection) -> Self {
        Self { search }
    }

    /// Effective exhaustive limit for `Strategy::Auto`.
    pub fn exhaustive_limit(&self) -> usize {
        self.search
            .exhaustive_limit
            .unwrap_or_else(|| self.search.seeds.saturating_mul(self.search.budget))
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(SearchSection::default())
    }
}
