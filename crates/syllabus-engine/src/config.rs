//! Engine configuration
//!
//! Values come from defaults, then an optional TOML file, then `SYLLABUS_*`
//! environment variables. Callers (the CLI) apply their own flags last and
//! call [`EngineConfig::validate`] before building an analyzer.

use crate::detector::{DEFAULT_SEARCH_THRESHOLD, DEFAULT_THRESHOLD};
use crate::report::ScoringVariant;
use crate::segment::DEFAULT_MIN_WORDS;
use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_THRESHOLD: &str = "SYLLABUS_THRESHOLD";
pub const ENV_MIN_WORDS: &str = "SYLLABUS_MIN_WORDS";
pub const ENV_SCORING_VARIANT: &str = "SYLLABUS_SCORING_VARIANT";
pub const ENV_DICTIONARY: &str = "SYLLABUS_DICTIONARY";

pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Probability at which a section counts as present (default: 0.4)
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Minimum tokens for a sentence to be scored (default: 2)
    #[serde(default = "default_min_sentence_words")]
    pub min_sentence_words: usize,
    /// Whether readability penalties reduce the total
    #[serde(default)]
    pub scoring_variant: ScoringVariant,
    /// Found/missing cutoff for `search` queries (default: 0.35)
    #[serde(default = "default_search_threshold")]
    pub search_threshold: f32,
    /// Word list for `spellcheck`, one word per line
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_min_sentence_words() -> usize {
    DEFAULT_MIN_WORDS
}

fn default_search_threshold() -> f32 {
    DEFAULT_SEARCH_THRESHOLD
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from(DEFAULT_DICTIONARY)
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            min_sentence_words: default_min_sentence_words(),
            scoring_variant: ScoringVariant::default(),
            search_threshold: default_search_threshold(),
            dictionary_path: default_dictionary_path(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string; missing keys take defaults
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Apply `SYLLABUS_*` overrides from the process environment
    pub fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_THRESHOLD) {
            self.threshold = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", ENV_THRESHOLD, value))?;
        }
        if let Some(value) = lookup(ENV_MIN_WORDS) {
            self.min_sentence_words = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", ENV_MIN_WORDS, value))?;
        }
        if let Some(value) = lookup(ENV_SCORING_VARIANT) {
            self.scoring_variant = value
                .parse::<ScoringVariant>()
                .map_err(|e: String| anyhow!(e))
                .with_context(|| format!("Invalid {}", ENV_SCORING_VARIANT))?;
        }
        if let Some(value) = lookup(ENV_DICTIONARY) {
            self.dictionary_path = PathBuf::from(value.trim());
        }
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            bail!("threshold must be within [0, 1], got {}", self.threshold);
        }
        if !(0.0..=1.0).contains(&self.search_threshold) {
            bail!(
                "search_threshold must be within [0, 1], got {}",
                self.search_threshold
            );
        }
        if self.min_sentence_words == 0 {
            bail!("min_sentence_words must be at least 1");
        }
        Ok(())
    }
}
