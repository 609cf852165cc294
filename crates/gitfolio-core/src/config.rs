//! Engine configuration: scoring weights, search caps, and category
//! keyword maps.
//!
//! Every constant the engine consults lives here so policy can be tuned
//! or tested independently of the algorithms. The engine functions take
//! these structs by reference and never read files or the environment
//! themselves.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub score: ScoreConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub classify: ClassifyConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            score: ScoreConfig::default(),
            search: SearchConfig::default(),
            classify: ClassifyConfig::default(),
        }
    }
}

/// Per-signal multipliers, caps, and bonuses for relevance scoring.
///
/// With the defaults below the maximum total score is 100:
/// 30 (stars) + 20 (forks) + 15 (size) + 10 (language) + 15 (recency)
/// + 10 (description).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Points per star, before the cap.
    #[serde(default = "default_star_multiplier")]
    pub star_multiplier: f64,
    /// Popularity cap (default 30).
    #[serde(default = "default_star_cap")]
    pub star_cap: f64,
    /// Points per fork, before the cap.
    #[serde(default = "default_fork_multiplier")]
    pub fork_multiplier: f64,
    /// Reach cap (default 20).
    #[serde(default = "default_fork_cap")]
    pub fork_cap: f64,
    /// Kilobytes per point of scale.
    #[serde(default = "default_size_divisor")]
    pub size_divisor: f64,
    /// Scale cap (default 15).
    #[serde(default = "default_size_cap")]
    pub size_cap: f64,
    /// Bonus when the primary language is in `popular_languages`.
    #[serde(default = "default_language_bonus")]
    pub language_bonus: f64,
    /// Exact language labels that earn `language_bonus`.
    #[serde(default = "default_popular_languages")]
    pub popular_languages: Vec<String>,
    /// Recency tiers, checked in order; the first tier whose `max_days`
    /// exceeds the age wins. An empty list disables the signal.
    #[serde(default = "default_recency_tiers")]
    pub recency_tiers: Vec<RecencyTier>,
    /// Bonus when the description length exceeds `description_min_chars`.
    #[serde(default = "default_description_bonus")]
    pub description_bonus: f64,
    /// Strict lower bound on description length, in Unicode scalars.
    #[serde(default = "default_description_min_chars")]
    pub description_min_chars: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            star_multiplier: default_star_multiplier(),
            star_cap: default_star_cap(),
            fork_multiplier: default_fork_multiplier(),
            fork_cap: default_fork_cap(),
            size_divisor: default_size_divisor(),
            size_cap: default_size_cap(),
            language_bonus: default_language_bonus(),
            popular_languages: default_popular_languages(),
            recency_tiers: default_recency_tiers(),
            description_bonus: default_description_bonus(),
            description_min_chars: default_description_min_chars(),
        }
    }
}

/// One recency tier: updates younger than `max_days` earn `bonus`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecencyTier {
    pub max_days: i64,
    pub bonus: f64,
}

/// Caps for the hybrid search result assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of text-match hits placed ahead of ranked fill.
    #[serde(default = "default_text_match_cap")]
    pub text_match_cap: usize,
    /// Maximum combined result length.
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            text_match_cap: default_text_match_cap(),
            result_cap: default_result_cap(),
        }
    }
}

/// Category label to keyword-list map for portfolio classification.
///
/// A `BTreeMap` so label iteration order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyConfig {
    #[serde(default = "default_categories")]
    pub categories: BTreeMap<String, Vec<String>>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

/// Load an [`EngineConfig`] from a TOML file.
///
/// A missing file yields the defaults; an unreadable or malformed file
/// is an error.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<EngineConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_star_multiplier() -> f64 {
    2.0
}

const fn default_star_cap() -> f64 {
    30.0
}

const fn default_fork_multiplier() -> f64 {
    3.0
}

const fn default_fork_cap() -> f64 {
    20.0
}

const fn default_size_divisor() -> f64 {
    1000.0
}

const fn default_size_cap() -> f64 {
    15.0
}

const fn default_language_bonus() -> f64 {
    10.0
}

fn default_popular_languages() -> Vec<String> {
    ["JavaScript", "TypeScript", "Python", "Java", "Go", "Rust"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_recency_tiers() -> Vec<RecencyTier> {
    vec![
        RecencyTier {
            max_days: 30,
            bonus: 15.0,
        },
        RecencyTier {
            max_days: 90,
            bonus: 10.0,
        },
        RecencyTier {
            max_days: 180,
            bonus: 5.0,
        },
    ]
}

const fn default_description_bonus() -> f64 {
    10.0
}

const fn default_description_min_chars() -> usize {
    20
}

const fn default_text_match_cap() -> usize {
    4
}

const fn default_result_cap() -> usize {
    8
}

fn default_categories() -> BTreeMap<String, Vec<String>> {
    let entries: [(&str, &[&str]); 6] = [
        ("backend", &["api", "server", "graphql", "rest", "grpc"]),
        ("data", &["data", "etl", "analytics", "spark", "pandas"]),
        (
            "devops",
            &["docker", "kubernetes", "terraform", "ci", "deploy"],
        ),
        ("mobile", &["android", "ios", "flutter", "react-native"]),
        (
            "systems",
            &["cli", "compiler", "kernel", "embedded", "database"],
        ),
        ("web", &["react", "vue", "svelte", "frontend", "css"]),
    ];

    entries
        .into_iter()
        .map(|(label, keywords)| {
            (
                label.to_string(),
                keywords.iter().map(|k| (*k).to_string()).collect(),
            )
        })
        .collect()
}
