use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One repository's metadata, as handed over by the data-retrieval
/// collaborator.
///
/// Serde aliases accept raw GitHub field names (`stargazers_count`,
/// `forks_count`, `size`, `pushed_at`) so API payloads can be passed
/// through without renaming.
///
/// Counts are signed on purpose: records arrive from an untrusted
/// boundary, and a negative count must surface as [`InvalidRecord`]
/// rather than be unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Opaque unique key, stable across calls.
    pub id: String,
    /// Short display name, non-empty.
    pub name: String,
    /// Free-text description; may be absent.
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language label; absent when no language was detected.
    #[serde(default)]
    pub language: Option<String>,
    /// Star count, non-negative.
    #[serde(alias = "stargazers_count")]
    pub stars: i64,
    /// Fork count, non-negative.
    #[serde(alias = "forks_count")]
    pub forks: i64,
    /// Repository size on disk in kilobytes, non-negative.
    #[serde(alias = "size")]
    pub size_kb: i64,
    /// Last-update instant.
    #[serde(alias = "pushed_at")]
    pub updated_at: DateTime<Utc>,
    /// Ordered free-text topic labels; may be empty.
    #[serde(default)]
    pub topics: Vec<String>,
}

impl RepoRecord {
    /// Check that every required numeric field is non-negative.
    ///
    /// Missing optional text, empty topics, and zero counts are all
    /// valid; only a present-but-negative count is an error.
    pub fn validate(&self) -> Result<(), InvalidRecord> {
        for (field, value) in [
            ("stars", self.stars),
            ("forks", self.forks),
            ("size_kb", self.size_kb),
        ] {
            if value < 0 {
                return Err(InvalidRecord {
                    id: self.id.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Error returned when a required numeric field is present but negative.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("repository `{id}`: field `{field}` must be non-negative, got {value}")]
pub struct InvalidRecord {
    pub id: String,
    pub field: &'static str,
    pub value: i64,
}
