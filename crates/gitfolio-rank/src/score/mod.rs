//! Relevance scoring: one record in, one bounded score out.
//!
//! The total score is the unweighted sum of six independently-capped
//! signals (popularity, reach, scale, ecosystem fit, recency,
//! presentation), so no single signal can dominate. Under the default
//! [`ScoreConfig`] the maximum is 100. Scoring is deterministic: the
//! same record, `now`, and config always produce the same `f64`.

mod signals;

use chrono::{DateTime, Utc};
use gitfolio_core::{InvalidRecord, RepoRecord, ScoreConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-signal contributions to a record's score, for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalBreakdown {
    pub popularity: f64,
    pub reach: f64,
    pub scale: f64,
    pub ecosystem: f64,
    pub recency: f64,
    pub presentation: f64,
}

impl SignalBreakdown {
    /// Unweighted sum of all six signals.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.popularity + self.reach + self.scale + self.ecosystem + self.recency
            + self.presentation
    }
}

/// A record together with its computed relevance score. Ephemeral:
/// recomputed on every ranking request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRepo {
    pub record: RepoRecord,
    pub score: f64,
    pub breakdown: SignalBreakdown,
}

/// Compute the per-signal breakdown for one record.
#[must_use]
pub fn score_breakdown(
    record: &RepoRecord,
    now: DateTime<Utc>,
    config: &ScoreConfig,
) -> SignalBreakdown {
    SignalBreakdown {
        popularity: signals::popularity(record.stars, config),
        reach: signals::reach(record.forks, config),
        scale: signals::scale(record.size_kb, config),
        ecosystem: signals::ecosystem(record.language.as_deref(), config),
        recency: signals::recency(record.updated_at, now, config),
        presentation: signals::presentation(record.description.as_deref(), config),
    }
}

/// Compute the total relevance score for one record.
///
/// Assumes a validated record; negative counts are caught by
/// [`score_records`] before any math runs.
#[must_use]
pub fn score_record(record: &RepoRecord, now: DateTime<Utc>, config: &ScoreConfig) -> f64 {
    score_breakdown(record, now, config).total()
}

/// Validate and score a whole collection, preserving input order.
///
/// # Errors
///
/// Returns the first [`InvalidRecord`] in input order when a record
/// carries a negative numeric field.
pub fn score_records(
    records: &[RepoRecord],
    now: DateTime<Utc>,
    config: &ScoreConfig,
) -> Result<Vec<ScoredRepo>, InvalidRecord> {
    for record in records {
        record.validate()?;
    }

    let scored: Vec<ScoredRepo> = records
        .iter()
        .map(|record| {
            let breakdown = score_breakdown(record, now, config);
            ScoredRepo {
                record: record.clone(),
                score: breakdown.total(),
                breakdown,
            }
        })
        .collect();

    debug!(count = scored.len(), "scored repository records");
    Ok(scored)
}
