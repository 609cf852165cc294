//! Ranking: score a collection, order by descending relevance, keep the
//! top slice.

use chrono::{DateTime, Utc};
use gitfolio_core::{InvalidRecord, RepoRecord, ScoreConfig};
use tracing::debug;

use crate::score::{ScoredRepo, score_records};

/// Default cap on ranked results.
pub const DEFAULT_RANK_LIMIT: usize = 8;

/// Score every record, sort descending, and truncate to `limit`.
///
/// Fewer than `limit` records returns all of them, ranked; an empty
/// input returns an empty vector, not an error.
///
/// # Errors
///
/// Returns the first [`InvalidRecord`] in input order when a record
/// carries a negative numeric field.
pub fn rank(
    records: &[RepoRecord],
    now: DateTime<Utc>,
    config: &ScoreConfig,
    limit: usize,
) -> Result<Vec<ScoredRepo>, InvalidRecord> {
    let scored = score_records(records, now, config)?;
    Ok(rank_scored(scored, limit))
}

/// Sort pre-scored records descending and truncate to `limit`.
///
/// The sort is stable by contract: records with equal scores keep
/// their input order. That is the tie-break policy, not an accident of
/// the sort algorithm, and hybrid search relies on it when it ranks
/// the same scored pass it text-matched against.
#[must_use]
pub fn rank_scored(mut scored: Vec<ScoredRepo>, limit: usize) -> Vec<ScoredRepo> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);

    debug!(returned = scored.len(), limit, "ranked repository records");
    scored
}
