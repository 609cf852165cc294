//! Hybrid search orchestration: text matches first, ranked fill second.
//!
//! The blend favors exact textual relevance over raw score while still
//! surfacing high-quality repositories when the query is a poor textual
//! match:
//!
//! 1. score every record once (validating up front)
//! 2. text phase — records whose name/description/topics contain the
//!    lowercased query, input order, capped
//! 3. rank phase — the same scored pass, sorted descending, capped
//! 4. merge — text hits first, then ranked records not already present
//!    (by id), truncated to the result cap
//!
//! Text hits are deliberately not re-ranked among themselves, and the
//! ranked fill draws from the full input set rather than just the
//! non-matches. Both are product decisions, not accidents.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use gitfolio_core::{InvalidRecord, RepoRecord, ScoreConfig, SearchConfig};
use gitfolio_rank::{rank_scored, score_records};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text::text_match_indices;

/// Which phase produced a hit. Provenance metadata only; it never
/// changes ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Matched the query textually.
    Text,
    /// Pulled in by relevance ranking.
    Rank,
}

/// One hybrid search result: the record, its relevance score, and the
/// phase that selected it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub record: RepoRecord,
    pub score: f64,
    pub source: MatchSource,
}

/// Run hybrid search over `records` for `query`.
///
/// Returns at most `config.result_cap` hits, deduplicated by record
/// id. Empty input yields an empty result for any query; an empty
/// query text-matches everything, so the text phase degenerates to the
/// first `text_match_cap` records in input order.
///
/// # Errors
///
/// Returns the first [`InvalidRecord`] in input order when a record
/// carries a negative numeric field.
pub fn hybrid_search(
    records: &[RepoRecord],
    query: &str,
    now: DateTime<Utc>,
    score_config: &ScoreConfig,
    config: &SearchConfig,
) -> Result<Vec<SearchHit>, InvalidRecord> {
    let scored = score_records(records, now, score_config)?;
    if scored.is_empty() {
        return Ok(Vec::new());
    }

    let query_lower = query.to_lowercase();
    let text_indices = text_match_indices(records, &query_lower, config.text_match_cap);

    let mut hits: Vec<SearchHit> = Vec::with_capacity(config.result_cap);
    let mut seen: HashSet<String> = HashSet::with_capacity(config.result_cap);

    for idx in &text_indices {
        let entry = scored[*idx].clone();
        if seen.insert(entry.record.id.clone()) {
            hits.push(SearchHit {
                score: entry.score,
                source: MatchSource::Text,
                record: entry.record,
            });
        }
    }

    let ranked = rank_scored(scored, config.result_cap);
    for entry in ranked {
        if hits.len() >= config.result_cap {
            break;
        }
        if seen.insert(entry.record.id.clone()) {
            hits.push(SearchHit {
                score: entry.score,
                source: MatchSource::Rank,
                record: entry.record,
            });
        }
    }

    // The cap holds even when a custom text_match_cap exceeds it.
    hits.truncate(config.result_cap);

    debug!(
        query = query_lower.as_str(),
        text_hits = text_indices.len(),
        returned = hits.len(),
        "hybrid search completed"
    );
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().expect("valid date")
    }

    fn record(id: &str, name: &str, stars: i64) -> RepoRecord {
        RepoRecord {
            id: id.into(),
            name: name.into(),
            description: None,
            language: None,
            stars,
            forks: 0,
            size_kb: 0,
            updated_at: now() - Duration::days(365),
            topics: Vec::new(),
        }
    }

    #[test]
    fn text_hits_come_before_ranked_fill() {
        let records = vec![
            record("1", "popular", 500),
            record("2", "terraform-modules", 0),
            record("3", "also-popular", 400),
        ];

        let hits = hybrid_search(
            &records,
            "terraform",
            now(),
            &ScoreConfig::default(),
            &SearchConfig::default(),
        )
        .expect("valid records");

        assert_eq!(hits[0].record.id, "2");
        assert_eq!(hits[0].source, MatchSource::Text);
        assert!(hits[1..].iter().all(|h| h.source == MatchSource::Rank));
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn text_match_is_not_duplicated_by_ranked_fill() {
        let records = vec![record("1", "terraform", 900), record("2", "other", 0)];

        let hits = hybrid_search(
            &records,
            "terraform",
            now(),
            &ScoreConfig::default(),
            &SearchConfig::default(),
        )
        .expect("valid records");

        let ids: Vec<&str> = hits.iter().map(|h| h.record.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn custom_caps_are_respected() {
        let records: Vec<RepoRecord> = (0..10)
            .map(|i| record(&i.to_string(), &format!("match-{i}"), i))
            .collect();

        let config = SearchConfig {
            text_match_cap: 2,
            result_cap: 3,
        };
        let hits = hybrid_search(&records, "match", now(), &ScoreConfig::default(), &config)
            .expect("valid records");

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].record.id, "0");
        assert_eq!(hits[1].record.id, "1");
        assert_eq!(hits[2].source, MatchSource::Rank);
    }

    #[test]
    fn invalid_record_propagates() {
        let mut bad = record("1", "x", 0);
        bad.forks = -1;

        let err = hybrid_search(
            &[bad],
            "x",
            now(),
            &ScoreConfig::default(),
            &SearchConfig::default(),
        )
        .expect_err("must fail");
        assert_eq!(err.field, "forks");
    }
}
