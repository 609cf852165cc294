//! Text-match phase: case-insensitive substring matching over a
//! record's name, description, and topics.
//!
//! Normalization applies to the comparison only; matched records keep
//! their original casing. An empty query is a substring of everything,
//! so it matches every record — that is a consequence of the rule, not
//! a special case.

use gitfolio_core::RepoRecord;

/// Whether the lowercased query is a substring of the record's
/// lowercased name, description, or any topic entry.
#[must_use]
pub fn matches_query(record: &RepoRecord, query_lower: &str) -> bool {
    if record.name.to_lowercase().contains(query_lower) {
        return true;
    }
    if let Some(description) = record.description.as_deref() {
        if description.to_lowercase().contains(query_lower) {
            return true;
        }
    }
    record
        .topics
        .iter()
        .any(|topic| topic.to_lowercase().contains(query_lower))
}

/// Indices of the first `cap` records matching `query_lower`, in input
/// order.
#[must_use]
pub fn text_match_indices(records: &[RepoRecord], query_lower: &str, cap: usize) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_query(record, query_lower))
        .map(|(idx, _)| idx)
        .take(cap)
        .collect()
}
