//! Category classification over configured keyword maps.
//!
//! Purely descriptive: labels a record by portfolio area (web, backend,
//! systems, ...) for the presentation layer to group by. Classification
//! never feeds back into scoring.

use gitfolio_core::{ClassifyConfig, RepoRecord};

/// Return the category labels whose keywords substring-match the
/// record's lowercased name, description, or topics.
///
/// Labels come back in the configured map's (sorted) order, so output
/// is deterministic for a given config. A record matching nothing
/// yields an empty vector.
#[must_use]
pub fn classify(record: &RepoRecord, config: &ClassifyConfig) -> Vec<String> {
    let name = record.name.to_lowercase();
    let description = record
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let topics: Vec<String> = record.topics.iter().map(|t| t.to_lowercase()).collect();

    config
        .categories
        .iter()
        .filter(|(_, keywords)| {
            keywords.iter().any(|keyword| {
                name.contains(keyword)
                    || description.contains(keyword)
                    || topics.iter().any(|topic| topic.contains(keyword))
            })
        })
        .map(|(label, _)| label.clone())
        .collect()
}
