//! Retrieval-side record cache.
//!
//! Owned by the data-retrieval collaborator, not by the scoring or
//! search engines: the engines are pure functions and never consult
//! cached state. This struct exists so the surrounding application has
//! an explicit home for the per-owner record cache and fetch counter
//! it would otherwise be tempted to keep as process-wide globals.
//!
//! Freshness is decided against an injected `now`, never wall-clock
//! reads inside the cache, so callers and tests stay deterministic.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::trace;

use crate::model::RepoRecord;

/// Per-owner cached record sets with TTL-based freshness.
#[derive(Debug, Clone)]
pub struct RecordCache {
    ttl: Duration,
    fetches: u64,
    entries: BTreeMap<String, Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    records: Vec<RepoRecord>,
    stored_at: DateTime<Utc>,
}

/// Outcome of a cache lookup, with freshness provenance.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    /// Entry exists and is within its TTL.
    Fresh(&'a [RepoRecord]),
    /// Entry exists but its TTL has elapsed; the caller decides whether
    /// to serve it anyway or refetch.
    Stale(&'a [RepoRecord]),
    /// No entry for this owner.
    Missing,
}

impl RecordCache {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            fetches: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Look up the records cached for `owner`, counting the lookup.
    pub fn get(&mut self, owner: &str, now: DateTime<Utc>) -> Lookup<'_> {
        self.fetches += 1;

        match self.entries.get(owner) {
            Some(entry) if now - entry.stored_at <= self.ttl => {
                trace!(owner, "record cache hit (fresh)");
                Lookup::Fresh(&entry.records)
            }
            Some(entry) => {
                trace!(owner, "record cache hit (stale)");
                Lookup::Stale(&entry.records)
            }
            None => {
                trace!(owner, "record cache miss");
                Lookup::Missing
            }
        }
    }

    /// Store (or replace) the records for `owner`, stamped at `now`.
    pub fn insert(&mut self, owner: impl Into<String>, records: Vec<RepoRecord>, now: DateTime<Utc>) {
        self.entries.insert(
            owner.into(),
            Entry {
                records,
                stored_at: now,
            },
        );
    }

    /// Drop every entry whose TTL has elapsed. Returns how many were
    /// evicted.
    pub fn evict_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| now - entry.stored_at <= ttl);
        before - self.entries.len()
    }

    /// Total lookups since construction.
    #[must_use]
    pub const fn fetch_count(&self) -> u64 {
        self.fetches
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
