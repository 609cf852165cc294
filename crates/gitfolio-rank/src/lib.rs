#![forbid(unsafe_code)]
//! gitfolio-rank library.
//!
//! Maps repository metadata records to bounded relevance scores, ranks
//! a collection by descending score, and classifies records into
//! configured portfolio categories. Every function here is pure: the
//! reference instant (`now`) is injected by the caller, never read
//! internally.
//!
//! # Conventions
//!
//! - **Errors**: validation failures return the typed
//!   `gitfolio_core::InvalidRecord`; everything after validation is
//!   infallible.
//! - **Logging**: use `tracing` macros (`debug!`, `trace!`).

pub mod classify;
pub mod rank;
pub mod score;

pub use classify::classify;
pub use rank::{DEFAULT_RANK_LIMIT, rank, rank_scored};
pub use score::{ScoredRepo, SignalBreakdown, score_breakdown, score_record, score_records};
