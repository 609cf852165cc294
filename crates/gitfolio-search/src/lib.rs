#![forbid(unsafe_code)]
//! gitfolio-search library.
//!
//! Blends free-text substring matching with relevance ranking into a
//! single capped result list ("hybrid search"). Stateless: every call
//! recomputes from its inputs plus the injected reference instant.
//!
//! # Conventions
//!
//! - **Errors**: validation failures return the typed
//!   `gitfolio_core::InvalidRecord`.
//! - **Logging**: use `tracing` macros (`debug!`, `trace!`).

pub mod hybrid;
pub mod text;

pub use hybrid::{MatchSource, SearchHit, hybrid_search};
