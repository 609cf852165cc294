#![forbid(unsafe_code)]
//! gitfolio-core library.
//!
//! Data shapes shared by the scoring and search crates: the repository
//! metadata record, the engine configuration, and the retrieval-side
//! record cache.
//!
//! # Conventions
//!
//! - **Errors**: domain validation uses the typed [`model::InvalidRecord`];
//!   config loading uses `anyhow::Result`.
//! - **Logging**: use `tracing` macros (`debug!`, `trace!`).

pub mod cache;
pub mod config;
pub mod model;

pub use config::{ClassifyConfig, EngineConfig, RecencyTier, ScoreConfig, SearchConfig, load_config};
pub use model::{InvalidRecord, RepoRecord};
