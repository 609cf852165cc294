//! Repository metadata model.

pub mod repo;

pub use repo::{InvalidRecord, RepoRecord};
