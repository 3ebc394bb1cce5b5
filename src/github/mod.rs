// src/github/mod.rs
// =============================================================================
// This module handles everything that comes from GitHub.
//
// Currently implements:
// - API data types for events and repositories (types.rs)
// - Decoding event payloads into a closed set of variants (payload.rs)
// - Fetching a user's public events and recent repositories (fetch.rs)
// =============================================================================

mod fetch;
mod payload;
mod types;

pub use fetch::{GithubClient, PageRequest, DEFAULT_API_URL};
pub use payload::Payload;
pub use types::{Event, Repository};
