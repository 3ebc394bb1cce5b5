// src/github/types.rs
// =============================================================================
// Data types returned by the GitHub REST API.
//
// Only the fields the README needs are modelled. Everything is Serialize as
// well as Deserialize because the same values are handed to Tera templates,
// and the template functions turn them back into Rust types.
//
// The event payload is kept as raw JSON. Its shape depends on the event kind,
// and a payload we can't decode must never stop the README from rendering,
// so it is decoded lazily by Event::payload() (see payload.rs).
// =============================================================================

use serde::{Deserialize, Serialize};

// One entry from /users/{user}/events/public
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The event kind tag, e.g. "PushEvent" or "WatchEvent"
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,

    /// The repository the event happened in
    pub repo: RepoRef,

    /// Kind-specific details, decoded on demand
    #[serde(default)]
    pub payload: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub login: String,
}

// The short repository reference embedded in every event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// "owner/repo"
    pub name: String,
}

impl RepoRef {
    /// Canonical web URL of the repository.
    ///
    /// The name is not validated; whatever GitHub sent is appended as-is.
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}", self.name)
    }
}

// One entry from /users/{user}/repos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}
