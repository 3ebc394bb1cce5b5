// src/github/payload.rs
// =============================================================================
// Decodes the kind-specific payload of an Event into a closed set of variants.
//
// GitHub sends the payload as a JSON object whose shape depends on the event
// "type" tag. We only care about a handful of kinds, and for each one only
// the fields needed to describe it in a sentence.
//
// Decoding never fails:
// - An unknown kind tag becomes Payload::Other(tag)
// - A field that is missing or has the wrong type takes its default value,
//   and a debug-level diagnostic is logged for the wrong-type case. The
//   other fields of the same payload are still used
//
// Rust concepts:
// - Enums with data: one variant per event kind
// - Generics: field::<T>() decodes any type that implements Deserialize
// - Option combinators: or_else / unwrap_or_default for fallbacks
// =============================================================================

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::Event;

// The payload variants we know how to describe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Commits pushed to a branch
    Push { commits: usize },
    /// Repository starred
    Watch,
    /// Private repository made public
    Public,
    /// Comment on a commit
    CommitComment,
    /// Branch or tag created
    Create,
    /// Branch or tag deleted
    Delete,
    /// Repository forked
    Fork,
    /// Wiki page created or edited
    Gollum,
    /// Pull request activity
    PullRequest {
        number: u64,
        title: String,
        html_url: String,
    },
    /// Any kind tag we don't handle yet
    Other(String),
}

impl Event {
    // Decodes this event's payload according to its kind tag
    //
    // Returns: the matching Payload variant. Fields that are missing or have
    // the wrong type fall back to their defaults one by one, so a single bad
    // field never hides the good ones next to it.
    pub fn payload(&self) -> Payload {
        let kind = self.kind.as_str();
        let raw = &self.payload;

        if !raw.is_object() && !raw.is_null() {
            tracing::debug!(kind, "event payload is not a JSON object, using empty payload");
        }

        match kind {
            "PushEvent" => {
                // Newer API responses may omit the commit list but still carry the size
                let commits = field::<usize>(kind, raw, &["size"])
                    .or_else(|| field::<Vec<Value>>(kind, raw, &["commits"]).map(|c| c.len()))
                    .unwrap_or_default();
                Payload::Push { commits }
            }
            "WatchEvent" => Payload::Watch,
            "PublicEvent" => Payload::Public,
            "CommitCommentEvent" => Payload::CommitComment,
            "CreateEvent" => Payload::Create,
            "DeleteEvent" => Payload::Delete,
            "ForkEvent" => Payload::Fork,
            "GollumEvent" => Payload::Gollum,
            "PullRequestEvent" => Payload::PullRequest {
                number: field(kind, raw, &["pull_request", "number"])
                    .or_else(|| field(kind, raw, &["number"]))
                    .unwrap_or_default(),
                title: field(kind, raw, &["pull_request", "title"]).unwrap_or_default(),
                html_url: field(kind, raw, &["pull_request", "html_url"]).unwrap_or_default(),
            },
            other => Payload::Other(other.to_string()),
        }
    }
}

// Reads one field out of a payload
//
// Parameters:
//   kind: the event kind tag (only used in the log line)
//   raw: the whole payload
//   path: object keys leading to the field, e.g. ["pull_request", "title"]
//
// Returns: Some(value) if the field exists and has the expected type.
//   A missing or null field is None without comment; a field of the wrong
//   type is None plus a debug-level diagnostic naming it.
fn field<T: DeserializeOwned>(kind: &str, raw: &Value, path: &[&str]) -> Option<T> {
    let value = path.iter().try_fold(raw, |value, key| value.get(key))?;
    if value.is_null() {
        return None;
    }

    match <T as Deserialize>::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            let field = path.join(".");
            tracing::debug!(kind, field = %field, error = %e, "ignoring malformed payload field");
            None
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why T::deserialize(value) instead of serde_json::from_value?
//    - from_value takes the Value by value, so we'd have to clone it
//    - &Value implements serde's Deserializer itself, so we can decode
//      straight from a borrow
//
// 2. Why decode field by field instead of one struct?
//    - Deriving Deserialize on a struct is all-or-nothing: one field with
//      the wrong type fails the whole struct
//    - Reading each field on its own keeps every field that is fine
//
// 3. What does try_fold do here?
//    - It walks the keys one at a time, and the ? inside the closure
//      (Value::get returns Option) stops at the first missing key
//
// 4. Why is Payload a separate enum from the raw JSON?
//    - GitHub's JSON is loose
//    - Payload holds only what we need, with no Options left to unwrap
// -----------------------------------------------------------------------------
