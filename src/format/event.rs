// src/format/event.rs
// =============================================================================
// Turns one GitHub event into a one-line, human-readable description.
//
//   ⤴️ Pushed 3 commits to [alice/demo](https://github.com/alice/demo)
//   ⛙ Opened [#42 Fix bug](https://github.com/alice/demo/pull/42) in [alice/demo](...)
//
// Every event produces exactly one non-empty line. Kinds we don't describe
// yet get a ":bangbang: <kind> (not implemented)" line instead of an error.
//
// Rust concepts:
// - Exhaustive match: adding a Payload variant won't compile until it's
//   described here
// - format!: Builds each line as a new String
// =============================================================================

use super::link::{render_link, Format};
use crate::github::{Event, Payload};

// Describes one event in a single line
//
// Parameters:
//   event: the GitHub event (borrowed, we only read it)
//   format: which link syntax to use (Markdown or Org)
//
// Returns: the description, e.g. "⭐ Starred [alice/demo](https://github.com/alice/demo)"
pub fn humanize_event(event: &Event, format: Format) -> String {
    let repo = &event.repo;
    let link = render_link(format, &repo.name, &repo.html_url());

    match event.payload() {
        Payload::Push { commits } => format!("⤴️ Pushed {} commits to {}", commits, link),
        Payload::Watch => format!("⭐ Starred {}", link),
        Payload::Public => format!("🔓 Made {} public", link),
        Payload::CommitComment => format!("📝 Created a commit comment in {}", link),
        Payload::Create => format!("➕ Created a branch/tag in {}", link),
        Payload::Delete => format!("➖ Deleted a branch/tag in {}", link),
        Payload::Fork => format!("🍴 Forked {}", link),
        Payload::Gollum => format!("📃 Created/updated a wiki page in {}", link),
        Payload::PullRequest { number, title, html_url } => {
            let request = render_link(format, &format!("#{} {}", number, title), &html_url);
            format!("⛙ Opened {} in {}", request, link)
        }
        Payload::Other(kind) => format!(":bangbang: {} (not implemented)", kind),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does match need every variant?
//    - Rust checks that a match covers all cases
//    - Payload::Other catches every kind tag we don't know, so there's
//      always exactly one line per event
//
// 2. What is Payload::PullRequest { number, title, html_url }?
//    - A pattern that pulls the fields out of the variant by name
//    - The fields are moved out of the Payload, which we own
//
// 3. Why &format!(...) when calling render_link?
//    - render_link takes &str, format! returns a String
//    - & borrows the temporary String as a &str for the call
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn event(kind: &str, payload: Value) -> Event {
        serde_json::from_value(json!({
            "type": kind,
            "repo": { "name": "alice/demo" },
            "payload": payload,
        }))
        .unwrap()
    }

    const MD_LINK: &str = "[alice/demo](https://github.com/alice/demo)";
    const ORG_LINK: &str = "[[https://github.com/alice/demo][alice/demo]]";

    #[test]
    fn test_push_markdown() {
        let e = event("PushEvent", json!({ "commits": [{}, {}, {}] }));
        let line = humanize_event(&e, Format::Markdown);
        assert!(line.ends_with(&format!("Pushed 3 commits to {}", MD_LINK)), "{}", line);
        assert!(line.starts_with("⤴️"));
    }

    #[test]
    fn test_pull_request_org() {
        let e = event(
            "PullRequestEvent",
            json!({
                "action": "opened",
                "pull_request": {
                    "number": 42,
                    "title": "Fix bug",
                    "html_url": "https://github.com/alice/demo/pull/42"
                }
            }),
        );
        let line = humanize_event(&e, Format::Org);
        assert!(line.contains("[[https://github.com/alice/demo/pull/42][#42 Fix bug]]"), "{}", line);
        assert!(line.contains(ORG_LINK), "{}", line);
        assert!(line.starts_with("⛙ Opened "));
    }

    #[test]
    fn test_pull_request_markdown() {
        let e = event(
            "PullRequestEvent",
            json!({ "pull_request": { "number": 1, "title": "Docs", "html_url": "https://x/pull/1" } }),
        );
        assert_eq!(
            humanize_event(&e, Format::Markdown),
            format!("⛙ Opened [#1 Docs](https://x/pull/1) in {}", MD_LINK)
        );
    }

    #[test]
    fn test_every_supported_kind() {
        let cases = [
            ("WatchEvent", format!("⭐ Starred {}", MD_LINK)),
            ("PublicEvent", format!("🔓 Made {} public", MD_LINK)),
            ("CommitCommentEvent", format!("📝 Created a commit comment in {}", MD_LINK)),
            ("CreateEvent", format!("➕ Created a branch/tag in {}", MD_LINK)),
            ("DeleteEvent", format!("➖ Deleted a branch/tag in {}", MD_LINK)),
            ("ForkEvent", format!("🍴 Forked {}", MD_LINK)),
            ("GollumEvent", format!("📃 Created/updated a wiki page in {}", MD_LINK)),
        ];

        for (kind, expected) in cases {
            assert_eq!(humanize_event(&event(kind, json!({})), Format::Markdown), expected);
        }
    }

    #[test]
    fn test_org_links_for_simple_kind() {
        let line = humanize_event(&event("ForkEvent", json!({})), Format::Org);
        assert_eq!(line, format!("🍴 Forked {}", ORG_LINK));
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let line = humanize_event(&event("FooEvent", json!({})), Format::Markdown);
        assert!(line.contains("FooEvent"));
        assert!(line.contains("not implemented"));
    }

    #[test]
    fn test_malformed_payload_still_describes() {
        let e = event("PushEvent", json!("garbage"));
        assert_eq!(
            humanize_event(&e, Format::Markdown),
            format!("⤴️ Pushed 0 commits to {}", MD_LINK)
        );
    }

    #[test]
    fn test_partly_malformed_pull_request_keeps_good_fields() {
        let e = event(
            "PullRequestEvent",
            json!({ "number": 9, "pull_request": { "number": 9, "title": 5, "html_url": "https://x/9" } }),
        );
        assert_eq!(
            humanize_event(&e, Format::Markdown),
            format!("⛙ Opened [#9 ](https://x/9) in {}", MD_LINK)
        );
    }

    #[test]
    fn test_partly_malformed_push_keeps_size() {
        let e = event("PushEvent", json!({ "size": 3, "commits": 17 }));
        assert_eq!(
            humanize_event(&e, Format::Markdown),
            format!("⤴️ Pushed 3 commits to {}", MD_LINK)
        );
    }

    #[test]
    fn test_same_input_same_output() {
        let e = event("PushEvent", json!({ "size": 2 }));
        for format in [Format::Markdown, Format::Org] {
            assert_eq!(humanize_event(&e, format), humanize_event(&e, format));
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let events = vec![
            event("WatchEvent", json!({})),
            event("ForkEvent", json!({})),
            event("FooEvent", json!({})),
        ];
        let lines: Vec<String> = events.iter().map(|e| humanize_event(e, Format::Markdown)).collect();
        assert!(lines[0].starts_with("⭐"));
        assert!(lines[1].starts_with("🍴"));
        assert!(lines[2].starts_with(":bangbang:"));
    }
}
