// src/format/link.rs
// =============================================================================
// Output formats and the clickable-link markup for each of them.
//
//   Markdown:  [text](url)
//   Org-mode:  [[url][text]]
//
// Rendering is pure string formatting: no escaping, no validation. Any text
// and URL produce a link.
// =============================================================================

use anyhow::{anyhow, Error};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// The markup dialect of the generated README
//
// Serialized as "md" / "org", which is also how it's spelled on the command
// line and inside templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum Format {
    /// Markdown, e.g. README.md
    #[default]
    #[value(name = "md", alias = "markdown")]
    #[serde(rename = "md")]
    Markdown,
    /// Emacs Org-mode, e.g. README.org
    #[value(name = "org")]
    #[serde(rename = "org")]
    Org,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Org => "org",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" | "markdown" => Ok(Format::Markdown),
            "org" => Ok(Format::Org),
            other => Err(anyhow!("Unknown format '{}' (expected md or org)", other)),
        }
    }
}

/// Renders a clickable link in the syntax of `format`.
pub fn render_link(format: Format, text: &str, url: &str) -> String {
    match format {
        Format::Markdown => format!("[{}]({})", text, url),
        Format::Org => format!("[[{}][{}]]", url, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Event, Parser, Tag};

    #[test]
    fn test_markdown_link() {
        assert_eq!(render_link(Format::Markdown, "foo", "http://x"), "[foo](http://x)");
    }

    #[test]
    fn test_org_link() {
        assert_eq!(render_link(Format::Org, "foo", "http://x"), "[[http://x][foo]]");
    }

    #[test]
    fn test_markdown_link_is_commonmark_link() {
        let md = render_link(Format::Markdown, "alice/demo", "https://github.com/alice/demo");

        let dest = Parser::new(&md).find_map(|event| match event {
            Event::Start(Tag::Link(_, dest, _)) => Some(dest.to_string()),
            _ => None,
        });
        assert_eq!(dest.as_deref(), Some("https://github.com/alice/demo"));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("md".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("markdown".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("org".parse::<Format>().unwrap(), Format::Org);
        assert!("html".parse::<Format>().is_err());
    }

    #[test]
    fn test_format_serializes_as_flag_value() {
        assert_eq!(serde_json::to_value(Format::Org).unwrap(), "org");
        assert_eq!(serde_json::to_value(Format::Markdown).unwrap(), "md");
        assert_eq!(Format::Org.to_string(), "org");
    }
}
