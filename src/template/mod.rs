// src/template/mod.rs
// =============================================================================
// This module renders the README from a Tera template.
//
// The template sees this context:
//   user           - the GitHub login the README is for
//   repos          - list of recent public repositories
//   contributions  - list of recent public events
//   format         - "md" or "org"
//
// And can call:
//   {{ humanize_event(event=e) }}              one-line description of an event
//   {{ e | humanize }}                         same thing, as a filter
//   {{ render_link(text="x", url="https://") }} a link in the output format
//
// Every helper takes an optional format="md"|"org" argument; without it the
// format of the current rendering pass is used.
//
// When no template file is given, a built-in one for the chosen format is
// used (see templates/ at the repository root).
//
// Rust concepts:
// - Closures: Template helpers capture the pass's default format with move
// - Lifetimes: ReadmeContext<'a> borrows the data instead of copying it
// - include_str!: Embeds the built-in templates in the binary
// =============================================================================

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::format::{humanize_event, render_link, Format};
use crate::github::{Event, Repository};

const TEMPLATE_NAME: &str = "readme";

const MARKDOWN_TEMPLATE: &str = include_str!("../../templates/README.md.tera");
const ORG_TEMPLATE: &str = include_str!("../../templates/README.org.tera");

// Everything a README template can refer to
#[derive(Debug, Serialize)]
pub struct ReadmeContext<'a> {
    pub user: &'a str,
    pub repos: &'a [Repository],
    pub contributions: &'a [Event],
    pub format: Format,
}

// A parsed README template with our helpers registered
pub struct ReadmeTemplate {
    tera: Tera,
}

impl ReadmeTemplate {
    // Parses a user-supplied template
    //
    // Parameters:
    //   source: the template text
    //   format: default format for the helpers when a call doesn't pass one
    //
    // Returns: the ready-to-render template, or a parse error
    pub fn from_source(source: &str, format: Format) -> Result<Self> {
        let mut tera = Tera::default();

        // Output is Markdown or Org, never HTML
        tera.autoescape_on(vec![]);

        register_helpers(&mut tera, format);

        tera.add_raw_template(TEMPLATE_NAME, source)
            .context("Failed to parse template")?;

        Ok(Self { tera })
    }

    /// The built-in template for `format`.
    pub fn embedded(format: Format) -> Result<Self> {
        let source = match format {
            Format::Markdown => MARKDOWN_TEMPLATE,
            Format::Org => ORG_TEMPLATE,
        };
        Self::from_source(source, format)
    }

    // Renders the README
    //
    // Returns: the rendered text, or an error if a helper got bad arguments
    //   or the template refers to something that isn't in the context
    pub fn render(&self, context: &ReadmeContext<'_>) -> Result<String> {
        let context = Context::from_serialize(context).context("Failed to build template context")?;

        self.tera
            .render(TEMPLATE_NAME, &context)
            .context("Failed to render template")
    }
}

fn register_helpers(tera: &mut Tera, default_format: Format) {
    tera.register_function("humanize_event", move |args: &HashMap<String, Value>| {
        let event = args
            .get("event")
            .ok_or_else(|| tera::Error::msg("humanize_event: missing `event` argument"))?;
        let event = event_arg(event)?;
        let format = format_arg(args, default_format)?;
        Ok(Value::String(humanize_event(&event, format)))
    });

    tera.register_filter("humanize", move |value: &Value, args: &HashMap<String, Value>| {
        let event = event_arg(value)?;
        let format = format_arg(args, default_format)?;
        Ok(Value::String(humanize_event(&event, format)))
    });

    tera.register_function("render_link", move |args: &HashMap<String, Value>| {
        let text = string_arg(args, "text")?;
        let url = string_arg(args, "url")?;
        let format = format_arg(args, default_format)?;
        Ok(Value::String(render_link(format, text, url)))
    });
}

fn event_arg(value: &Value) -> tera::Result<Event> {
    Event::deserialize(value).map_err(|e| tera::Error::msg(format!("Not a GitHub event: {}", e)))
}

fn format_arg(args: &HashMap<String, Value>, default: Format) -> tera::Result<Format> {
    match args.get("format") {
        None => Ok(default),
        Some(Value::String(s)) => s.parse::<Format>().map_err(|e: anyhow::Error| tera::Error::msg(e.to_string())),
        Some(other) => Err(tera::Error::msg(format!("`format` must be a string, got {}", other))),
    }
}

fn string_arg<'a>(args: &'a HashMap<String, Value>, name: &str) -> tera::Result<&'a str> {
    args.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg(format!("render_link: `{}` must be a string", name)))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why do the helpers take a serde_json::Value?
//    - Tera stores the whole context as JSON values
//    - event_arg turns the value back into our Event type
//
// 2. What does move do in move |args| { ... }?
//    - The closure takes its own copy of default_format
//    - Format is Copy, so each helper gets one cheaply
//
// 3. Why autoescape_on(vec![])?
//    - Tera escapes HTML for .html templates by default
//    - Markdown and Org output need "&" and "<" left alone
// -----------------------------------------------------------------------------
