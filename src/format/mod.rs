// src/format/mod.rs
// =============================================================================
// This module turns GitHub data into README text.
//
// Submodules:
// - link: Output formats (Markdown, Org) and their link syntax
// - event: One-line descriptions of activity events
//
// Both are pure functions with no I/O, so templates can call them freely.
// =============================================================================

mod event;
mod link;

pub use event::humanize_event;
pub use link::{render_link, Format};
