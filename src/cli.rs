// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: fetch a user's GitHub activity and render it
// into a README. Every flag has a sensible default except --name, and the
// ones that are secrets or deployment-specific can come from the environment.
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - Option<T>: Flags that may be absent (--template, --token)
// - PathBuf: An owned file system path
// =============================================================================

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::format::Format;
use crate::github::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "readme-activity",
    version,
    about = "Render your recent GitHub repositories and activity into a README",
    long_about = "readme-activity fetches a user's recent public repositories and events from GitHub \
                  and renders them through a Tera template into a Markdown or Org-mode README. \
                  Run it on a schedule to keep a profile README up to date."
)]
pub struct Cli {
    /// GitHub username to use in API requests
    #[arg(long, env = "GITHUB_USER")]
    pub name: String,

    /// Path to a Tera template file
    ///
    /// Without it, a built-in template for the chosen --format is used.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Path to the output file
    #[arg(long, default_value = "README")]
    pub output: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    pub format: Format,

    /// Page of results to retrieve
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Number of results to include per page
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: u32,

    /// GitHub token for a higher rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API (set this for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// More log output (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    // Default log filter when RUST_LOG isn't set
    //
    // Returns: "warn" with no -v, then info and debug for our own crate
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "readme_activity=info",
            _ => "readme_activity=debug",
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does env = "GITHUB_TOKEN" do?
//    - If --token isn't given, clap reads the GITHUB_TOKEN variable
//    - hide_env_values keeps the token out of --help output
//
// 2. What is ArgAction::Count?
//    - Counts how often a flag appears: -v = 1, -vv = 2
//
// 3. Why value_parser!(u32).range(1..)?
//    - GitHub pages start at 1, so --page 0 is rejected while parsing
//      instead of turning into a confusing API error later
//
// 4. Why try_parse_from in the tests?
//    - parse() exits the process on bad input
//    - try_parse_from returns a Result we can assert on
// -----------------------------------------------------------------------------
