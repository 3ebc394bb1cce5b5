// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, filtered by RUST_LOG or -v)
// 3. Load the README template (from --template, or the built-in one)
// 4. Fetch the user's events and repositories from GitHub
// 5. Render the template and write the output file
// 6. Exit with proper code (0 = success, 1 = error)
// =============================================================================

mod cli;      // src/cli.rs - command-line parsing
mod format;   // src/format/ - event descriptions and link markup
mod github;   // src/github/ - GitHub API types and fetching
mod template; // src/template/ - Tera rendering

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

use github::{GithubClient, PageRequest};
use template::{ReadmeContext, ReadmeTemplate};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// The main application logic
//
// Parameters:
//   cli: the parsed command-line arguments (owned, we're done parsing)
//
// Returns: Ok(()) once the README is written, or the first error hit
async fn run(cli: Cli) -> Result<()> {
    // Load the template first so a typo fails before any network traffic
    let readme = match &cli.template {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Error while loading template file {}", path.display()))?;
            ReadmeTemplate::from_source(&source, cli.format)?
        }
        None => ReadmeTemplate::embedded(cli.format)?,
    };

    println!("🔍 Fetching GitHub activity for {}", cli.name);

    let github = GithubClient::new(&cli.api_url, cli.token.clone())?;
    let page = PageRequest {
        page: cli.page,
        per_page: cli.per_page,
    };
    let (events, repos) = github.fetch_activity(&cli.name, page).await?;

    tracing::info!(events = events.len(), repos = repos.len(), "fetched activity");
    println!("📄 Found {} event(s) and {} repo(s)", events.len(), repos.len());

    let rendered = readme.render(&ReadmeContext {
        user: &cli.name,
        repos: &repos,
        contributions: &events,
        format: cli.format,
    })?;

    std::fs::write(&cli.output, rendered)
        .with_context(|| format!("Error while creating output file {}", cli.output.display()))?;

    println!("✅ Wrote {}", cli.output.display());
    Ok(())
}
