// src/github/fetch.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Two listings are needed for a README:
// - The user's public activity events  (GET /users/{user}/events/public)
// - The user's recently created repos   (GET /users/{user}/repos)
//
// Both are plain GET requests returning JSON arrays. A token is optional;
// without one GitHub applies the low anonymous rate limit.
//
// The API base URL is configurable so GitHub Enterprise hosts work too
// (e.g. https://github.example.com/api/v3).
//
// Rust concepts:
// - async fn: Network requests run on the tokio runtime
// - Generics: get_json::<T>() decodes any JSON response type
// - try_join!: Runs two futures at once and stops at the first error
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::{Event, Repository};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("readme-activity/", env!("CARGO_PKG_VERSION"));

// Which page of results to request, and how big a page is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

// A thin GitHub REST client
//
// Holds one reqwest Client so both requests share a connection pool.
pub struct GithubClient {
    client: Client,
    api: Url,
    token: Option<String>,
}

impl GithubClient {
    // Creates a client for the given API base URL
    //
    // Parameters:
    //   api_url: e.g. "https://api.github.com"
    //   token: optional personal access token, sent as a Bearer token
    //
    // Returns: the client, or an error if the URL doesn't parse or can't
    //   have path segments appended
    pub fn new(api_url: &str, token: Option<String>) -> Result<Self> {
        let api = Url::parse(api_url)
            .map_err(|e| anyhow!("Invalid API URL '{}': {}", api_url, e))?;

        if api.cannot_be_a_base() {
            return Err(anyhow!("Invalid API URL '{}': not a base URL", api_url));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, api, token })
    }

    /// Lists the public events performed by `user`, most recent first.
    pub async fn list_public_events(&self, user: &str, page: PageRequest) -> Result<Vec<Event>> {
        let url = endpoint(&self.api, &["users", user, "events", "public"], &page_query(page))?;
        self.get_json(url).await
    }

    /// Lists the public repositories owned by `user`, newest first.
    pub async fn list_recent_repositories(
        &self,
        user: &str,
        page: PageRequest,
    ) -> Result<Vec<Repository>> {
        let mut query = vec![
            ("type", "owner".to_string()),
            ("sort", "created".to_string()),
            ("direction", "desc".to_string()),
        ];
        query.extend(page_query(page));

        let url = endpoint(&self.api, &["users", user, "repos"], &query)?;
        let repos: Vec<Repository> = self.get_json(url).await?;

        // An authenticated request for your own login can include private repos
        Ok(repos.into_iter().filter(|r| !r.private).collect())
    }

    // Fetches events and repositories concurrently
    //
    // Parameters:
    //   user: GitHub login
    //   page: which page to request, and its size (same for both listings)
    //
    // Returns: (events, repositories), each in the order GitHub sent them
    pub async fn fetch_activity(
        &self,
        user: &str,
        page: PageRequest,
    ) -> Result<(Vec<Event>, Vec<Repository>)> {
        futures::try_join!(
            self.list_public_events(user, page),
            self.list_recent_repositories(user, page),
        )
    }

    // Sends a GET request and decodes the JSON body
    //
    // Returns: the decoded body, or an error naming the URL if the request
    //   fails, the status isn't 2xx, or the body doesn't match T
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "requesting");

        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to fetch {}: HTTP {}",
                url,
                response.status()
            ));
        }

        response
            .json()
            .await
            .with_context(|| format!("Unexpected response body from {}", url))
    }
}

fn page_query(page: PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("page", page.page.to_string()),
        ("per_page", page.per_page.to_string()),
    ]
}

// Builds an API URL from path segments and query pairs
//
// Segments are percent-encoded, so a user name can't escape its path slot.
//
// Example:
//   endpoint("https://api.github.com", ["users", "alice", "repos"], [("page", "1")])
//     -> https://api.github.com/users/alice/repos?page=1
fn endpoint(api: &Url, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
    let mut url = api.clone();

    url.path_segments_mut()
        .map_err(|_| anyhow!("API URL cannot be a base: {}", api))?
        .pop_if_empty()
        .extend(segments);

    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }

    Ok(url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why one GithubClient instead of a fresh Client per request?
//    - reqwest::Client keeps a connection pool
//    - Reusing it means the second request can reuse the first connection
//
// 2. What does futures::try_join! return?
//    - Ok((a, b)) when both futures succeed
//    - The first Err as soon as either fails
//
// 3. Why async fn get_json<T: DeserializeOwned>?
//    - The same request code works for Vec<Event> and Vec<Repository>
//    - The caller picks T through the return type
//
// 4. What is with_context?
//    - An anyhow helper that wraps an error with a message
//    - The closure only runs (and allocates) when there is an error
// -----------------------------------------------------------------------------
