//! GitHub source implementation.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::http::{FetchError, HttpClient};

use super::{RepoKey, RepoSource, RepositoryRecord, Username};

/// Largest page size the GitHub list endpoints accept.
///
/// Only this one page is requested; accounts with more repositories are
/// ranked on their first hundred.
pub const PER_PAGE: &str = "100";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub API response types (internal).
mod api {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    use super::RepoKey;

    #[derive(Deserialize, Debug)]
    pub struct Repo {
        pub id: RepoKey,
        pub name: String,
        pub description: Option<String>,
        pub html_url: String,
        pub stargazers_count: Option<u64>,
        pub updated_at: DateTime<Utc>,
        #[serde(default)]
        pub fork: bool,
        #[serde(default)]
        pub archived: bool,
        pub language: Option<String>,
    }
}

/// GitHub source implementation.
pub struct GitHubSource {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubSource {
    /// Create a new GitHub source with default API URL.
    pub fn new(client: Client) -> Self {
        Self::with_api_url(client, DEFAULT_API_URL)
    }

    /// Create a new GitHub source with custom API URL.
    pub fn with_api_url(client: Client, api_url: &str) -> Self {
        Self::from_http_client(HttpClient::new(client), api_url)
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RepoSource for GitHubSource {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    #[tracing::instrument(skip(self))]
    async fn list_user_repos(
        &self,
        username: &Username,
    ) -> Result<Vec<RepositoryRecord>, FetchError> {
        let url = format!("{}/users/{}/repos", self.api_url, username);
        debug!("Fetching repositories from {}...", url);

        let repos: Vec<api::Repo> = self
            .http_client
            .get_json_with_query(&url, &[("per_page", PER_PAGE)])
            .await?;

        debug!("Received {} repositories for {}", repos.len(), username);
        Ok(repos.into_iter().map(|r| r.into()).collect())
    }
}

impl From<api::Repo> for RepositoryRecord {
    fn from(r: api::Repo) -> Self {
        RepositoryRecord {
            id: r.id,
            name: r.name,
            description: r.description.filter(|d| !d.trim().is_empty()),
            html_url: r.html_url,
            star_count: r.stargazers_count.unwrap_or(0),
            updated_at: r.updated_at,
            is_fork: r.fork,
            is_archived: r.archived,
            language: r.language,
        }
    }
}
