//! Remote source abstraction for listing a user's repositories.
//!
//! The fetcher only ever talks to a [`RepoSource`]; the GitHub REST API is
//! the production implementation.

mod github;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::http::FetchError;

pub use github::{DEFAULT_API_URL, GitHubSource, PER_PAGE};

/// Longest login GitHub hands out.
pub const MAX_USERNAME_LEN: usize = 39;

/// Account name on the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            anyhow::bail!("Invalid username: must not be empty.")
        }
        if s.len() > MAX_USERNAME_LEN {
            anyhow::bail!(
                "Invalid username '{}': at most {} characters allowed.",
                s,
                MAX_USERNAME_LEN
            )
        }
        // The name becomes a path segment as-is, so only GitHub's own
        // alphabet is accepted.
        if s.starts_with('-') || !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            anyhow::bail!(
                "Invalid username '{}': only ASCII letters, digits and '-' allowed.",
                s
            )
        }
        Ok(Username(s.to_string()))
    }
}

/// Repository identifier as assigned by the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepoKey {
    Number(u64),
    Text(String),
}

impl fmt::Display for RepoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoKey::Number(n) => write!(f, "{}", n),
            RepoKey::Text(s) => f.write_str(s),
        }
    }
}

/// One repository as listed by the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: RepoKey,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub star_count: u64,
    pub updated_at: DateTime<Utc>,
    pub is_fork: bool,
    pub is_archived: bool,
    /// Primary language, when the source reports one.
    pub language: Option<String>,
}

impl RepositoryRecord {
    /// Forks and archived repositories never make it into a ranking.
    pub fn is_listable(&self) -> bool {
        !self.is_fork && !self.is_archived
    }
}

/// Trait for sources that can list a user's repositories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Get the API base URL.
    fn api_url(&self) -> &str;

    /// Fetch the first page of public repositories owned by `username`.
    async fn list_user_repos(&self, username: &Username)
    -> Result<Vec<RepositoryRecord>, FetchError>;
}
