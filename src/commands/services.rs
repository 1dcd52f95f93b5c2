//! Service factory for building the fetcher from configuration.

use std::sync::Arc;

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{fetcher::RepositoryFetcher, http::HttpClient, source::GitHubSource};

use super::config::Config;

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent("toprepos-cli")
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}

/// Build the GitHub source from configuration
pub fn build_source(config: &Config) -> Result<GitHubSource> {
    let http_client = build_http_client(config.token.as_deref())?;
    Ok(GitHubSource::from_http_client(http_client, &config.api_url))
}

/// Build a fetcher backed by the configured GitHub source
pub fn build_fetcher(config: &Config) -> Result<RepositoryFetcher> {
    Ok(RepositoryFetcher::new(Arc::new(build_source(config)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ranking::RankingPolicy, theme::Theme};
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_build_http_client_with_token() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .match_header(
                "Authorization",
                Matcher::Exact("Bearer test_token".to_string()),
            )
            .match_header("user-agent", "toprepos-cli")
            .create();

        let http_client = build_http_client(Some("test_token")).unwrap();
        let _ = http_client.inner().get(server.url()).send().await;

        mock.assert();
    }

    #[tokio::test]
    async fn test_build_http_client_without_token() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .match_header("Authorization", Matcher::Missing)
            .create();

        let http_client = build_http_client(None).unwrap();
        let _ = http_client.inner().get(server.url()).send().await;

        mock.assert();
    }

    #[tokio::test]
    async fn test_build_fetcher_uses_configured_api_url() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let config = Config {
            api_url: server.url(),
            token: None,
            theme: Theme::Light,
        };

        let fetcher = build_fetcher(&config).unwrap();
        let username = "octocat".parse().unwrap();
        let repos = fetcher
            .fetch_top_repositories(&username, RankingPolicy::ByStarCount, None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(repos.is_empty());
    }
}
