use anyhow::{Result, bail};
use log::debug;

use crate::{runtime::Runtime, source::DEFAULT_API_URL, theme::Theme};

/// Resolved settings for one run of the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub token: Option<String>,
    pub theme: Theme,
}

impl Config {
    /// Resolve configuration from CLI values and the environment.
    ///
    /// `GITHUB_TOKEN`, when set and non-empty, is sent as a bearer token.
    pub fn load<R: Runtime>(runtime: &R, api_url: Option<String>, theme: Theme) -> Result<Self> {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            bail!("Invalid API URL '{}': expected an http(s) URL.", api_url);
        }

        let token = runtime
            .env_var("GITHUB_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        if let Some(token) = &token {
            debug!("Using GITHUB_TOKEN for authentication: {}", mask_token(token));
        }

        Ok(Self {
            api_url,
            token,
            theme,
        })
    }
}

fn mask_token(token: &str) -> String {
    if token.len() <= 12 || !token.is_ascii() {
        return "*********".to_string();
    }
    format!("{}*********{}", &token[..8], &token[token.len() - 4..])
}
