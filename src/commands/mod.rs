use anyhow::{Context, Result, bail};
use log::{debug, info};

use crate::{
    panel::RepoPanel,
    ranking::RankingPolicy,
    result::{FetchResult, FetchStatus},
    runtime::Runtime,
    source::Username,
    theme::Theme,
};

pub mod config;
mod render;
pub mod services;

pub use render::{render_json, render_text};

use config::Config;
use services::build_fetcher;

/// Options for the `top` command, as collected by the CLI.
#[derive(Debug, Clone)]
pub struct TopOptions {
    pub username: String,
    pub policy: RankingPolicy,
    pub limit: Option<usize>,
    pub api_url: Option<String>,
    pub theme: Theme,
    pub json: bool,
}

/// Fetch and print the top repositories for a user.
///
/// Fails (non-zero exit) when the fetch ends in `Failed`.
#[tracing::instrument(skip(runtime))]
pub async fn top<R: Runtime>(runtime: R, options: TopOptions) -> Result<()> {
    let username: Username = options.username.parse()?;
    let config = Config::load(&runtime, options.api_url.clone(), options.theme)?;
    debug!("Using API at {}", config.api_url);

    let result = load_once(&config, &username, options.policy, options.limit).await?;

    let output = if options.json {
        render_json(&username, options.policy, &result)?
    } else {
        render_text(&username, &result, config.theme)
    };
    println!("{}", output);

    if result.status() == FetchStatus::Failed {
        bail!(
            "Could not load repositories for {}: {}",
            username,
            result.error_message().unwrap_or("unknown error")
        );
    }
    Ok(())
}

/// Drive a single panel invocation and wait for its terminal result.
async fn load_once(
    config: &Config,
    username: &Username,
    policy: RankingPolicy,
    limit: Option<usize>,
) -> Result<FetchResult> {
    let mut panel = RepoPanel::new(build_fetcher(config)?, policy, limit);
    let mut updates = panel.subscribe();

    info!(
        "Loading top repositories for {} by {}",
        username,
        panel.policy()
    );
    let _task = panel.load(username.clone());

    let result = updates
        .wait_for(|r| r.status().is_terminal())
        .await
        .context("Repository panel closed before producing a result")?
        .clone();
    debug!("Load for {} finished: {}", username, result.status());
    Ok(result)
}
