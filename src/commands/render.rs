//! Terminal and JSON rendering of a [`FetchResult`].

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::{
    ranking::RankingPolicy,
    result::{FetchResult, FetchStatus},
    source::{RepositoryRecord, Username},
    theme::Theme,
};

/// Shown when a repository has no description.
const NO_DESCRIPTION: &str = "No description";

struct Palette {
    theme: Theme,
}

impl Palette {
    fn title(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Light => s.blue().bold(),
            Theme::Dark => s.bright_white().bold(),
        }
    }

    fn stars(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Light => s.yellow(),
            Theme::Dark => s.bright_yellow(),
        }
    }

    fn muted(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Light => s.dimmed(),
            Theme::Dark => s.white(),
        }
    }

    fn error(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Light => s.red(),
            Theme::Dark => s.bright_red(),
        }
    }
}

pub fn render_text(username: &Username, result: &FetchResult, theme: Theme) -> String {
    let palette = Palette { theme };

    match result.status() {
        FetchStatus::Loading => format!("Loading repositories for {}...", username),
        FetchStatus::Failed => format!(
            "{} {}",
            palette.error("Failed to load repositories:"),
            result.error_message().unwrap_or("unknown error")
        ),
        FetchStatus::Ready if result.items().is_empty() => {
            format!("No public repositories to show for {}.", username)
        }
        FetchStatus::Ready => result
            .items()
            .iter()
            .map(|repo| render_repo(repo, &palette))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn render_repo(repo: &RepositoryRecord, palette: &Palette) -> String {
    let mut header = format!(
        "{}  {}",
        palette.title(&repo.name),
        palette.stars(&format!("★ {}", repo.star_count))
    );
    if let Some(language) = &repo.language {
        header.push_str(&format!("  {}", palette.muted(language)));
    }

    let description = repo.description.as_deref().unwrap_or(NO_DESCRIPTION);
    let updated = repo.updated_at.format("%Y-%m-%d").to_string();

    format!(
        "{}\n  {}\n  {} {}",
        header,
        description,
        palette.muted(&repo.html_url),
        palette.muted(&format!("(updated {})", updated))
    )
}

#[derive(Serialize)]
struct JsonView<'a> {
    username: &'a str,
    policy: RankingPolicy,
    #[serde(flatten)]
    result: &'a FetchResult,
}

pub fn render_json(
    username: &Username,
    policy: RankingPolicy,
    result: &FetchResult,
) -> Result<String> {
    let view = JsonView {
        username: username.as_str(),
        policy,
        result,
    };
    serde_json::to_string_pretty(&view).context("Failed to serialize result")
}
