use anyhow::Result;
use clap::Parser;
use toprepos::{RankingPolicy, Theme, commands::TopOptions};

/// toprepos - show a GitHub user's top repositories
///
/// Lists the user's public, non-fork, non-archived repositories ranked by
/// stars or by last update.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This is useful for avoiding rate limits.
///
/// Examples:
///   toprepos octocat                 # Six most-starred repositories
///   toprepos octocat --sort recent   # Most recently updated first
#[derive(Parser, Debug)]
#[command(author, version = env!("TOPREPOS_VERSION"), about)]
struct Cli {
    /// GitHub account name
    #[arg(value_name = "USERNAME")]
    username: String,

    /// Ranking policy: "stars" or "recent"
    #[arg(long, short = 's', value_name = "POLICY", default_value = "stars")]
    sort: RankingPolicy,

    /// Maximum number of repositories to show (default 6)
    #[arg(long, short = 'n', value_name = "N")]
    limit: Option<usize>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", env = "TOPREPOS_API_URL")]
    api_url: Option<String>,

    /// Output palette: "light" or "dark"
    #[arg(long, value_name = "THEME", default_value = "light")]
    theme: Theme,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl From<Cli> for TopOptions {
    fn from(cli: Cli) -> Self {
        TopOptions {
            username: cli.username,
            policy: cli.sort,
            limit: cli.limit,
            api_url: cli.api_url,
            theme: cli.theme,
            json: cli.json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = toprepos::runtime::RealRuntime;

    toprepos::commands::top(runtime, cli.into()).await
}
