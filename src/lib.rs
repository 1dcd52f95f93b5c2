//! Fetch a GitHub user's public repositories and reduce them to a ranked
//! top-N list, with a cancellable, observable load lifecycle.

pub mod commands;
pub mod fetcher;
pub mod http;
pub mod panel;
pub mod ranking;
pub mod result;
pub mod runtime;
pub mod source;
pub mod theme;

pub use fetcher::RepositoryFetcher;
pub use http::FetchError;
pub use panel::RepoPanel;
pub use ranking::{DEFAULT_LIMIT, RankingPolicy, rank};
pub use result::{FetchResult, FetchStatus};
pub use source::{GitHubSource, RepoSource, RepositoryRecord, Username};
pub use theme::Theme;
