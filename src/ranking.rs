//! Filtering and ordering of repository listings.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::source::RepositoryRecord;

/// Number of repositories kept when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: usize = 6;

/// Sort key used to order the filtered repository list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RankingPolicy {
    /// Most recently updated first.
    #[serde(rename = "recent")]
    ByRecency,
    /// Most-starred first.
    #[default]
    #[serde(rename = "stars")]
    ByStarCount,
}

impl fmt::Display for RankingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingPolicy::ByRecency => write!(f, "recent"),
            RankingPolicy::ByStarCount => write!(f, "stars"),
        }
    }
}

impl FromStr for RankingPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recent" | "recency" | "updated" => Ok(RankingPolicy::ByRecency),
            "stars" | "star" | "stargazers" => Ok(RankingPolicy::ByStarCount),
            _ => anyhow::bail!("Unknown ranking policy: {}. Expected stars or recent.", s),
        }
    }
}

/// Drops forks and archived repositories, orders the rest by `policy` and
/// keeps the first `limit`.
///
/// The sort is stable: records with equal keys stay in listing order.
pub fn rank(
    records: Vec<RepositoryRecord>,
    policy: RankingPolicy,
    limit: usize,
) -> Vec<RepositoryRecord> {
    let mut kept: Vec<RepositoryRecord> =
        records.into_iter().filter(|r| r.is_listable()).collect();

    match policy {
        RankingPolicy::ByRecency => kept.sort_by_key(|r| Reverse(r.updated_at)),
        RankingPolicy::ByStarCount => kept.sort_by_key(|r| Reverse(r.star_count)),
    }

    kept.truncate(limit);
    kept
}
