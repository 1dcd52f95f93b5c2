//! The value handed to consumers of a fetch.

use serde::Serialize;
use std::fmt;

use crate::http::FetchError;
use crate::source::RepositoryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl FetchStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, FetchStatus::Loading)
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Loading => write!(f, "loading"),
            FetchStatus::Ready => write!(f, "ready"),
            FetchStatus::Failed => write!(f, "failed"),
        }
    }
}

/// State of one invocation: `Loading`, then exactly one of `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct FetchResult {
    items: Vec<RepositoryRecord>,
    status: FetchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl FetchResult {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn ready(items: Vec<RepositoryRecord>) -> Self {
        let mut result = Self::loading();
        result.complete(Ok(items));
        result
    }

    pub fn failed(error: &FetchError) -> Self {
        let mut result = Self::loading();
        result.complete(Err(error.clone()));
        result
    }

    /// Moves a `Loading` result to its terminal state.
    ///
    /// Returns `false` and leaves the result untouched if it already
    /// completed.
    pub fn complete(&mut self, outcome: Result<Vec<RepositoryRecord>, FetchError>) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match outcome {
            Ok(items) => {
                self.items = items;
                self.status = FetchStatus::Ready;
            }
            Err(e) => {
                self.items.clear();
                self.status = FetchStatus::Failed;
                self.error_message = Some(e.message());
            }
        }
        true
    }

    pub fn items(&self) -> &[RepositoryRecord] {
        &self.items
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}
