//! HTTP client module and error classification.

mod client;
mod error;

pub use client::{GITHUB_JSON, HttpClient};
pub use error::FetchError;
