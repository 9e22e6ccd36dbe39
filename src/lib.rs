//! # trivia-fetch
//!
//! Fetches one batch of true/false questions from the Open Trivia Database
//! and collects them, in order, into memory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_fetch::{fetch_questions, FetchError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), FetchError> {
//!     // GET https://opentdb.com/api.php?amount=10&type=boolean
//!     let questions = fetch_questions().await?;
//!     assert!(!questions.is_empty());
//!
//!     Ok(())
//! }
//! ```

mod data;
mod models;

pub use data::{Fetcher, collect_results, fetch_questions};
pub use models::QuestionRecord;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection failure or non-2xx response.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Body is not JSON, or the results are not a list of records.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    /// Response JSON lacks an expected top-level key.
    #[error("response is missing key `{0}`")]
    MissingKey(&'static str),
}
