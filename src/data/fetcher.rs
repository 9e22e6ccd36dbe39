use serde_json::Value;
use tracing::{debug, warn};

use crate::FetchError;
use crate::models::QuestionRecord;

const DEFAULT_ENDPOINT: &str = "https://opentdb.com/api.php";
const QUESTION_AMOUNT: usize = 10;
const QUERY: [(&str, &str); 2] = [("amount", "10"), ("type", "boolean")];

const RESULTS_KEY: &str = "results";

/// Issues the trivia request and collects the returned records.
///
/// Holds no state between calls beyond its endpoint and HTTP client.
pub struct Fetcher {
    endpoint: String,
    http: reqwest::Client,
}

impl Fetcher {
    /// Create a fetcher for the public Open Trivia Database endpoint.
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_client(DEFAULT_ENDPOINT, http))
    }

    /// Create a fetcher against another base URL using a caller-built client.
    ///
    /// The query parameters stay fixed; only where they are sent changes.
    pub fn with_client(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Fetch one batch of questions.
    ///
    /// Fails on a connection error or any non-2xx status, on a body that is
    /// not JSON, and on a body without a `results` array. Records are only
    /// handed back once the whole call has succeeded.
    pub async fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, FetchError> {
        debug!("Fetching questions from {}", self.endpoint);

        let response = self.http.get(&self.endpoint).query(&QUERY).send().await?;

        debug!("Trivia API responded with {}", response.status());
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let records = collect_results(&body)?;
        if records.len() != QUESTION_AMOUNT {
            warn!(
                "Requested {} questions but received {}",
                QUESTION_AMOUNT,
                records.len()
            );
        }

        Ok(records)
    }
}

/// One fetch against the public trivia API.
pub async fn fetch_questions() -> Result<Vec<QuestionRecord>, FetchError> {
    Fetcher::new()?.fetch_questions().await
}

/// Decode a response body and copy each `results` element, in order.
pub fn collect_results(body: &str) -> Result<Vec<QuestionRecord>, FetchError> {
    let mut payload: Value = serde_json::from_str(body)?;

    let results = payload
        .get_mut(RESULTS_KEY)
        .map(Value::take)
        .ok_or(FetchError::MissingKey(RESULTS_KEY))?;

    let mut accumulator = Vec::new();
    for record in serde_json::from_value::<Vec<Value>>(results)? {
        accumulator.push(QuestionRecord::from(record));
    }

    Ok(accumulator)
}
