use thiserror::Error;

/// Anything that stops us getting the day's games from the provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] ureq::Error),

    #[error("Failed to read response body: {0}")]
    Body(ureq::Error),

    #[error("Failed to decode games: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Fetch task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to publish to SNS: {0}")]
    Sns(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),
}
