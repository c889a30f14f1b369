use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    // Response errors
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Aggregator error: {0}")]
    Upstream(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HubResult<T> = Result<T, HubError>;
