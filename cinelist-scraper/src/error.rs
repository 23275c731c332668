/// Errors that can occur while fetching or decoding the catalog.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("request failed after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("failed to decode catalog response: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),
}
