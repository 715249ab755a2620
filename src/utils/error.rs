use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. The message is fixed per operation; status code and
    /// body are not preserved.
    #[error("{0}")]
    RequestFailed(&'static str),

    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
