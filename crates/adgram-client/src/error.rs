use thiserror::Error;

/// Errors raised while constructing a client, as opposed to the
/// [`adgram_proto::ApiError`] taxonomy used by live requests.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to build HTTP client: {0}")]
    Init(#[from] reqwest::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
