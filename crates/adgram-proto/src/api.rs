//! The API seam between the sync engine and the remote deal store.

use crate::deal::Deal;
use async_trait::async_trait;
use thiserror::Error;

/// Errors crossing the deal-store boundary.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Network failure or a non-success HTTP status with no parseable
    /// rejection body. Never fatal; the next poll or manual refresh is the
    /// recovery path.
    #[error("transport error: {0}")]
    Transport(String),

    /// The collaborator explicitly reported `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Result of a guarded transition request.
///
/// Logical rejections are values, not errors: the server answered, it just
/// said no (e.g. another actor already moved the deal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Transition applied; `description` is the server-reported summary
    /// (`"pending → accepted"`).
    Applied { description: Option<String> },
    /// Transition refused with the server-supplied message.
    Rejected { message: String },
}

/// Remote deal store operations the sync engine depends on.
///
/// The production implementation speaks HTTP (`adgram-client`); tests swap in
/// scripted fakes.
#[async_trait]
pub trait DealApi: Send + Sync {
    /// Fetch the full authoritative deal collection, order preserved.
    async fn fetch_deals(&self) -> ApiResult<Vec<Deal>>;

    /// Request a state transition for one deal on behalf of the configured
    /// caller identity.
    async fn request_transition(
        &self,
        deal_id: i64,
        target_state: &str,
    ) -> ApiResult<TransitionOutcome>;
}
