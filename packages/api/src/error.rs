use store::PartyId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or a non-2xx response.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The body was not the expected `{"data": ...}` JSON.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no event with id {0}")]
    UnknownEvent(PartyId),
    #[error("service unavailable")]
    Unavailable,
}
