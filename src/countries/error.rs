//! Errors raised while fetching the country list

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountryError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("countries endpoint returned HTTP {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
