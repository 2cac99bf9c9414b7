//! Trait abstraction for the country source to enable mocking in tests

use super::error::CountryError;
use async_trait::async_trait;

/// Anything that can produce the list of country display names
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetch country names in source order
    async fn fetch_country_names(&self) -> Result<Vec<String>, CountryError>;
}
