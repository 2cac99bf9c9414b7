//! Remote country list: HTTP source and cancellable loader

mod client;
mod error;
mod loader;
mod traits;

pub use client::{RestCountriesClient, DEFAULT_COUNTRIES_URL};
pub use loader::{CountryLoadEvent, CountryLoader};
pub use traits::CountrySource;

#[cfg(test)]
pub use error::CountryError;
#[cfg(test)]
pub use traits::MockCountrySource;
