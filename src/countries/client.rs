//! HTTP client for the REST Countries API
//!
//! Fetches every country record and keeps only the common display name,
//! in the order the API returns them.

use super::error::CountryError;
use super::traits::CountrySource;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Default countries endpoint
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: CountryName,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

/// Client for the countries endpoint
pub struct RestCountriesClient {
    client: Client,
    url: String,
}

impl RestCountriesClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRIES_URL)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_country_names(&self) -> Result<Vec<String>, CountryError> {
        tracing::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CountryError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        extract_common_names(&body)
    }
}

/// Decode a JSON array of country records into their common names.
///
/// One name per record, in record order. A record without `name.common`
/// fails the whole decode.
pub fn extract_common_names(body: &[u8]) -> Result<Vec<String>, CountryError> {
    let records: Vec<CountryRecord> = serde_json::from_slice(body)?;
    Ok(records.into_iter().map(|r| r.name.common).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_preserves_order_and_length() {
        let body = br#"[
            {"name": {"common": "Peru", "official": "Republic of Peru"}, "cca2": "PE"},
            {"name": {"common": "Chad", "official": "Republic of Chad"}},
            {"name": {"common": "Canada"}},
            {"name": {"common": "Peru"}}
        ]"#;
        let names = extract_common_names(body).unwrap();
        assert_eq!(names, vec!["Peru", "Chad", "Canada", "Peru"]);
    }

    #[test]
    fn test_extract_empty_array() {
        assert!(extract_common_names(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_extract_keeps_unicode_names() {
        let body = r#"[{"name": {"common": "Côte d'Ivoire"}}, {"name": {"common": "Åland Islands"}}]"#;
        let names = extract_common_names(body.as_bytes()).unwrap();
        assert_eq!(names, vec!["Côte d'Ivoire", "Åland Islands"]);
    }

    #[test]
    fn test_extract_rejects_missing_common_name() {
        let body = br#"[{"name": {"common": "Peru"}}, {"name": {"official": "Nowhere"}}]"#;
        let err = extract_common_names(body).unwrap_err();
        assert!(matches!(err, CountryError::Decode(_)));
    }

    #[test]
    fn test_extract_rejects_non_array() {
        let body = br#"{"status": 400, "message": "Bad Request"}"#;
        assert!(matches!(
            extract_common_names(body),
            Err(CountryError::Decode(_))
        ));
    }

    #[test]
    fn test_extract_rejects_garbage() {
        assert!(extract_common_names(b"<html>").is_err());
    }

    #[test]
    fn test_default_url() {
        let client = RestCountriesClient::default();
        assert_eq!(client.url, DEFAULT_COUNTRIES_URL);
    }

    mod fetch {
        use super::*;
        use pretty_assertions::assert_eq;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        fn http_response(status: &str, body: &str) -> String {
            format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            )
        }

        /// Answer a single request with `response`, return the endpoint URL
        async fn serve_once(response: String) -> String {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            });
            format!("http://{addr}/v3.1/all")
        }

        #[tokio::test]
        async fn test_ok_returns_names_in_order() {
            let body = r#"[{"name":{"common":"Peru"}},{"name":{"common":"Chad"}}]"#;
            let url = serve_once(http_response("200 OK", body)).await;

            let names = RestCountriesClient::new(url)
                .fetch_country_names()
                .await
                .unwrap();
            assert_eq!(names, vec!["Peru", "Chad"]);
        }

        #[tokio::test]
        async fn test_server_error_is_status() {
            let url = serve_once(http_response("500 Internal Server Error", "oops")).await;

            let err = RestCountriesClient::new(url)
                .fetch_country_names()
                .await
                .unwrap_err();
            assert!(matches!(err, CountryError::Status(500)), "{err:?}");
        }

        #[tokio::test]
        async fn test_ok_with_bad_body_is_decode() {
            let url = serve_once(http_response("200 OK", r#"{"message":"nope"}"#)).await;

            let err = RestCountriesClient::new(url)
                .fetch_country_names()
                .await
                .unwrap_err();
            assert!(matches!(err, CountryError::Decode(_)), "{err:?}");
        }

        #[tokio::test]
        async fn test_refused_connection_is_request() {
            // Grab a free port, then close it so nothing is listening
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let err = RestCountriesClient::new(format!("http://{addr}/v3.1/all"))
                .fetch_country_names()
                .await
                .unwrap_err();
            assert!(matches!(err, CountryError::Request(_)), "{err:?}");
        }
    }

    #[test]
    fn test_status_error_message() {
        let err = CountryError::Status(503);
        assert_eq!(err.to_string(), "countries endpoint returned HTTP 503");
    }
}
