use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use super::{AppRow, CatalogPayload};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Errors that can occur while fetching the application catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("endpoint answered with status {0}")]
    Status(u16),
    #[error("failed to decode catalog payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce the full application catalog.
///
/// This is the seam between the UI runtime and the transport; tests substitute
/// in-memory sources for the HTTP client.
pub trait CatalogSource {
    fn fetch(&self) -> Result<Vec<AppRow>, FetchError>;
}

impl<T> CatalogSource for &T
where
    T: CatalogSource + ?Sized,
{
    fn fetch(&self) -> Result<Vec<AppRow>, FetchError> {
        <T as CatalogSource>::fetch(*self)
    }
}

impl CatalogSource for Box<dyn CatalogSource + Send> {
    fn fetch(&self) -> Result<Vec<AppRow>, FetchError> {
        (**self).fetch()
    }
}

/// Blocking HTTP transport for a JSON catalog endpoint.
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    /// Build a source with the default timeouts.
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(url, REQUEST_TIMEOUT)
    }

    /// Build a source with a custom overall request timeout.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Endpoint this source reads from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self) -> Result<Vec<AppRow>, FetchError> {
        let response = self.client.get(&self.url).send()?;
        let status = response.status().as_u16();
        if !status_accepted(status) {
            return Err(FetchError::Status(status));
        }
        let body = response.text()?;
        decode_catalog(&body)
    }
}

/// Statuses in [200, 400) are applied; everything else is a failed load.
pub(crate) fn status_accepted(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Decode one catalog response body.
pub(crate) fn decode_catalog(body: &str) -> Result<Vec<AppRow>, FetchError> {
    let payload: CatalogPayload = serde_json::from_str(body)?;
    Ok(payload.apps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceptance_window_is_left_closed_right_open() {
        assert!(!status_accepted(199));
        assert!(status_accepted(200));
        assert!(status_accepted(304));
        assert!(status_accepted(399));
        assert!(!status_accepted(400));
        assert!(!status_accepted(500));
    }

    #[test]
    fn decode_returns_records() {
        let apps = decode_catalog(r#"{"apps":[{"name":"alpha","url":"/a"}]}"#).unwrap();
        assert_eq!(apps, vec![AppRow::new("alpha", "/a")]);
    }

    #[test]
    fn decode_rejects_malformed_bodies() {
        assert!(matches!(
            decode_catalog("<html>not json</html>"),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_catalog(r#"{"apps":"nope"}"#),
            Err(FetchError::Decode(_))
        ));
    }
}
