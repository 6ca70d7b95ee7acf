//! Application catalog types and the transport that fetches them.

mod client;
pub(crate) mod worker;

use serde::{Deserialize, Serialize};

pub use client::{CatalogSource, FetchError, HttpCatalogSource};

/// One application entry served by the catalog endpoint.
///
/// The `url` field rides along for consumers of the accepted selection; the
/// results table itself only renders `name`. Neither field is validated and
/// duplicate names are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl AppRow {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Return the text the matcher runs against.
    pub(crate) fn search_key(&self) -> &str {
        &self.name
    }
}

/// Full payload of one catalog fetch.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogPayload {
    pub(crate) apps: Vec<AppRow>,
}
