//! Terminal user interface for browsing the application catalog.
//!
//! [`BrowserUi`] is the embedder-facing builder; it wires a catalog source
//! into an [`App`], runs the event loop, and hands back a [`BrowseOutcome`]
//! describing what the user accepted.

mod actions;
mod catalog;
mod components;
pub mod input;
mod render;
mod runtime;
mod state;

use std::time::Duration;

pub use input::SearchInput;
pub use state::App;

use anyhow::Result;

use crate::catalog::{CatalogSource, FetchError, HttpCatalogSource};
use crate::theme::{self, Theme};

/// Record accepted by the user.
///
/// `name` doubles as the navigation target for the accepted record; `url`
/// rides along for consumers that want it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSelection {
    pub name: String,
    pub url: String,
}

/// Result of one interactive browse session.
#[derive(Debug, Clone)]
pub struct BrowseOutcome {
    pub accepted: bool,
    pub query: String,
    pub selection: Option<AppSelection>,
}

/// Builder for the interactive catalog browser.
pub struct BrowserUi {
    source: Box<dyn CatalogSource + Send>,
    input_title: Option<String>,
    initial_query: String,
    theme: Option<Theme>,
    headers: Option<Vec<String>>,
}

impl BrowserUi {
    /// Browse the catalog served at `url`.
    pub fn endpoint(url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self::from_source(HttpCatalogSource::new(url)?))
    }

    /// Browse the catalog served at `url` with a custom request timeout.
    pub fn endpoint_with_timeout(
        url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        Ok(Self::from_source(HttpCatalogSource::with_timeout(
            url, timeout,
        )?))
    }

    /// Browse records produced by an arbitrary source.
    pub fn from_source<S>(source: S) -> Self
    where
        S: CatalogSource + Send + 'static,
    {
        Self {
            source: Box::new(source),
            input_title: None,
            initial_query: String::new(),
            theme: None,
            headers: None,
        }
    }

    /// Set the prompt title rendered before the query editor.
    #[must_use]
    pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
        self.input_title = Some(title.into());
        self
    }

    /// Pre-fill the query editor.
    #[must_use]
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    /// Select a theme by name; unknown names keep the default.
    #[must_use]
    pub fn with_theme_name(mut self, name: &str) -> Self {
        self.theme = theme::by_name(name);
        self
    }

    /// Override the results table headers.
    #[must_use]
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Run the UI to completion.
    pub fn run(self) -> Result<BrowseOutcome> {
        let mut app = App::new(self.source);
        if let Some(title) = self.input_title {
            app.set_input_title(title);
        }
        if !self.initial_query.is_empty() {
            app.set_initial_query(self.initial_query);
        }
        if let Some(theme) = self.theme {
            app.set_theme(theme);
        }
        if let Some(headers) = self.headers {
            app.set_headers(headers);
        }
        app.run()
    }
}
