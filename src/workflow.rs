use anyhow::Result;
use applist::{BrowseOutcome, BrowserUi};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive browser.
pub(crate) struct BrowseWorkflow {
    browser: BrowserUi,
}

impl BrowseWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig {
            endpoint_url,
            timeout,
            input_title,
            initial_query,
            theme,
            headers,
        } = config;

        let mut browser = BrowserUi::endpoint_with_timeout(endpoint_url, timeout)?
            .with_initial_query(initial_query);
        if let Some(title) = input_title {
            browser = browser.with_input_title(title);
        }
        if let Some(theme) = theme {
            browser = browser.with_theme_name(&theme);
        }
        if let Some(headers) = headers {
            browser = browser.with_headers(headers);
        }

        Ok(Self { browser })
    }

    pub(crate) fn run(self) -> Result<BrowseOutcome> {
        self.browser.run()
    }
}
