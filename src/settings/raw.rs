use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::util::{default_title_for, sanitize_headers};
use crate::cli::CliArgs;

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    endpoint: EndpointSection,
    ui: UiSection,
}

/// Endpoint specific configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct EndpointSection {
    url: Option<String>,
    timeout_secs: Option<u64>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    input_title: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
    headers: Option<Vec<String>>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = cli.url.clone() {
            self.endpoint.url = Some(url);
        }
        if let Some(timeout) = cli.timeout {
            self.endpoint.timeout_secs = Some(timeout);
        }
        if let Some(title) = cli.title.clone() {
            self.ui.input_title = Some(title);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(headers) = &cli.headers {
            self.ui.headers = Some(headers.clone());
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            endpoint_url: detect_source(
                cli.url.is_some(),
                self.endpoint.url.is_some(),
                "APPLIST_URL",
                "URL",
                "endpoint.url",
            ),
            endpoint_timeout: detect_source(
                cli.timeout.is_some(),
                self.endpoint.timeout_secs.is_some(),
                "APPLIST__ENDPOINT__TIMEOUT_SECS",
                "--timeout",
                "endpoint.timeout_secs",
            ),
        };

        let endpoint_url = self.endpoint.url.unwrap_or_default();
        let timeout_secs = self.endpoint.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

        let input_title = Some(
            self.ui
                .input_title
                .unwrap_or_else(|| default_title_for(&endpoint_url)),
        );
        let initial_query = self.ui.initial_query.unwrap_or_default();
        let headers = self
            .ui
            .headers
            .map(sanitize_headers)
            .filter(|headers| !headers.is_empty());

        let config = ResolvedConfig {
            endpoint_url,
            timeout: Duration::from_secs(timeout_secs),
            input_title,
            initial_query,
            theme: self.ui.theme,
            headers,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> CliArgs {
        let mut full = vec!["applist"];
        full.extend_from_slice(args);
        CliArgs::try_parse_from(full).unwrap()
    }

    #[test]
    fn cli_values_override_file_values() {
        let mut raw = RawConfig::default();
        raw.endpoint.url = Some("http://files.example/apps".into());
        raw.ui.theme = Some("slate".into());

        let cli = cli(&["--theme", "light", "http://cli.example/apps"]);
        raw.apply_cli_overrides(&cli);

        assert_eq!(raw.endpoint.url.as_deref(), Some("http://cli.example/apps"));
        assert_eq!(raw.ui.theme.as_deref(), Some("light"));
    }

    #[test]
    fn resolve_fills_defaults() {
        let cli = cli(&["http://example.com/apps"]);
        let mut raw = RawConfig::default();
        raw.apply_cli_overrides(&cli);

        let resolved = raw.resolve(&cli).unwrap();

        assert_eq!(resolved.endpoint_url, "http://example.com/apps");
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(resolved.input_title.as_deref(), Some("example.com"));
        assert!(resolved.initial_query.is_empty());
    }

    #[test]
    fn resolve_rejects_a_missing_endpoint() {
        let cli = cli(&[]);
        let raw = RawConfig::default();

        let err = raw.resolve(&cli).unwrap_err().to_string();
        assert!(err.contains("endpoint.url"), "unexpected error: {err}");
    }

    #[test]
    fn resolve_rejects_a_zero_timeout() {
        let cli = cli(&["--timeout", "0", "http://example.com/apps"]);
        let mut raw = RawConfig::default();
        raw.apply_cli_overrides(&cli);

        let err = raw.resolve(&cli).unwrap_err().to_string();
        assert!(err.contains("--timeout"), "unexpected error: {err}");
    }
}
