use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub endpoint_url: String,
    pub timeout: Duration,
    pub input_title: Option<String>,
    pub initial_query: String,
    pub theme: Option<String>,
    pub headers: Option<Vec<String>>,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        if self.endpoint_url.is_empty() {
            return Err(ConfigError::invalid(
                "endpoint.url",
                self.endpoint_url.clone(),
                sources.source_for_url(),
                "a catalog endpoint is required",
            ));
        }

        let parsed = reqwest::Url::parse(&self.endpoint_url);
        let scheme_ok = parsed
            .as_ref()
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !scheme_ok {
            return Err(ConfigError::invalid(
                "endpoint.url",
                self.endpoint_url.clone(),
                sources.source_for_url(),
                "must be an http(s) URL",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::invalid(
                "endpoint.timeout_secs",
                self.timeout.as_secs().to_string(),
                sources.source_for_timeout(),
                "must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Endpoint: {}", self.endpoint_url);
        println!("  Timeout: {}s", self.timeout.as_secs());
        println!(
            "  UI theme: {}",
            self.theme.as_deref().unwrap_or("(use the default)")
        );
        if let Some(title) = &self.input_title {
            println!("  Prompt title: {title}");
        }
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
        if let Some(headers) = &self.headers {
            println!("  Table headers: {}", headers.join(", "));
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) endpoint_url: Option<SettingSource>,
    pub(crate) endpoint_timeout: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_url(&self) -> SettingSource {
        self.endpoint_url
            .clone()
            .unwrap_or(SettingSource::ConfigKey("endpoint.url"))
    }

    pub(crate) fn source_for_timeout(&self) -> SettingSource {
        self.endpoint_timeout
            .clone()
            .unwrap_or(SettingSource::ConfigKey("endpoint.timeout_secs"))
    }
}

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: String,
}

impl ConfigError {
    pub(crate) fn invalid<K, V, R>(key: K, value: V, origin: SettingSource, reason: R) -> Self
    where
        K: Into<&'static str>,
        V: Into<String>,
        R: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
            origin,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(url: &str, timeout: Duration) -> ResolvedConfig {
        ResolvedConfig {
            endpoint_url: url.to_string(),
            timeout,
            input_title: None,
            initial_query: String::new(),
            theme: None,
            headers: None,
        }
    }

    #[test]
    fn validation_accepts_http_and_https() {
        let sources = ConfigSources::default();
        assert!(
            sample("http://example.com/apps", Duration::from_secs(5))
                .validate(&sources)
                .is_ok()
        );
        assert!(
            sample("https://example.com/apps", Duration::from_secs(5))
                .validate(&sources)
                .is_ok()
        );
    }

    #[test]
    fn validation_rejects_other_schemes() {
        let sources = ConfigSources {
            endpoint_url: Some(SettingSource::CliFlag("URL")),
            ..ConfigSources::default()
        };

        let err = sample("ftp://example.com/apps", Duration::from_secs(5))
            .validate(&sources)
            .unwrap_err();
        assert!(matches!(err.key, "endpoint.url"));
        let message = err.to_string();
        assert!(message.contains("http(s)"));
        assert!(message.contains("CLI flag"));
    }

    #[test]
    fn validation_rejects_zero_timeout() {
        let sources = ConfigSources {
            endpoint_timeout: Some(SettingSource::Environment(
                "APPLIST__ENDPOINT__TIMEOUT_SECS",
            )),
            ..ConfigSources::default()
        };

        let err = sample("http://example.com/apps", Duration::ZERO)
            .validate(&sources)
            .unwrap_err();
        assert!(matches!(err.key, "endpoint.timeout_secs"));
        let message = err.to_string();
        assert!(message.contains("value: 0"));
        assert!(message.contains("environment variable"));
    }
}
