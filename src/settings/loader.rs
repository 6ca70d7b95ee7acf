use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve(cli)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn explicit_config_files_feed_the_resolved_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("browse.toml");
        fs::write(
            &path,
            r#"
[endpoint]
url = "http://files.example/apps"
timeout_secs = 9

[ui]
theme = "light"
"#,
        )
        .unwrap();

        let cli = CliArgs::try_parse_from([
            "applist",
            "--no-config",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();

        let resolved = load(&cli).unwrap();

        assert_eq!(resolved.endpoint_url, "http://files.example/apps");
        assert_eq!(resolved.timeout, Duration::from_secs(9));
        assert_eq!(resolved.theme.as_deref(), Some("light"));
        assert_eq!(resolved.input_title.as_deref(), Some("files.example"));
    }

    #[test]
    fn cli_arguments_win_over_config_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("browse.toml");
        fs::write(&path, "[endpoint]\nurl = \"http://files.example/apps\"\n").unwrap();

        let cli = CliArgs::try_parse_from([
            "applist",
            "--no-config",
            "--config",
            path.to_str().unwrap(),
            "http://cli.example/apps",
        ])
        .unwrap();

        let resolved = load(&cli).unwrap();

        assert_eq!(resolved.endpoint_url, "http://cli.example/apps");
    }
}
