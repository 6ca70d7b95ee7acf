use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `applist` binary.
#[derive(Parser, Debug)]
#[command(
    name = "applist",
    version,
    long_version = long_version(),
    about = "Interactive fuzzy finder for applications served by a dashboard endpoint",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "URL",
        env = "APPLIST_URL",
        help = "Catalog endpoint to fetch (default: endpoint.url from configuration)"
    )]
    pub(crate) url: Option<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "APPLIST_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title (default: derived from the endpoint host)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "headers",
        value_delimiter = ',',
        value_name = "HEADER",
        help = "Comma-separated results table headers (default: App,Score)"
    )]
    pub(crate) headers: Option<Vec<String>>,
    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        help = "Overall request timeout for the catalog fetch (default: 5)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
