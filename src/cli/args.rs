//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use clap::Parser;

use crate::config::Config;
use crate::consts::DEFAULT_MARKER;

use super::commands::{Commands, SourceArgs};

#[derive(Debug, Parser)]
#[command(name = "lastmod")]
#[command(about = "Render \"page last modified\" footers", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Enable debug output (why a footer was suppressed, files touched)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Timezone for the displayed date (e.g., "Europe/Berlin", "UTC"; default: local)
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Marker from the config file, used when `stamp --marker` is absent
    #[arg(skip)]
    pub(crate) config_marker: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self.config_marker = config.marker.clone();
        self
    }

    /// Subcommand to run; plain `lastmod` renders from `$LAST_MODIFIED`
    pub(crate) fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Render(SourceArgs::default()))
    }

    pub(crate) fn marker<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .or(self.config_marker.as_deref())
            .unwrap_or(DEFAULT_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn default_command_is_render_from_environment() {
        let cli = parse(&["lastmod"]);
        match cli.command() {
            Commands::Render(args) => {
                assert!(args.timestamp.is_none());
                assert!(args.file.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["lastmod", "date", "-t", "@1", "--json", "--timezone", "UTC"]);
        assert!(cli.json);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert!(matches!(cli.command(), Commands::Date(_)));
    }

    #[test]
    fn timestamp_conflicts_with_file() {
        let result = Cli::try_parse_from(["lastmod", "render", "-t", "@1", "-f", "a.html"]);
        assert!(result.is_err());
    }

    #[test]
    fn stamp_requires_patterns() {
        assert!(Cli::try_parse_from(["lastmod", "stamp"]).is_err());
        let cli = parse(&["lastmod", "stamp", "a.html", "docs/*.html", "-n"]);
        match cli.command() {
            Commands::Stamp(args) => {
                assert_eq!(args.patterns, vec!["a.html", "docs/*.html"]);
                assert!(args.dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn config_fills_unset_options_only() {
        let config = Config {
            debug: true,
            timezone: Some("Asia/Tokyo".to_string()),
            marker: Some("<!--m-->".to_string()),
        };

        let cli = parse(&["lastmod"]).with_config(&config);
        assert!(cli.debug);
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Tokyo"));

        let cli = parse(&["lastmod", "--timezone", "UTC"]).with_config(&config);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn marker_precedence() {
        let cli = parse(&["lastmod"]);
        assert_eq!(cli.marker(None), DEFAULT_MARKER);

        let config = Config {
            marker: Some("<!--m-->".to_string()),
            ..Config::default()
        };
        let cli = cli.with_config(&config);
        assert_eq!(cli.marker(None), "<!--m-->");
        assert_eq!(cli.marker(Some("@@footer@@")), "@@footer@@");
    }
}
