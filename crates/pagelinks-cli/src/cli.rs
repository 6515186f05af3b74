//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use pagelinks_common_config::{ConfigLoader, Environment, PagelinksConfig};
use pagelinks_core::{PageLinkBuilder, PageLinkFactory, SubqueryCount};
use tracing::debug;

use crate::commands::{LinksCommand, PagesCommand};
use crate::error::CliError;

/// pagelinks - pagination links for paged API responses
///
/// Computes self/next/previous/first/last links and the page count for a
/// request URL and a record count.
#[derive(Debug, Parser)]
#[command(
    name = "pagelinks",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "PAGELINKS_CONFIG",
        value_hint = ValueHint::FilePath,
        help = "Path to configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the navigation links for a request
    Links(LinksCommand),

    /// Print the number of pages for a request
    Pages(PagesCommand),
}

/// Request and count arguments shared by every command
#[derive(Debug, Args)]
pub struct PagingArgs {
    /// Request URL, absolute or path-relative
    #[arg(value_hint = ValueHint::Url)]
    pub url: String,

    /// Number of all matching records
    #[arg(long)]
    pub count: u64,

    /// Narrower record count that takes precedence for paging
    #[arg(long)]
    pub subquery_count: Option<u64>,

    /// Page size when the URL carries no limit (overrides configuration)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub default_limit: Option<u64>,
}

impl PagingArgs {
    /// Totals described by the arguments.
    pub fn counts(&self) -> SubqueryCount {
        SubqueryCount {
            count: self.count,
            subquery_count: self.subquery_count,
        }
    }

    /// Builder for the requested URL.
    pub fn builder(
        &self,
        ctx: &CommandContext,
    ) -> Result<PageLinkBuilder<SubqueryCount>, CliError> {
        let factory = match self.default_limit {
            Some(limit) => PageLinkFactory::new(limit),
            None => ctx.factory,
        };
        Ok(factory.builder(&self.url, self.counts())?)
    }
}

impl Cli {
    /// Load configuration and run the selected command
    pub fn run(self) -> Result<(), CliError> {
        let config = self.load_config()?;
        self.execute(config)
    }

    /// Load configuration from file or default locations
    pub fn load_config(&self) -> Result<PagelinksConfig, CliError> {
        Environment::init()?;

        let mut config = match &self.config {
            Some(path) => ConfigLoader::default().load_file(path)?,
            None => ConfigLoader::default().load()?,
        };
        config.apply_env()?;

        debug!(
            default_page_limit = config.default_page_limit(),
            "Resolved configuration"
        );
        Ok(config)
    }

    /// Execute the selected command
    pub fn execute(self, config: PagelinksConfig) -> Result<(), CliError> {
        let ctx = CommandContext {
            factory: PageLinkFactory::from_config(&config),
            format: self.format,
        };

        match self.command {
            Command::Links(cmd) => cmd.execute(&ctx),
            Command::Pages(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub factory: PageLinkFactory,
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_links_command() {
        let cli = Cli::try_parse_from([
            "pagelinks",
            "--format",
            "json",
            "links",
            "/api/vms?offset=0&limit=2",
            "--count",
            "7",
            "--subquery-count",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Command::Links(cmd) => {
                assert_eq!(cmd.paging.url, "/api/vms?offset=0&limit=2");
                assert_eq!(cmd.paging.counts(), SubqueryCount::with_subquery(7, 5));
            }
            other => panic!("Expected links command, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_default_limit_is_rejected() {
        let result = Cli::try_parse_from([
            "pagelinks",
            "pages",
            "/api/vms",
            "--count",
            "7",
            "--default-limit",
            "0",
        ]);
        assert!(result.is_err());
    }
}
