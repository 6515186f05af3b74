//! Links command implementation.

use clap::Parser;

use crate::cli::{CommandContext, OutputFormat, PagingArgs};
use crate::error::CliError;
use crate::output;

/// Print the navigation links for a request
#[derive(Debug, Parser)]
pub struct LinksCommand {
    #[command(flatten)]
    pub paging: PagingArgs,
}

impl LinksCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let builder = self.paging.builder(ctx)?;

        match ctx.format {
            OutputFormat::Text => output::print_links(builder.links()),
            OutputFormat::Json => output::print_json(&builder.summary()),
        }
    }
}
