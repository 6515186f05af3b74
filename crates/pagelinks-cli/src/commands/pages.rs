//! Pages command implementation.

use clap::Parser;
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat, PagingArgs};
use crate::error::CliError;
use crate::output;

/// Print the number of pages for a request
#[derive(Debug, Parser)]
pub struct PagesCommand {
    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Debug, Serialize)]
struct PagesOutput {
    pages: u64,
    limit: i64,
}

impl PagesCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let builder = self.paging.builder(ctx)?;
        let pages = builder.page_count();

        match ctx.format {
            OutputFormat::Text => output::print_line(&pages.to_string()),
            OutputFormat::Json => output::print_json(&PagesOutput {
                pages,
                limit: builder.cursor().limit,
            }),
        }
    }
}
