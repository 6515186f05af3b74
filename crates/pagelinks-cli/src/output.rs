//! Output helpers for text and JSON modes.

use std::io::{self, Write};

use pagelinks_core::LinkSet;
use serde::Serialize;

use crate::error::CliError;

/// Print one `role<TAB>url` line per present link.
pub fn print_links(links: &LinkSet) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    for (role, href) in links.iter() {
        writeln!(out, "{role}\t{href}")?;
    }
    Ok(())
}

/// Print a single line.
pub fn print_line(line: &str) -> Result<(), CliError> {
    writeln!(io::stdout().lock(), "{line}")?;
    Ok(())
}

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    print_line(&json)
}
