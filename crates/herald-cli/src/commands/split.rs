//! Implementation of the `herald split` command.

use serde::Serialize;
use tracing::instrument;

use herald_core::domain::Message;

use crate::{
    cli::{OutputFormat, SplitArgs},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct SplitReport<'a> {
    payload: &'a str,
    display_text: &'a str,
}

#[instrument(skip_all)]
pub fn execute(args: SplitArgs, output: OutputManager) -> CliResult<()> {
    let raw = super::read_arg_or_stdin(args.message.as_deref())?;
    let message = Message::parse(&raw)?;

    match output.format() {
        OutputFormat::Json => output.json(&SplitReport {
            payload: message.payload(),
            display_text: message.display_text(),
        })?,
        OutputFormat::Human => {
            output.label("Payload")?;
            output.result(message.payload())?;
            output.print("")?;
            output.label("Display text")?;
            output.result(message.display_text())?;
        }
        // Plain: payload, then display text, one block each.
        _ => {
            output.result(message.payload())?;
            output.result(message.display_text())?;
        }
    }
    Ok(())
}
