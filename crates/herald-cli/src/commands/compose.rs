//! Implementation of the `herald compose` command.

use serde::Serialize;
use tracing::{debug, instrument};

use herald_core::domain::{DELIMITER, compose};

use crate::{
    cli::ComposeArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ComposeReport<'a> {
    payload: &'a str,
    display_text: &'a str,
    message: &'a str,
}

#[instrument(skip_all)]
pub fn execute(args: ComposeArgs, output: OutputManager) -> CliResult<()> {
    let payload = read_payload(&args)?;
    debug!(
        payload_len = payload.len(),
        display_len = args.display.len(),
        "composing message"
    );

    let message = compose(&args.display, &payload);

    if output.is_json() {
        output.json(&ComposeReport {
            payload: &payload,
            display_text: &args.display,
            message: &message,
        })?;
    } else {
        output.result(&message)?;
    }

    if payload.contains(DELIMITER) {
        // The message is still written; only a later split becomes ambiguous.
        output.warning("payload contains the message delimiter; splitting will not round-trip")?;
    }
    Ok(())
}

fn read_payload(args: &ComposeArgs) -> CliResult<String> {
    match (&args.payload, &args.payload_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => super::read_file(path),
        (None, None) => Err(CliError::InvalidInput {
            message: "a payload is required (--payload or --payload-file)".into(),
            source: None,
        }),
    }
}
