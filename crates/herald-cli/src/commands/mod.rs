//! Command handlers, one module per subcommand.

pub mod completions;
pub mod compose;
pub mod config;
pub mod placeholders;
pub mod render;
pub mod split;

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::{
    cli::TemplateInput,
    error::{CliError, CliResult, IntoCli},
};

/// Resolve a [`TemplateInput`] to its text: `--file`, the positional
/// argument, or stdin (when the argument is absent or `-`).
pub(crate) fn read_template(input: &TemplateInput) -> CliResult<String> {
    if let Some(path) = &input.file {
        return read_file(path);
    }
    read_arg_or_stdin(input.template.as_deref())
}

/// The argument itself, or stdin when it is `None` or `-`.
pub(crate) fn read_arg_or_stdin(arg: Option<&str>) -> CliResult<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_owned()),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .with_cli_context(|| "reading stdin")?;
            Ok(trim_line_ending(buf))
        }
    }
}

/// Read a whole file, dropping one trailing line ending.
pub(crate) fn read_file(path: &Path) -> CliResult<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(trim_line_ending(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CliError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e).with_cli_context(|| format!("reading {}", path.display())),
    }
}

// Editors and `echo` add a final newline the template author did not mean.
fn trim_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
