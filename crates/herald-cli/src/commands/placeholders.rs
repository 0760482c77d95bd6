//! Implementation of the `herald placeholders` command.

use tracing::{debug, instrument};

use herald_core::domain::Template;

use crate::{
    cli::{OutputFormat, PlaceholdersArgs},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: PlaceholdersArgs, output: OutputManager) -> CliResult<()> {
    let source = super::read_template(&args.input)?;
    let template = Template::parse(source)?;
    let names = distinct_names(&template);
    debug!(count = names.len(), "placeholders found");

    match output.format() {
        OutputFormat::Json => output.json(&names)?,
        OutputFormat::Human => {
            if names.is_empty() {
                output.print("No placeholders.")?;
                return Ok(());
            }
            output.header("Placeholders:")?;
            for name in names {
                output.result(name)?;
            }
        }
        // Plain: names only, so the output can be piped.
        _ => {
            for name in names {
                output.result(name)?;
            }
        }
    }
    Ok(())
}

/// Names in first-seen order, each once.
fn distinct_names(template: &Template) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for name in template.placeholders() {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_are_listed_once_in_order() {
        let template = Template::parse("${b} ${a} ${b} ${c}").unwrap();
        assert_eq!(distinct_names(&template), vec!["b", "a", "c"]);
    }

    #[test]
    fn literal_text_has_no_names() {
        let template = Template::parse("{$age} and $name").unwrap();
        assert!(distinct_names(&template).is_empty());
    }
}
