//! Implementation of the `herald render` command.

use serde::Serialize;
use tracing::{debug, instrument};

use herald_adapters::{FileValueSource, InMemoryValueSource};
use herald_core::{
    application::{MessageService, Rendered, ports::ValueSource},
    domain::{Template, Values},
};

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// JSON shape of a render result.
#[derive(Debug, Serialize)]
struct RenderReport<'a> {
    output: &'a str,
    unresolved: &'a [String],
    fell_back: bool,
}

#[instrument(skip_all, fields(strict = args.strict, interactive = args.interactive))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let template = super::read_template(&args.input)?;
    let service = build_service(&args, &config)?;
    let strict = args.strict || config.render.strict;
    debug!(sources = service.source_count(), strict, "rendering template");

    let rendered = if args.interactive {
        let mut values = service.values().with_cli_context(|| "loading values")?;
        prompt_missing(&template, &mut values)?;
        render_values(&template, &values, strict)?
    } else if strict {
        let text = service
            .interpolate_strict(&template)
            .with_cli_context(|| "rendering")?;
        Rendered {
            output: text,
            unresolved: Vec::new(),
            fell_back: false,
        }
    } else {
        service
            .interpolate(&template)
            .with_cli_context(|| "rendering")?
    };

    emit(&rendered, &output)
}

/// Value sources in precedence order: config files, `--values`, `--set`.
fn build_service(args: &RenderArgs, config: &AppConfig) -> CliResult<MessageService> {
    let mut sources: Vec<Box<dyn ValueSource>> = config
        .render
        .value_files
        .iter()
        .chain(&args.values)
        .map(|path| Box::new(FileValueSource::new(path)) as Box<dyn ValueSource>)
        .collect();

    if !args.set.is_empty() {
        let pairs = InMemoryValueSource::from_pairs(&args.set).with_cli_context(|| "--set")?;
        sources.push(Box::new(pairs));
    }

    Ok(MessageService::new(sources))
}

fn render_values(template: &str, values: &Values, strict: bool) -> CliResult<Rendered> {
    if strict {
        let output = Template::parse(template)?.render_strict(values)?;
        return Ok(Rendered {
            output,
            unresolved: Vec::new(),
            fell_back: false,
        });
    }
    Ok(MessageService::render_with(template, values))
}

fn emit(rendered: &Rendered, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&RenderReport {
            output: &rendered.output,
            unresolved: &rendered.unresolved,
            fell_back: rendered.fell_back,
        })?;
        return Ok(());
    }

    output.result(&rendered.output)?;
    if rendered.fell_back {
        output.warning("template has an unterminated '${' and was printed unchanged")?;
    } else if !rendered.unresolved.is_empty() {
        output.warning(&format!(
            "no value for: {}",
            rendered.unresolved.join(", ")
        ))?;
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn prompt_missing(template: &str, values: &mut Values) -> CliResult<()> {
    use crate::error::CliError;

    // Malformed templates are reported by the render step.
    let Ok(parsed) = Template::parse(template) else {
        return Ok(());
    };
    let missing: Vec<String> = parsed
        .unresolved(values)
        .into_iter()
        .map(str::to_owned)
        .collect();

    for name in missing {
        let value = dialoguer::Input::<String>::new()
            .with_prompt(format!("Value for ${{{name}}}"))
            .allow_empty(true)
            .interact_text()
            .map_err(|_| CliError::Cancelled)?;
        values.insert(name, value);
    }
    Ok(())
}

#[cfg(not(feature = "interactive"))]
fn prompt_missing(_template: &str, _values: &mut Values) -> CliResult<()> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
