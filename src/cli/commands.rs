//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::menu::{render_root, Callbacks, Selection};
use crate::application::ApplicationError;
use crate::application::services::{ExplanationDocument, NavigationOutcome};
use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::domain::{ColumnId, PartitionNode};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::read_stdin;
use crate::infrastructure::tree_view::{summarize, TreeConvert};
use crate::infrastructure::InfraError;
use crate::util::path::{expand_path, is_stdin};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.no_color {
        settings.output.color = false;
    }
    if !settings.output.color {
        colored::control::set_override(false);
    }
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Tree { input, payload }) => _tree(&container, input, *payload),
        Some(Commands::Leaves { input }) => _leaves(&container, input),
        Some(Commands::Select { input, format }) => _select(&container, input, *format),
        Some(Commands::Config { command }) => _config(&container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `expltree --help`".to_string(),
        )),
    }
}

fn load_document(container: &ServiceContainer, input: &InputArgs) -> CliResult<ExplanationDocument> {
    let service = container.explanation_service();
    if is_stdin(&input.file) {
        let content = read_stdin().map_err(|e| InfraError::io("read stdin", e))?;
        return Ok(service.parse(&content, "<stdin>")?);
    }
    Ok(service.load(&expand_path(&input.file))?)
}

/// The requested column, or every column when none is given.
fn selected_columns(
    document: &ExplanationDocument,
    column: Option<usize>,
) -> CliResult<Vec<(ColumnId, Option<&PartitionNode<Value>>)>> {
    match column {
        Some(index) => {
            let id = ColumnId(index);
            Ok(vec![(id, document.column(id)?)])
        }
        None => Ok(document.columns().collect()),
    }
}

#[instrument(skip(container))]
fn _tree(container: &ServiceContainer, input: &InputArgs, payload: bool) -> CliResult<()> {
    let document = load_document(container, input)?;
    let mut options = container.tree_view_options();
    options.payload |= payload;

    for (column, node) in selected_columns(&document, input.column)? {
        output::header(&format!("column {column}"));
        let level = render_root(node, column);
        print!("{}", level.to_tree(options));
    }
    Ok(())
}

#[instrument(skip(container))]
fn _leaves(container: &ServiceContainer, input: &InputArgs) -> CliResult<()> {
    let document = load_document(container, input)?;
    for (column, node) in selected_columns(&document, input.column)? {
        for entry in render_root(node, column).leaf_entries() {
            output::info(&format!(
                "{}\t{} -> {}",
                column,
                entry.path(),
                summarize(entry.payload())
            ));
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn _select(
    container: &ServiceContainer,
    input: &InputArgs,
    format: Option<OutputFormat>,
) -> CliResult<()> {
    let document = load_document(container, input)?;
    let column = ColumnId(input.column.unwrap_or(0));
    let node = document.column(column)?;
    let format = format.unwrap_or(container.settings.output.format);

    let mut chosen: Option<Selection<Value>> = None;
    let outcome = {
        let mut handler = Callbacks::new(
            |selection: Selection<Value>| chosen = Some(selection),
            || debug!("menu dismissed"),
        );
        container
            .navigator()
            .navigate(render_root(node, column), &mut handler)?
    };

    match (outcome, chosen) {
        (NavigationOutcome::Activated, Some(selection)) => {
            output::info(&format_selection(&selection, format)?);
        }
        _ => output::warning("nothing selected"),
    }
    Ok(())
}

/// Render a selection for stdout.
pub fn format_selection(selection: &Selection<Value>, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(selection).map_err(|e| {
            CliError::from(ApplicationError::OperationFailed {
                context: "serialize selection".to_string(),
                source: Box::new(e),
            })
        }),
        OutputFormat::Text => {
            let mut lines = vec![format!("column: {}", selection.column)];
            for (var, val) in selection
                .variable_names
                .iter()
                .zip(selection.domain_values.iter())
            {
                lines.push(format!("{var} = {val}"));
            }
            let payload = serde_json::to_string_pretty(&selection.leaf)
                .unwrap_or_else(|_| selection.leaf.to_string());
            lines.push(format!("payload: {payload}"));
            Ok(lines.join("\n"))
        }
    }
}

#[instrument(skip(container))]
fn _config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("cannot determine config directory".to_string())
            })?;
            if container.fs.exists(&path) && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            let fs = &container.fs;
            fs.ensure_parent(&path)
                .map_err(|e| InfraError::io(format!("create {}", path.display()), e))?;
            fs.write(&path, &Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("Created {}", path.display()));
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let state = if container.fs.exists(&path) {
                        "exists"
                    } else {
                        "not found"
                    };
                    output::detail(&format!("global: {} ({state})", path.display()));
                }
                None => output::detail("global: unavailable"),
            }
            Ok(())
        }
    }
}
