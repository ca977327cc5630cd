//! CLI logic for the anatomy export tool.
//!
//! `anatomy export` serializes a metadata document into one of the schema
//! formats; `anatomy tree` prints the box-drawing anatomy tree of each
//! component.

mod args;
mod config;
mod error;

pub use args::{Args, Command, ExportArgs, TreeArgs};
pub use config::{load_config, AppConfig};
pub use error::CliError;

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use log::{debug, info};

use anatomy_core::ComponentSet;
use anatomy_export::{ExportOptions, Exporter};
use anatomy_tree::render_anatomy;

/// Run the anatomy CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input documents
/// - Unknown format or anatomy view names
pub fn run(args: &Args) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    debug!(config:? = app_config; "Loaded configuration");

    match &args.command {
        Command::Export(export_args) => run_export(export_args, &app_config),
        Command::Tree(tree_args) => run_tree(tree_args),
    }
}

fn run_export(args: &ExportArgs, app_config: &AppConfig) -> Result<(), CliError> {
    let options = resolve_options(args, app_config)?;
    info!(
        input_path = args.input,
        format = options.format.name(),
        anatomy_view = options.anatomy_view.as_str();
        "Exporting components"
    );

    let components = read_components(&args.input, &args.name)?;
    let exporter = Exporter::new();

    if let Some(out_dir) = &args.out_dir {
        fs::create_dir_all(out_dir).map_err(|source| CliError::Write {
            path: out_dir.clone(),
            source,
        })?;
        for file in exporter.export_files(&components, &options)? {
            let path = Path::new(out_dir).join(&file.path);
            write_file(&path.display().to_string(), &file.content)?;
        }
        info!(out_dir = out_dir.as_str(), components = components.len(); "Component files exported");
        return Ok(());
    }

    let document = exporter.export(&components, &options)?;
    write_output(args.output.as_deref(), &document)
}

/// Config file defaults, overridden by command-line flags.
fn resolve_options(args: &ExportArgs, app_config: &AppConfig) -> Result<ExportOptions, CliError> {
    let mut options = app_config.export;
    if let Some(format) = &args.format {
        options.format = format.parse()?;
    }
    if let Some(view) = &args.anatomy_view {
        options.anatomy_view = view.parse()?;
    }
    Ok(options)
}

fn run_tree(args: &TreeArgs) -> Result<(), CliError> {
    let components = read_components(&args.input, &args.name)?;

    let selected: Vec<(&String, _)> = match &args.component {
        Some(name) => {
            let (key, metadata) = components
                .iter()
                .find(|(key, _)| *key == name)
                .ok_or_else(|| CliError::UnknownComponent(name.clone()))?;
            vec![(key, metadata)]
        }
        None => components.iter().collect(),
    };

    let mut blocks = Vec::new();
    for (name, metadata) in &selected {
        let tree = render_anatomy(&metadata.anatomy);
        info!(
            component = name.as_str(),
            lines = tree.lines().count();
            "Anatomy tree"
        );

        if selected.len() == 1 {
            blocks.push(tree);
        } else if tree.is_empty() {
            blocks.push(format!("# {name}"));
        } else {
            blocks.push(format!("# {name}\n\n{tree}"));
        }
    }

    let mut text = blocks.join("\n\n");
    text.push('\n');
    write_output(args.output.as_deref(), &text)
}

/// Read a metadata document from a file, or stdin for `-`.
fn read_components(input: &str, fallback_name: &str) -> Result<ComponentSet, CliError> {
    let read_error = |source| CliError::Read {
        path: input.to_string(),
        source,
    };

    let source = if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(read_error)?;
        buffer
    } else {
        fs::read_to_string(input).map_err(read_error)?
    };

    let components = ComponentSet::from_json_str(&source, fallback_name)?;
    debug!(components = components.len(); "Read metadata document");
    Ok(components)
}

fn write_output(output: Option<&str>, text: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            write_file(path, text)?;
            info!(output_file = path; "Output written");
            Ok(())
        }
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|source| CliError::Write {
                path: "<stdout>".to_string(),
                source,
            }),
    }
}

fn write_file(path: &str, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|source| CliError::Write {
        path: path.to_string(),
        source,
    })
}
