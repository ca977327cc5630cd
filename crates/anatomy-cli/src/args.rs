//! Command-line argument definitions for the anatomy CLI.
//!
//! [`Args`] is parsed with [`clap`]. Global options select the configuration
//! file and logging verbosity; each subcommand carries its own input and
//! output options.

use clap::{Parser, Subcommand};

/// Command-line arguments for the anatomy export tool
#[derive(Parser, Debug)]
#[command(name = "anatomy", author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export component metadata as YAML, JSON, TypeScript or JSDoc
    Export(ExportArgs),
    /// Print the anatomy tree of each component
    Tree(TreeArgs),
}

/// Arguments of `anatomy export`.
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Input JSON document, or `-` for stdin
    pub input: String,

    /// Output format (yaml, json, typescript, jsdoc); overrides the config file
    #[arg(short, long)]
    pub format: Option<String>,

    /// Anatomy view (yaml, tree); overrides the config file
    #[arg(short, long)]
    pub anatomy_view: Option<String>,

    /// Output file; stdout when omitted
    #[arg(short, long, conflicts_with = "out_dir")]
    pub output: Option<String>,

    /// Write one file per component into this directory
    #[arg(long)]
    pub out_dir: Option<String>,

    /// Name for a bare component record that has no `name` field
    #[arg(long, default_value = "Component")]
    pub name: String,
}

/// Arguments of `anatomy tree`.
#[derive(clap::Args, Debug)]
pub struct TreeArgs {
    /// Input JSON document, or `-` for stdin
    pub input: String,

    /// Only print this component
    #[arg(long)]
    pub component: Option<String>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Name for a bare component record that has no `name` field
    #[arg(long, default_value = "Component")]
    pub name: String,
}
