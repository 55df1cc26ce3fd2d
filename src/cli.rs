use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{import, list, parse, types};

#[derive(Debug, Parser)]
#[command(name = "sfi")]
#[command(about = "Single-file artifact importer", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to $SFI_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List importable files in a directory
    List(list::Args),

    /// Parse application name and version from a filename
    Parse(parse::Args),

    /// Import a single file as a deployment package
    Import(import::Args),

    /// Show a type and its registered subtypes
    Types(types::Args),
}
