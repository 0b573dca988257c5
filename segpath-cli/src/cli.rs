//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, CwdCommand, ExistsCommand, InspectCommand, ListCommand, MkdirCommand,
    ReplaceCommand, SizeCommand,
};
use clap::{Parser, Subcommand};
use segpath::PathStyle;

/// Parse, inspect and create filesystem paths.
#[derive(Parser)]
#[command(name = "segpath")]
#[command(version, about = "Parse, inspect and create filesystem paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path style used to parse arguments (windows, unix, native, unknown)
    #[arg(
        long,
        value_name = "STYLE",
        global = true,
        env = "SEGPATH_STYLE",
        default_value = "native"
    )]
    pub style: PathStyle,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show how a path parses and what it names on disk
    Inspect(InspectCommand),

    /// Succeed if a path exists
    Exists(ExistsCommand),

    /// Print a file's size in bytes
    Size(SizeCommand),

    /// Print the absolute form of a path
    Absolute(AbsoluteCommand),

    /// Print the current working directory
    Cwd(CwdCommand),

    /// Create a directory and its missing ancestors
    Mkdir(MkdirCommand),

    /// List files under a directory
    List(ListCommand),

    /// Print a file path with its name or extension replaced
    Replace(ReplaceCommand),
}
