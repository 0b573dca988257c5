//! Helpers shared by the CLI commands.

use crate::error::CliError;
use clap::ValueEnum;
use segpath::{PathOps, PathStyle, SegmentedPath};
use serde::Serialize;
use std::io::Write;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Style used to parse every path argument.
    pub style: PathStyle,
}

impl GlobalOptions {
    /// Parse a path argument with the selected style.
    pub fn path(&self, raw: &str) -> SegmentedPath {
        SegmentedPath::new(raw, self.style)
    }

    /// Operations against the host filesystem.
    pub fn ops(&self) -> PathOps {
        PathOps::native()
    }
}

/// Output format for commands that print structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one item per line
    Text,
    /// JSON
    Json,
}

/// Write `value` to stdout as pretty JSON followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

/// Write each line to stdout.
pub fn print_lines<I>(lines: I) -> Result<(), CliError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for line in lines {
        writeln!(handle, "{}", line.as_ref())?;
    }
    Ok(())
}
