//! List command implementation.
//!
//! Walks a directory depth-first and prints the files it contains.

use crate::error::CliError;
use crate::utils::{print_json, print_lines, GlobalOptions, OutputFormat};
use clap::Args;
use segpath::ListOptions;

/// List files under a directory.
#[derive(Args)]
pub struct ListCommand {
    /// Directory to list
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Only list files with this extension (case-sensitive, without the dot)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Do not descend into subdirectories
    #[arg(long)]
    pub no_recurse: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "SEGPATH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ext = self.ext.unwrap_or_default();
        if ext.starts_with('.') {
            return Err(CliError::InvalidArguments(format!(
                "extension '{ext}' must not start with '.'"
            )));
        }

        let path = global.path(&self.dir);
        let options = ListOptions::new()
            .with_extension(ext)
            .recursive(!self.no_recurse);

        let mut files = Vec::new();
        if !global.ops().list_files(&path, &mut files, &options)? {
            return Err(CliError::SemanticFailure(format!(
                "Not a directory: {path}"
            )));
        }

        match self.format {
            OutputFormat::Text => print_lines(&files),
            OutputFormat::Json => print_json(&files),
        }
    }
}
