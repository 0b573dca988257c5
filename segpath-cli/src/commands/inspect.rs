//! Inspect command implementation.
//!
//! Shows the parsed structure of a path next to what the filesystem says
//! about it.

use crate::error::CliError;
use crate::utils::{print_json, print_lines, GlobalOptions, OutputFormat};
use clap::Args;
use segpath::{PathOps, PathStyle, SegmentedPath};
use serde::Serialize;

/// Show how a path parses and what it names on disk.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

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

#[derive(Debug, Serialize)]
struct Inspection {
    path: String,
    style: PathStyle,
    absolute: bool,
    root: Option<String>,
    segments: Vec<String>,
    length: usize,
    parent: String,
    filename: String,
    stem: String,
    extension: String,
    exists: bool,
    is_directory: bool,
    is_file: bool,
}

impl Inspection {
    fn gather(ops: &PathOps, path: &SegmentedPath) -> Self {
        Self {
            path: path.as_str().to_string(),
            style: path.style(),
            absolute: path.is_absolute(),
            root: path.root().map(str::to_string),
            segments: path.segments().to_vec(),
            length: path.len(),
            parent: path.parent_path(),
            filename: ops.filename_with_extension(path),
            stem: ops.filename_without_extension(path),
            extension: ops.extension(path),
            exists: ops.exists(path),
            is_directory: ops.is_directory(path),
            is_file: ops.is_file(path),
        }
    }

    fn text_lines(&self) -> Vec<String> {
        vec![
            format!("path: {}", self.path),
            format!("style: {}", self.style),
            format!("absolute: {}", self.absolute),
            format!("segments: {}", self.segments.join(" | ")),
            format!("length: {}", self.length),
            format!("parent: {}", self.parent),
            format!("filename: {}", self.filename),
            format!("stem: {}", self.stem),
            format!("extension: {}", self.extension),
            format!("exists: {}", self.exists),
            format!("directory: {}", self.is_directory),
            format!("file: {}", self.is_file),
        ]
    }
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.path(&self.path);
        let inspection = Inspection::gather(&global.ops(), &path);

        match self.format {
            OutputFormat::Text => print_lines(inspection.text_lines()),
            OutputFormat::Json => print_json(&inspection),
        }
    }
}
