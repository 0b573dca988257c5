//! Command to print a file path with part of its name replaced.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{ArgGroup, Args};

/// Print a file path with its extension, name or name prefix replaced.
///
/// The path must name an existing file. Nothing is renamed on disk.
#[derive(Args)]
#[command(group(
    ArgGroup::new("replacement")
        .required(true)
        .args(["ext", "name", "prefix"]),
))]
pub struct ReplaceCommand {
    /// File path to rewrite
    #[arg(value_name = "PATH")]
    pub path: String,

    /// New extension (without the dot)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// New file name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// New file name before the final '.'
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,
}

impl ReplaceCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.path(&self.path);
        let ops = global.ops();

        let replaced = match (self.ext, self.name, self.prefix) {
            (Some(ext), _, _) => ops.with_extension_replaced(&path, &ext),
            (None, Some(name), _) => ops.with_file_name_replaced(&path, &name),
            (None, None, Some(prefix)) => ops.with_file_name_prefix_replaced(&path, &prefix),
            (None, None, None) => {
                return Err(CliError::InvalidArguments(
                    "one of --ext, --name or --prefix is required".to_string(),
                ))
            }
        };

        if replaced.is_empty() {
            return Err(CliError::SemanticFailure(format!("Not a file: {path}")));
        }
        println!("{replaced}");
        Ok(())
    }
}
