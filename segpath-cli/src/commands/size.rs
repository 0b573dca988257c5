//! Command to print the size of a file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print a file's size in bytes (0 for a directory).
#[derive(Args)]
pub struct SizeCommand {
    /// File to measure
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl SizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.path(&self.path);
        let size = global.ops().file_size(&path)?;
        println!("{size}");
        Ok(())
    }
}
