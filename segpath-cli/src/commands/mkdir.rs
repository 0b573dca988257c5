//! Command to create a directory and its missing ancestors.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Create a directory and every missing ancestor.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory to create
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.path(&self.path);
        if path.is_empty() {
            return Err(CliError::InvalidArguments(format!(
                "'{}' names no directory",
                self.path
            )));
        }
        global.ops().make_dirs(&path)?;
        Ok(())
    }
}
