//! Command to check whether a path exists.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Succeed if the path exists.
#[derive(Args)]
pub struct ExistsCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Invert the check (fail if the path exists)
    #[arg(long)]
    pub not: bool,
}

impl ExistsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.path(&self.path);
        let exists = global.ops().exists(&path);

        if exists != self.not {
            return Ok(());
        }
        let msg = if self.not {
            format!("Path exists: {path}")
        } else {
            format!("Path does not exist: {path}")
        };
        Err(CliError::SemanticFailure(msg))
    }
}
