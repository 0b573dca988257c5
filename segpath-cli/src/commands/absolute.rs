//! Command to print the absolute form of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the absolute form of a path.
///
/// Absolute input is echoed unchanged; relative input is resolved by the
/// operating system and must exist on Unix.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.path(&self.path);
        println!("{}", global.ops().make_absolute(&path)?);
        Ok(())
    }
}
