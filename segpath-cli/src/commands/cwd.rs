//! Command to print the current working directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the current working directory.
#[derive(Args)]
pub struct CwdCommand {
    /// Print the directory of the running executable instead
    #[arg(long)]
    pub exe: bool,
}

impl CwdCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ops = global.ops();
        let dir = if self.exe {
            ops.executable_dir()?
        } else {
            ops.current_dir()?
        };
        println!("{dir}");
        Ok(())
    }
}
