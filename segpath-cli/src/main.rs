//! Main entry point for the segpath CLI.
//!
//! A thin driver over the `segpath` library:
//! - `inspect`: Show how a path parses and what it names on disk
//! - `exists`, `size`, `absolute`, `cwd`: Filesystem queries
//! - `mkdir`: Create a directory and its missing ancestors
//! - `list`: List files under a directory
//! - `replace`: Rewrite a file path's name or extension

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = segpath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        style: cli.style,
    };

    let result = match cli.command {
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Exists(cmd) => cmd.execute(&global),
        cli::Command::Size(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Cwd(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Replace(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
