//! Build script for segpath-cli.
//!
//! Generates a man page with clap_mangen into OUT_DIR.
//!
//! The command structure is rebuilt here by hand because a build script
//! cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep this in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("segpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, inspect and create filesystem paths")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Path style used to parse arguments (windows, unix, native, unknown)")
                .value_name("STYLE")
                .global(true)
                .default_value("native")
                .env("SEGPATH_STYLE"),
        )
        .subcommands(vec![
            Command::new("inspect").about("Show how a path parses and what it names on disk"),
            Command::new("exists").about("Succeed if a path exists"),
            Command::new("size").about("Print a file's size in bytes"),
            Command::new("absolute").about("Print the absolute form of a path"),
            Command::new("cwd").about("Print the current working directory"),
            Command::new("mkdir").about("Create a directory and its missing ancestors"),
            Command::new("list").about("List files under a directory"),
            Command::new("replace")
                .about("Print a file path with its name or extension replaced"),
        ])
}

fn main() -> std::io::Result<()> {
    let Some(out_dir) = std::env::var_os("OUT_DIR") else {
        return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set"));
    };
    let man_dir = PathBuf::from(out_dir).join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("segpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
