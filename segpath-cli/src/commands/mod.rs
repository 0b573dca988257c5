//! CLI command implementations.
//!
//! - `inspect`: Show how a path parses and what it names on disk
//! - `exists`: Succeed if a path exists
//! - `size`: Print a file's size in bytes
//! - `absolute`: Print the absolute form of a path
//! - `cwd`: Print the current working directory
//! - `mkdir`: Create a directory and its missing ancestors
//! - `list`: List files under a directory
//! - `replace`: Print a file path with its name or extension replaced

pub mod absolute;
pub mod cwd;
pub mod exists;
pub mod inspect;
pub mod list;
pub mod mkdir;
pub mod replace;
pub mod size;

pub use absolute::AbsoluteCommand;
pub use cwd::CwdCommand;
pub use exists::ExistsCommand;
pub use inspect::InspectCommand;
pub use list::ListCommand;
pub use mkdir::MkdirCommand;
pub use replace::ReplaceCommand;
pub use size::SizeCommand;
