#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # segpath
//!
//! Path strings parsed into segments, plus the filesystem queries that
//! go with them.
//!
//! A [`SegmentedPath`] is built from a raw string and a [`PathStyle`]. It
//! splits the string on the style's separators, drops empty pieces and
//! records whether the string was absolute. Parsing never fails and never
//! touches the disk.
//!
//! Everything that needs the filesystem goes through [`PathOps`], which is
//! generic over a [`FsBackend`]: [`OsFs`] for the host, [`MapFs`] for an
//! in-memory tree.
//!
//! ## Core Types
//!
//! - [`SegmentedPath`] and [`PathStyle`]: parsing and reconstruction
//! - [`PathOps`] and [`ListOptions`]: filesystem operations
//! - [`FsBackend`], [`OsFs`], [`MapFs`]: the backend seam
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use segpath::{PathStyle, SegmentedPath};
//!
//! let path = SegmentedPath::new("C:\\a\\\\b\\", PathStyle::Windows);
//! assert_eq!(path.segments(), &["a", "b"]);
//! assert!(path.is_absolute());
//! assert_eq!(path.parent_path(), "C:\\a\\");
//! ```
//!
//! ```
//! use segpath::{ListOptions, MapFs, PathOps, PathStyle, SegmentedPath};
//!
//! let ops = PathOps::with_backend(
//!     MapFs::new()
//!         .with_file("/src/main.rs", "fn main() {}")
//!         .with_file("/src/util/mod.rs", "")
//!         .with_file("/src/README.md", ""),
//! );
//!
//! let mut files = Vec::new();
//! let root = SegmentedPath::new("/src", PathStyle::Unix);
//! ops.list_files(&root, &mut files, &ListOptions::new().with_extension("rs"))
//!     .unwrap();
//! assert_eq!(files, vec!["/src/main.rs", "/src/util/mod.rs"]);
//! ```

pub mod error;
pub mod fs;
pub mod logging;
pub mod ops;
pub mod path;
pub mod style;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use fs::{FsBackend, MapFs, OsFs};
pub use logging::{init_logger, LogLevel, Logger};
pub use ops::{ListOptions, PathOps};
pub use path::SegmentedPath;
pub use style::PathStyle;
