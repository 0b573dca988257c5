//! Path parsing and the parsed path value.
//!
//! This module turns a raw path string into a [`SegmentedPath`]: the
//! original string plus its segments, root marker and style.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! A segment is a non-empty run of characters between separators. The
//! separator set depends on the [`PathStyle`](crate::PathStyle): Windows
//! paths split on both `\` and `/`, Unix paths only on `/`. Runs of
//! separators never produce empty segments.
//!
//! ## Root marker
//!
//! Absoluteness is decided on the unsplit string. A Windows path is
//! absolute when it starts with a drive designator (`C:`); a Unix path when
//! it starts with `/`. The drive designator is kept as the root marker and
//! re-emitted whenever the path is rebuilt from its segments, but it is
//! never a segment itself.
//!
//! # Examples
//!
//! ```
//! use segpath::path::SegmentedPath;
//! use segpath::PathStyle;
//!
//! let path = SegmentedPath::new("C:\\\\a\\\\\\\\b\\\\", PathStyle::Windows);
//! assert_eq!(path.segments(), &["a", "b"]);
//! assert!(path.is_absolute());
//! ```

pub mod parse;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use parse::Parsed;
pub use types::{split_extension, SegmentedPath};
