//! The parsed path value.
//!
//! `SegmentedPath` keeps the raw string it was built from next to the
//! structure recovered by [`parse`](super::parse::parse). The raw string is
//! what gets handed to the operating system; the segments are what the
//! accessors and reconstruction helpers work on.

use std::fmt;

use serde::Serialize;

use crate::path::parse::{parse, Parsed};
use crate::style::PathStyle;

/// A path string together with its segments, style and absoluteness.
///
/// # Examples
///
/// ```
/// use segpath::{PathStyle, SegmentedPath};
///
/// let path = SegmentedPath::new("C:\\a\\b\\c.txt", PathStyle::Windows);
/// assert!(path.is_absolute());
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.parent_path(), "C:\\a\\b\\");
/// assert_eq!(path.last_segment(), Some("c.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct SegmentedPath {
    raw: String,
    segments: Vec<String>,
    root: Option<String>,
    anchor: Option<String>,
    style: PathStyle,
}

impl SegmentedPath {
    /// Parse `raw` with the given style.
    #[must_use]
    pub fn new(raw: impl Into<String>, style: PathStyle) -> Self {
        let raw = raw.into();
        let Parsed {
            segments,
            root,
            anchor,
        } = parse(&raw, style);
        Self {
            raw,
            segments,
            root,
            anchor,
            style,
        }
    }

    /// Parse `raw` with the platform's native style.
    #[must_use]
    pub fn native(raw: impl Into<String>) -> Self {
        Self::new(raw, PathStyle::NATIVE)
    }

    /// Replace the underlying string and style, re-deriving everything else.
    ///
    /// The new string is parsed before any field is touched, so the value is
    /// never observed half-updated.
    pub fn reinit(&mut self, raw: impl Into<String>, style: PathStyle) {
        *self = Self::new(raw, style);
    }

    /// The unmodified input string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The style this path was parsed with.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// The non-empty segments, left to right.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (not bytes).
    ///
    /// For a relative path this is the depth relative to wherever it is
    /// resolved from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if the raw string is absolute for its style.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.root.is_some()
    }

    /// The root marker of an absolute path: `"C:"` for Windows, `""` for Unix.
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// The drive letter of an absolute Windows-style path.
    ///
    /// ```
    /// use segpath::{PathStyle, SegmentedPath};
    ///
    /// let path = SegmentedPath::new("d:\\games", PathStyle::Windows);
    /// assert_eq!(path.drive_letter(), Some('d'));
    /// assert_eq!(SegmentedPath::new("/usr", PathStyle::Unix).drive_letter(), None);
    /// ```
    #[must_use]
    pub fn drive_letter(&self) -> Option<char> {
        match self.style {
            PathStyle::Windows => self.root().and_then(|root| root.chars().next()),
            PathStyle::Unix | PathStyle::Unknown => None,
        }
    }

    /// The last segment, if any. Whether it names a file or a directory is
    /// not decided here.
    #[must_use]
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The parent directory of an absolute path, with a trailing separator.
    ///
    /// Relative paths and paths without segments yield an empty string.
    ///
    /// ```
    /// use segpath::{PathStyle, SegmentedPath};
    ///
    /// let path = SegmentedPath::new("/srv/www/index.html", PathStyle::Unix);
    /// assert_eq!(path.parent_path(), "/srv/www/");
    ///
    /// let path = SegmentedPath::new("..\\folder", PathStyle::Windows);
    /// assert_eq!(path.parent_path(), "");
    /// ```
    #[must_use]
    pub fn parent_path(&self) -> String {
        if !self.is_absolute() || self.is_empty() {
            return String::new();
        }
        self.dir_prefix(self.len() - 1)
    }

    /// Rebuild the first `count` segments, each followed by the separator.
    ///
    /// Absolute paths start with their root marker and a separator, so
    /// `dir_prefix(0)` is `"C:\"` or `"/"` for them. A relative path keeps
    /// its anchor (`"\"` or `"\\"`) and is `""` without one.
    pub(crate) fn dir_prefix(&self, count: usize) -> String {
        let sep = self.style.separator();
        let mut out = String::with_capacity(self.raw.len() + 2);
        if let Some(root) = &self.root {
            out.push_str(root);
            out.push(sep);
        } else if let Some(anchor) = &self.anchor {
            out.push_str(anchor);
        }
        for segment in &self.segments[..count] {
            out.push_str(segment);
            out.push(sep);
        }
        out
    }

    /// Rebuild the first `count` segments without a trailing separator
    /// (the root separator or anchor is kept).
    pub(crate) fn prefix(&self, count: usize) -> String {
        let mut out = self.dir_prefix(count);
        if count > 0 {
            out.pop();
        }
        out
    }

    fn with_last_segment(&self, replace: impl FnOnce(&str) -> String) -> Option<String> {
        let last = self.last_segment()?;
        let mut out = self.dir_prefix(self.len() - 1);
        out.push_str(&replace(last));
        Some(out)
    }

    /// Rebuild the path with the last segment's extension replaced by `ext`.
    ///
    /// A last segment without `.` gets `.ext` appended. `None` when there
    /// are no segments. No filesystem check is made.
    #[must_use]
    pub fn replaced_extension(&self, ext: &str) -> Option<String> {
        self.with_last_segment(|name| match split_extension(name) {
            Some((stem, _)) => format!("{stem}.{ext}"),
            None => format!("{name}.{ext}"),
        })
    }

    /// Rebuild the path with the last segment replaced by `name`.
    #[must_use]
    pub fn replaced_file_name(&self, name: &str) -> Option<String> {
        self.with_last_segment(|_| name.to_string())
    }

    /// Rebuild the path with the part of the last segment before its final
    /// `.` replaced by `prefix`, keeping the extension.
    #[must_use]
    pub fn replaced_file_name_prefix(&self, prefix: &str) -> Option<String> {
        self.with_last_segment(|name| match name.rfind('.') {
            Some(pos) => format!("{prefix}{}", &name[pos..]),
            None => prefix.to_string(),
        })
    }

    /// Rewrite the raw string's extension in place and re-parse.
    ///
    /// Everything after the final `.` of the last segment is replaced; a last
    /// segment without `.` gets `.ext` appended. Does nothing for a path
    /// without segments.
    pub fn set_extension(&mut self, ext: &str) {
        let Some(last) = self.last_segment() else {
            return;
        };
        let style = self.style;
        let trimmed = self.raw.trim_end_matches(|c| style.is_separator(c));
        let raw = if last.contains('.') {
            // the last '.' of the raw string lies in the last segment
            match trimmed.rfind('.') {
                Some(pos) => format!("{}{ext}", &trimmed[..=pos]),
                None => format!("{trimmed}.{ext}"),
            }
        } else {
            format!("{trimmed}.{ext}")
        };
        self.reinit(raw, style);
    }
}

/// Split a file name at its final `.` into stem and extension.
///
/// ```
/// use segpath::path::split_extension;
///
/// assert_eq!(split_extension("archive.tar.gz"), Some(("archive.tar", "gz")));
/// assert_eq!(split_extension(".profile"), Some(("", "profile")));
/// assert_eq!(split_extension("Makefile"), None);
/// ```
#[must_use]
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    name.rfind('.').map(|pos| (&name[..pos], &name[pos + 1..]))
}

impl fmt::Display for SegmentedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for SegmentedPath {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for SegmentedPath {
    fn from(value: &str) -> Self {
        Self::native(value)
    }
}

impl From<String> for SegmentedPath {
    fn from(value: String) -> Self {
        Self::native(value)
    }
}
