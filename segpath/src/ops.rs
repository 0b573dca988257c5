//! Filesystem operations on parsed paths.
//!
//! [`PathOps`] binds a [`FsBackend`] and answers every question that needs
//! the filesystem: existence, classification, size, absolute resolution,
//! directory creation and listing. It also hosts the name accessors that
//! depend on whether a path names a file or a directory.
//!
//! Every call passes the path's original string to the backend. Only
//! [`PathOps::make_dirs`] and the replacement helpers rebuild strings from
//! the segments; a relative path that began with separators keeps them.
//!
//! # Classification contract
//!
//! [`PathOps::exists`], [`PathOps::is_directory`] and [`PathOps::is_file`]
//! never fail: any stat error reads as `false`. For a missing path all
//! three are `false`; use `exists` to tell "absent" from "wrong type".
//! `is_file` is true for anything that exists and is not a directory,
//! including devices, sockets and FIFOs, so
//! `exists() == is_file() || is_directory()` always holds.
//!
//! # Concurrent modification
//!
//! Listing holds no locks. If the tree changes while
//! [`PathOps::list_files`] walks it, the result reflects whatever each
//! directory contained when it was read.

use crate::error::{Error, Result};
use crate::fs::{EntryKind, FsBackend, Metadata, OsFs};
use crate::path::{split_extension, SegmentedPath};
use crate::style::PathStyle;

/// Options for [`PathOps::list_files`].
///
/// # Examples
///
/// ```
/// use segpath::ListOptions;
///
/// let options = ListOptions::new().with_extension("txt").recursive(false);
/// assert_eq!(options.extension(), "txt");
/// assert!(!options.is_recursive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    extension: String,
    recursive: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            extension: String::new(),
            recursive: true,
        }
    }
}

impl ListOptions {
    /// All files, descending into subdirectories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep files whose extension is exactly `ext` (case-sensitive,
    /// without the leading `.`). An empty string keeps everything.
    #[must_use]
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }

    /// Whether to descend into subdirectories.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// The extension filter; empty means no filter.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether subdirectories are descended into.
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    fn accepts(&self, name: &str) -> bool {
        self.extension.is_empty()
            || split_extension(name).is_some_and(|(_, ext)| ext == self.extension)
    }
}

/// Filesystem operations over a backend.
///
/// # Examples
///
/// ```no_run
/// use segpath::{PathOps, SegmentedPath};
///
/// let ops = PathOps::native();
/// let path = SegmentedPath::native("build/out/logs");
/// ops.make_dirs(&path).unwrap();
/// assert!(ops.is_directory(&path));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathOps<B = OsFs> {
    backend: B,
}

impl PathOps<OsFs> {
    /// Operations against the host filesystem.
    #[must_use]
    pub fn native() -> Self {
        Self { backend: OsFs }
    }
}

impl<B: FsBackend> PathOps<B> {
    /// Operations against the given backend.
    #[must_use]
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// The bound backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn stat(&self, path: &SegmentedPath) -> Option<Metadata> {
        self.backend.metadata(path.as_str()).ok()
    }

    /// Returns true if the path names anything at all.
    #[must_use]
    pub fn exists(&self, path: &SegmentedPath) -> bool {
        self.stat(path).is_some()
    }

    /// Returns true if the path names a directory.
    #[must_use]
    pub fn is_directory(&self, path: &SegmentedPath) -> bool {
        self.stat(path).is_some_and(|meta| meta.is_dir())
    }

    /// Returns true if the path exists and is not a directory.
    #[must_use]
    pub fn is_file(&self, path: &SegmentedPath) -> bool {
        self.stat(path).is_some_and(|meta| !meta.is_dir())
    }

    /// The size in bytes of the file, or 0 for a directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the path cannot be opened as a file,
    /// including when it does not exist.
    pub fn file_size(&self, path: &SegmentedPath) -> Result<u64> {
        if self.is_directory(path) {
            return Ok(0);
        }
        self.backend
            .file_len(path.as_str())
            .map_err(|source| Error::Io {
                path: path.as_str().to_string(),
                source,
            })
    }

    /// The last segment, unless the path is empty or names a directory.
    #[must_use]
    pub fn filename_with_extension(&self, path: &SegmentedPath) -> String {
        if self.is_directory(path) {
            return String::new();
        }
        path.last_segment().unwrap_or_default().to_string()
    }

    /// The filename after its final `.`; empty without a `.`.
    #[must_use]
    pub fn extension(&self, path: &SegmentedPath) -> String {
        let name = self.filename_with_extension(path);
        split_extension(&name)
            .map(|(_, ext)| ext.to_string())
            .unwrap_or_default()
    }

    /// The filename before its final `.`; empty without a `.`.
    #[must_use]
    pub fn filename_without_extension(&self, path: &SegmentedPath) -> String {
        let name = self.filename_with_extension(path);
        split_extension(&name)
            .map(|(stem, _)| stem.to_string())
            .unwrap_or_default()
    }

    /// A new path string with the file's extension replaced by `ext`.
    ///
    /// Empty unless the path currently names a file. `path` is unchanged.
    #[must_use]
    pub fn with_extension_replaced(&self, path: &SegmentedPath, ext: &str) -> String {
        self.if_file(path, |p| p.replaced_extension(ext))
    }

    /// A new path string with the file name replaced by `name`.
    ///
    /// Empty unless the path currently names a file. `path` is unchanged.
    #[must_use]
    pub fn with_file_name_replaced(&self, path: &SegmentedPath, name: &str) -> String {
        self.if_file(path, |p| p.replaced_file_name(name))
    }

    /// A new path string with the file name before its final `.` replaced
    /// by `prefix`.
    ///
    /// Empty unless the path currently names a file. `path` is unchanged.
    #[must_use]
    pub fn with_file_name_prefix_replaced(&self, path: &SegmentedPath, prefix: &str) -> String {
        self.if_file(path, |p| p.replaced_file_name_prefix(prefix))
    }

    fn if_file(
        &self,
        path: &SegmentedPath,
        rebuild: impl FnOnce(&SegmentedPath) -> Option<String>,
    ) -> String {
        if !self.is_file(path) {
            return String::new();
        }
        rebuild(path).unwrap_or_default()
    }

    /// Change the extension of a file path in place and re-parse it.
    ///
    /// Returns false, leaving `path` untouched, unless it names a file.
    pub fn change_extension(&self, path: &mut SegmentedPath, ext: &str) -> bool {
        if !self.is_file(path) {
            return false;
        }
        path.set_extension(ext);
        true
    }

    /// The absolute form of the path.
    ///
    /// Absolute paths are returned unchanged. Relative paths are resolved
    /// by the backend: on Unix hosts that means `realpath`, which resolves
    /// `.`, `..` and symbolic links and requires the path to exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] if the backend cannot resolve the path.
    pub fn make_absolute(&self, path: &SegmentedPath) -> Result<String> {
        if path.is_absolute() {
            return Ok(path.as_str().to_string());
        }
        self.backend
            .canonicalize(path.as_str())
            .map_err(|source| Error::Resolution {
                path: path.as_str().to_string(),
                source,
            })
    }

    /// The drive letter the path lives on, for Windows-style paths.
    ///
    /// The path is made absolute first. Unix-style paths have no drive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] if a relative path cannot be resolved.
    pub fn drive_name(&self, path: &SegmentedPath) -> Result<Option<char>> {
        if path.style() != PathStyle::Windows {
            return Ok(None);
        }
        let absolute = self.make_absolute(path)?;
        Ok(SegmentedPath::new(absolute, PathStyle::Windows).drive_letter())
    }

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if it cannot be determined (for
    /// example, it was deleted).
    pub fn current_dir(&self) -> Result<String> {
        self.backend
            .current_dir()
            .map_err(|source| Error::Environment {
                what: "current directory",
                source,
            })
    }

    /// The directory holding the running executable, without a trailing
    /// separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if the executable path is unknown.
    pub fn executable_dir(&self) -> Result<String> {
        let exe = self
            .backend
            .current_exe()
            .map_err(|source| Error::Environment {
                what: "executable path",
                source,
            })?;
        let dir = exe
            .rfind(|c| PathStyle::NATIVE.is_separator(c))
            .map_or("", |pos| &exe[..pos]);
        Ok(dir.to_string())
    }

    /// Create a single directory.
    ///
    /// Returns `Ok(false)` if something already exists at `raw`, and
    /// `Ok(true)` if the directory was created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDirectory`] for any failure other than the
    /// path already existing (missing parent, permissions).
    pub fn make_dir(&self, raw: &str) -> Result<bool> {
        if self.backend.metadata(raw).is_ok() {
            return Ok(false);
        }
        match self.backend.create_dir(raw) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(source) => Err(Error::CreateDirectory {
                path: raw.to_string(),
                source,
            }),
        }
    }

    /// Create the directory and every missing ancestor, parent first.
    ///
    /// One level per segment is attempted; levels that already exist are
    /// skipped, so calling this again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDirectory`] for the first level that cannot be
    /// created.
    pub fn make_dirs(&self, path: &SegmentedPath) -> Result<()> {
        for depth in 1..=path.len() {
            let level = path.prefix(depth);
            if self.make_dir(&level)? {
                log::debug!("created directory {level}");
            }
        }
        Ok(())
    }

    /// Collect the files under a directory into `out`.
    ///
    /// Returns `Ok(false)` and leaves `out` untouched if the path is not an
    /// existing directory. Otherwise `out` is cleared and filled depth-first
    /// in backend order with `directory + separator + name` strings built
    /// from the path's original string and style. Symbolic links to
    /// directories are neither descended into nor listed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a directory cannot be read during the walk;
    /// `out` then holds the files found so far.
    pub fn list_files(
        &self,
        path: &SegmentedPath,
        out: &mut Vec<String>,
        options: &ListOptions,
    ) -> Result<bool> {
        if !self.is_directory(path) {
            log::debug!("not listing {path}: not an existing directory");
            return Ok(false);
        }
        out.clear();
        self.walk(path.as_str(), path.style(), options, out)?;
        Ok(true)
    }

    fn walk(
        &self,
        dir: &str,
        style: PathStyle,
        options: &ListOptions,
        out: &mut Vec<String>,
    ) -> Result<()> {
        let io_err = |source| Error::Io {
            path: dir.to_string(),
            source,
        };
        for entry in self.backend.read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if entry.name == "." || entry.name == ".." {
                continue;
            }
            let child = join_child(dir, &entry.name, style);
            match entry.kind {
                EntryKind::Directory if entry.link => {
                    log::debug!("not following linked directory {child}");
                }
                EntryKind::Directory => {
                    if options.recursive {
                        self.walk(&child, style, options, out)?;
                    }
                }
                EntryKind::File | EntryKind::Other => {
                    if options.accepts(&entry.name) {
                        out.push(child);
                    }
                }
            }
        }
        Ok(())
    }
}

fn join_child(dir: &str, name: &str, style: PathStyle) -> String {
    let mut child = String::with_capacity(dir.len() + name.len() + 1);
    child.push_str(dir);
    if !dir.is_empty() && !dir.ends_with(|c| style.is_separator(c)) {
        child.push(style.separator());
    }
    child.push_str(name);
    child
}
