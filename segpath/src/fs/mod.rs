//! The filesystem backend seam.
//!
//! Every operating-system call the library makes goes through
//! [`FsBackend`]. [`OsFs`] talks to the host; [`MapFs`] keeps a tree in
//! memory. Platform differences live inside the backend implementations,
//! never in the path types.

use std::io;

pub mod memory;
pub mod os;

pub use memory::MapFs;
pub use os::OsFs;

/// What kind of entry a path names, as reported by a stat that follows
/// symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything else: device, socket, FIFO, dangling link.
    Other,
}

/// The subset of stat results the library needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// Entry kind.
    pub kind: EntryKind,
    /// Size in bytes as reported by stat.
    pub len: u64,
}

impl Metadata {
    /// Returns true if the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// The entry's file name (not a full path).
    pub name: String,
    /// Entry kind, following symbolic links.
    pub kind: EntryKind,
    /// True if the entry itself is a symbolic link. `kind` then describes
    /// the link's target.
    pub link: bool,
}

/// A directory listing in progress.
///
/// The backend's directory handle is owned by the iterator and released
/// when it is dropped, whether the listing ran to the end or not.
pub type DirEntries = Box<dyn Iterator<Item = io::Result<DirEntry>>>;

/// Operating-system primitives used by [`PathOps`](crate::PathOps).
///
/// All paths are passed as the raw strings the caller supplied; backends
/// decide how to interpret them.
#[cfg_attr(test, mockall::automock)]
pub trait FsBackend {
    /// Stat `path`, following symbolic links.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the path cannot be stat'ed.
    fn metadata(&self, path: &str) -> io::Result<Metadata>;

    /// Open `path` and return the byte offset of its end.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the file cannot be opened or seeked.
    fn file_len(&self, path: &str) -> io::Result<u64>;

    /// Resolve `path` to an absolute form using the platform's resolution
    /// rules.
    ///
    /// # Errors
    ///
    /// Returns the OS error if resolution fails.
    fn canonicalize(&self, path: &str) -> io::Result<String>;

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the directory cannot be determined.
    fn current_dir(&self) -> io::Result<String>;

    /// The full path of the running executable.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the path cannot be determined.
    fn current_exe(&self) -> io::Result<String>;

    /// Create a single directory. The parent must already exist.
    ///
    /// # Errors
    ///
    /// Returns the OS error, including `AlreadyExists`.
    fn create_dir(&self, path: &str) -> io::Result<()>;

    /// Start listing the entries of directory `path`.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the directory cannot be opened.
    fn read_dir(&self, path: &str) -> io::Result<DirEntries>;
}
