//! The host filesystem backend.

use std::env;
use std::fs::{self, File};
use std::io::{self, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use super::{DirEntries, DirEntry, EntryKind, FsBackend, Metadata};

/// Backend over `std::fs` and `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl OsFs {
    /// Create the host backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

fn into_string(path: PathBuf) -> io::Result<String> {
    path.into_os_string().into_string().map_err(|os| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("path is not valid UTF-8: {}", os.to_string_lossy()),
        )
    })
}

/// Resolves `.`, `..` and symbolic links; the path must exist.
#[cfg(not(windows))]
fn resolve(path: &str) -> io::Result<PathBuf> {
    fs::canonicalize(path)
}

/// Makes the path absolute against the current drive and directory without
/// requiring it to exist and without adding a verbatim `\\?\` prefix.
#[cfg(windows)]
fn resolve(path: &str) -> io::Result<PathBuf> {
    std::path::absolute(path)
}

fn dir_entry(entry: &fs::DirEntry) -> io::Result<DirEntry> {
    let name = entry.file_name().into_string().unwrap_or_else(|os| {
        let lossy = os.to_string_lossy().into_owned();
        log::warn!("directory entry name is not valid UTF-8, using {lossy:?}");
        lossy
    });
    let file_type = entry.file_type()?;
    if !file_type.is_symlink() {
        let kind = kind_of(file_type);
        return Ok(DirEntry {
            name,
            kind,
            link: false,
        });
    }
    // a dangling link still gets listed
    let kind = match fs::metadata(entry.path()) {
        Ok(meta) => kind_of(meta.file_type()),
        Err(_) => EntryKind::Other,
    };
    Ok(DirEntry {
        name,
        kind,
        link: true,
    })
}

impl FsBackend for OsFs {
    fn metadata(&self, path: &str) -> io::Result<Metadata> {
        let meta = fs::metadata(path)?;
        Ok(Metadata {
            kind: kind_of(meta.file_type()),
            len: meta.len(),
        })
    }

    fn file_len(&self, path: &str) -> io::Result<u64> {
        let mut file = File::open(path)?;
        file.seek(SeekFrom::End(0))
    }

    fn canonicalize(&self, path: &str) -> io::Result<String> {
        into_string(resolve(path)?)
    }

    fn current_dir(&self) -> io::Result<String> {
        into_string(env::current_dir()?)
    }

    fn current_exe(&self) -> io::Result<String> {
        into_string(env::current_exe()?)
    }

    fn create_dir(&self, path: &str) -> io::Result<()> {
        fs::create_dir(Path::new(path))
    }

    fn read_dir(&self, path: &str) -> io::Result<DirEntries> {
        let entries = fs::read_dir(path)?;
        Ok(Box::new(entries.map(|entry| dir_entry(&entry?))))
    }
}
