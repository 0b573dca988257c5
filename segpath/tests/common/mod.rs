//! Common test utilities for integration tests.
//!
//! Tests that hit the real filesystem build their trees inside a temporary
//! directory and address them through native-style path strings.

use std::fs;
use std::path::{Path, PathBuf};

use segpath::SegmentedPath;
use tempfile::TempDir;

/// A temporary directory with helpers for laying out files.
///
/// The directory is removed when the fixture is dropped.
pub struct TempTree {
    dir: TempDir,
}

#[allow(dead_code)]
impl TempTree {
    /// Creates an empty temporary tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// The root of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Native string form of `rel` inside the tree.
    pub fn string(&self, rel: &str) -> String {
        self.join(rel)
            .to_str()
            .expect("temp paths are UTF-8")
            .to_string()
    }

    /// Native `SegmentedPath` for `rel` inside the tree.
    pub fn path(&self, rel: &str) -> SegmentedPath {
        SegmentedPath::native(self.string(rel))
    }

    /// Writes a file, creating parent directories.
    pub fn file(&self, rel: &str, contents: &[u8]) -> &Self {
        let target = self.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(target, contents).expect("write file");
        self
    }

    /// Creates a directory and its parents.
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.join(rel)).expect("create dir");
        self
    }
}

/// Strips `root` and the following separator from each listed path and
/// sorts the rest, so listings can be compared independent of platform.
#[allow(dead_code)]
pub fn relative_sorted(root: &Path, listed: &[String]) -> Vec<String> {
    let mut out: Vec<String> = listed
        .iter()
        .map(|p| {
            Path::new(p)
                .strip_prefix(root)
                .expect("listed path under root")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    out.sort();
    out
}
