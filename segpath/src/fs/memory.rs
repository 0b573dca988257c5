//! An in-memory filesystem backend.
//!
//! `MapFs` keeps a tree of directories and files in a sorted map, so tests
//! and sandboxes can exercise every path operation without touching the
//! disk. Both `/` and `\` separate components, and a leading separator or
//! drive designator (`C:`) makes a path absolute. Relative paths are
//! resolved against a configurable working directory.

use std::collections::BTreeMap;
use std::io;
use std::sync::{PoisonError, RwLock};

use super::{DirEntries, DirEntry, EntryKind, FsBackend, Metadata};

const ROOT: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(Vec<u8>),
    Other,
}

impl Node {
    fn kind(&self) -> EntryKind {
        match self {
            Self::Dir => EntryKind::Directory,
            Self::File(_) => EntryKind::File,
            Self::Other => EntryKind::Other,
        }
    }
}

/// In-memory [`FsBackend`].
///
/// # Examples
///
/// ```
/// use segpath::fs::MapFs;
/// use segpath::{PathOps, PathStyle, SegmentedPath};
///
/// let fs = MapFs::new()
///     .with_dir("/work")
///     .with_file("/work/notes.txt", "hello");
/// let ops = PathOps::with_backend(fs);
///
/// let notes = SegmentedPath::new("/work/notes.txt", PathStyle::Unix);
/// assert!(ops.is_file(&notes));
/// assert_eq!(ops.file_size(&notes).unwrap(), 5);
/// ```
#[derive(Debug)]
pub struct MapFs {
    nodes: RwLock<BTreeMap<String, Node>>,
    cwd: String,
    exe: Option<String>,
}

impl Default for MapFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MapFs {
    /// Create an empty tree containing only the root directory, with the
    /// root as working directory.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(ROOT.to_string(), Node::Dir);
        Self {
            nodes: RwLock::new(nodes),
            cwd: ROOT.to_string(),
            exe: None,
        }
    }

    /// Add a directory and any missing ancestors.
    #[must_use]
    pub fn with_dir(mut self, path: &str) -> Self {
        let key = self.key(path);
        self.insert_with_ancestors(key, Node::Dir);
        self
    }

    /// Add a file with the given contents, creating missing ancestors.
    #[must_use]
    pub fn with_file(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        let key = self.key(path);
        self.insert_with_ancestors(key, Node::File(contents.into()));
        self
    }

    /// Add a special entry (device, socket) that is neither file nor
    /// directory.
    #[must_use]
    pub fn with_special(mut self, path: &str) -> Self {
        let key = self.key(path);
        self.insert_with_ancestors(key, Node::Other);
        self
    }

    /// Set the working directory, creating it if missing.
    #[must_use]
    pub fn with_cwd(mut self, path: &str) -> Self {
        let key = self.key(path);
        self.insert_with_ancestors(key.clone(), Node::Dir);
        self.cwd = key;
        self
    }

    /// Set the path reported as the running executable.
    #[must_use]
    pub fn with_exe(mut self, path: &str) -> Self {
        self.exe = Some(self.key(path));
        self
    }

    fn insert_with_ancestors(&mut self, key: String, node: Node) {
        let nodes = self.nodes.get_mut().unwrap_or_else(PoisonError::into_inner);
        let mut ancestor = parent_key(&key);
        while let Some(dir) = ancestor {
            nodes.entry(dir.to_string()).or_insert(Node::Dir);
            ancestor = parent_key(dir);
        }
        nodes.insert(key, node);
    }

    /// Components a path starts from: none for an absolute path, the
    /// working directory's for a relative one.
    fn base(&self, path: &str) -> Vec<&str> {
        let bytes = path.as_bytes();
        let absolute = path.starts_with(['/', '\\'])
            || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':');
        if absolute {
            Vec::new()
        } else {
            self.cwd.split('/').filter(|p| !p.is_empty()).collect()
        }
    }

    /// Turn `path` into the absolute, `/`-separated key of the tree without
    /// looking at what exists.
    ///
    /// `.` components are dropped and `..` pops a component (never above
    /// the root).
    fn key(&self, path: &str) -> String {
        let mut parts = self.base(path);
        for component in components(path) {
            step(&mut parts, component);
        }
        join_key(&parts)
    }

    /// Like [`key`](Self::key), but walks the tree: every component must be
    /// applied to an existing directory, and a trailing separator requires
    /// the final entry to be a directory if it exists.
    fn resolve(&self, nodes: &BTreeMap<String, Node>, path: &str) -> io::Result<String> {
        let mut parts = self.base(path);
        for component in components(path) {
            match nodes.get(&join_key(&parts)) {
                Some(Node::Dir) => {}
                Some(_) => return Err(not_a_directory(path)),
                None => return Err(not_found(path)),
            }
            step(&mut parts, component);
        }
        let key = join_key(&parts);
        let not_dir = matches!(nodes.get(&key), Some(Node::File(_) | Node::Other));
        if not_dir && path.ends_with(['/', '\\']) {
            return Err(not_a_directory(path));
        }
        Ok(key)
    }

    fn lookup(&self, path: &str) -> io::Result<(String, Node)> {
        if path.is_empty() {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        let nodes = self.nodes.read().unwrap_or_else(PoisonError::into_inner);
        let key = self.resolve(&nodes, path)?;
        match nodes.get(&key) {
            Some(node) => Ok((key, node.clone())),
            None => Err(not_found(path)),
        }
    }
}

fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|c| !c.is_empty())
}

fn step<'a>(parts: &mut Vec<&'a str>, component: &'a str) {
    match component {
        "." => {}
        ".." => {
            parts.pop();
        }
        c => parts.push(c),
    }
}

fn join_key(parts: &[&str]) -> String {
    format!("/{}", parts.join("/"))
}

fn parent_key(key: &str) -> Option<&str> {
    if key == ROOT {
        return None;
    }
    match key.rfind('/') {
        Some(0) => Some(ROOT),
        Some(pos) => Some(&key[..pos]),
        None => None,
    }
}

fn not_a_directory(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("not a directory: {path}"))
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {path}"),
    )
}

impl FsBackend for MapFs {
    fn metadata(&self, path: &str) -> io::Result<Metadata> {
        let (_, node) = self.lookup(path)?;
        let len = match &node {
            Node::File(contents) => contents.len() as u64,
            Node::Dir | Node::Other => 0,
        };
        Ok(Metadata {
            kind: node.kind(),
            len,
        })
    }

    fn file_len(&self, path: &str) -> io::Result<u64> {
        match self.lookup(path)?.1 {
            Node::File(contents) => Ok(contents.len() as u64),
            Node::Other => Ok(0),
            Node::Dir => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("is a directory: {path}"),
            )),
        }
    }

    fn canonicalize(&self, path: &str) -> io::Result<String> {
        self.lookup(path).map(|(key, _)| key)
    }

    fn current_dir(&self) -> io::Result<String> {
        Ok(self.cwd.clone())
    }

    fn current_exe(&self) -> io::Result<String> {
        match &self.exe {
            Some(exe) => Ok(exe.clone()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no executable path")),
        }
    }

    fn create_dir(&self, path: &str) -> io::Result<()> {
        if path.is_empty() {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        let mut nodes = self.nodes.write().unwrap_or_else(PoisonError::into_inner);
        // resolving checks that the parent is a directory
        let key = self.resolve(&nodes, path)?;
        if nodes.contains_key(&key) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        nodes.insert(key, Node::Dir);
        Ok(())
    }

    fn read_dir(&self, path: &str) -> io::Result<DirEntries> {
        let (key, node) = self.lookup(path)?;
        if node != Node::Dir {
            return Err(not_a_directory(path));
        }
        let prefix = if key == ROOT { key } else { format!("{key}/") };

        let nodes = self.nodes.read().unwrap_or_else(PoisonError::into_inner);
        let entries: Vec<io::Result<DirEntry>> = nodes
            .range(prefix.clone()..)
            .take_while(|(child, _)| child.starts_with(&prefix))
            .map(|(child, node)| (&child[prefix.len()..], node))
            .filter(|(name, _)| !name.is_empty() && !name.contains('/'))
            .map(|(name, node)| {
                Ok(DirEntry {
                    name: name.to_string(),
                    kind: node.kind(),
                    link: false,
                })
            })
            .collect();
        Ok(Box::new(entries.into_iter()))
    }
}
