//! Filesystem access
//!
//! The tree copier only talks to the disk through [`FileSystem`], so it can
//! run against [`MemoryFileSystem`] in tests.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::errors::{Result, file_operation_error};

/// The operations the tree copier needs from a filesystem
pub trait FileSystem {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists the full paths of the direct children of a directory
    ///
    /// # Errors
    /// Returns an error if `path` is missing or is not a directory
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Reads the whole content of a file
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Writes `content` to a file, replacing whatever was there
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Creates a directory and any missing ancestors
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(path)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "list directory"))?;

        let mut children = entries
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<PathBuf>>>()
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "list directory"))?;

        // read_dir order is platform dependent
        children.sort();
        Ok(children)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        fs::write(path, content).map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "create directory"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MemoryEntry {
    Directory,
    File(Vec<u8>),
}

/// In-memory [`FileSystem`]
///
/// Paths are normalised lexically (`.` is dropped, `..` pops a component) and
/// the root always exists. Missing paths fail with `NotFound` and a file in
/// the way of a directory with `AlreadyExists`, as on disk.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    entries: std::cell::RefCell<BTreeMap<PathBuf, MemoryEntry>>,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFileSystem {
    /// Creates a filesystem containing only the root directory
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(PathBuf::from("/"), MemoryEntry::Directory);
        MemoryFileSystem {
            entries: std::cell::RefCell::new(entries),
        }
    }

    /// Adds a file, creating its parent directories
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        let path = normalise(path.as_ref());
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.entries
            .borrow_mut()
            .insert(path, MemoryEntry::File(content.as_ref().to_vec()));
        self
    }

    /// Adds a directory and its ancestors
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.insert_dirs(&normalise(path.as_ref()));
        self
    }

    /// Content of a file, if one exists at `path`
    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.entries.borrow().get(&normalise(path.as_ref())) {
            Some(MemoryEntry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Every path strictly below `root`, relative to it, directories marked with a trailing `/`
    pub fn tree_below(&self, root: impl AsRef<Path>) -> Vec<String> {
        let root = normalise(root.as_ref());
        self.entries
            .borrow()
            .iter()
            .filter(|(path, _)| **path != root)
            .filter_map(|(path, entry)| {
                let relative = path.strip_prefix(&root).ok()?;
                let mut name = relative.to_string_lossy().replace('\\', "/");
                if *entry == MemoryEntry::Directory {
                    name.push('/');
                }
                Some(name)
            })
            .collect()
    }

    fn insert_dirs(&self, path: &Path) {
        let mut entries = self.entries.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            entries
                .entry(ancestor.to_path_buf())
                .or_insert(MemoryEntry::Directory);
        }
    }

    fn entry(&self, path: &Path) -> Option<MemoryEntry> {
        self.entries.borrow().get(&normalise(path)).cloned()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entry(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.entry(path), Some(MemoryEntry::Directory))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let dir = normalise(path);
        match self.entry(&dir) {
            Some(MemoryEntry::Directory) => {}
            Some(MemoryEntry::File(_)) => {
                return Err(file_operation_error(
                    io::Error::other("not a directory"),
                    dir,
                    "list directory",
                ));
            }
            None => {
                return Err(file_operation_error(
                    io::Error::from(io::ErrorKind::NotFound),
                    dir,
                    "list directory",
                ));
            }
        }

        Ok(self
            .entries
            .borrow()
            .keys()
            .filter(|candidate| candidate.parent() == Some(dir.as_path()))
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        match self.entry(path) {
            Some(MemoryEntry::File(content)) => Ok(content),
            Some(MemoryEntry::Directory) => Err(file_operation_error(
                io::Error::other("is a directory"),
                path.to_path_buf(),
                "read",
            )),
            None => Err(file_operation_error(
                io::Error::from(io::ErrorKind::NotFound),
                path.to_path_buf(),
                "read",
            )),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        let path = normalise(path);
        let parent_is_dir = path.parent().is_some_and(|parent| self.is_dir(parent));
        if !parent_is_dir {
            return Err(file_operation_error(
                io::Error::from(io::ErrorKind::NotFound),
                path,
                "write",
            ));
        }
        if self.is_dir(&path) {
            return Err(file_operation_error(
                io::Error::other("is a directory"),
                path,
                "write",
            ));
        }
        self.entries
            .borrow_mut()
            .insert(path, MemoryEntry::File(content.to_vec()));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let path = normalise(path);
        if let Some(blocker) = path
            .ancestors()
            .find(|ancestor| matches!(self.entry(ancestor), Some(MemoryEntry::File(_))))
        {
            return Err(file_operation_error(
                io::Error::from(io::ErrorKind::AlreadyExists),
                blocker.to_path_buf(),
                "create directory",
            ));
        }
        self.insert_dirs(&path);
        Ok(())
    }
}

fn normalise(path: &Path) -> PathBuf {
    let mut normalised = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::Normal(part) => normalised.push(part),
            Component::ParentDir => {
                normalised.pop();
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_lists_direct_children_only() {
        let fs = MemoryFileSystem::new()
            .with_file("/public/index.html", "<html>")
            .with_file("/public/js/app.js", "app")
            .with_dir("/public/empty");

        let children = fs.list_dir(Path::new("/public")).unwrap();
        assert_eq!(
            children,
            vec![
                PathBuf::from("/public/empty"),
                PathBuf::from("/public/index.html"),
                PathBuf::from("/public/js"),
            ]
        );
    }

    #[test]
    fn test_memory_fs_errors_match_real_kinds() {
        let fs = MemoryFileSystem::new().with_file("/public/a.txt", "a");

        let missing = fs.list_dir(Path::new("/nope")).unwrap_err();
        assert_eq!(missing.io_kind(), Some(io::ErrorKind::NotFound));

        let unread = fs.read(Path::new("/public/b.txt")).unwrap_err();
        assert_eq!(unread.io_kind(), Some(io::ErrorKind::NotFound));

        let orphan = fs.write(Path::new("/dist/a.txt"), b"a").unwrap_err();
        assert_eq!(orphan.io_kind(), Some(io::ErrorKind::NotFound));

        let blocked = fs.create_dir_all(Path::new("/public/a.txt/sub")).unwrap_err();
        assert_eq!(blocked.io_kind(), Some(io::ErrorKind::AlreadyExists));
    }

    #[test]
    fn test_memory_fs_write_overwrites() {
        let fs = MemoryFileSystem::new().with_file("/dist/a.txt", "old");
        fs.write(Path::new("/dist/a.txt"), b"new").unwrap();
        assert_eq!(fs.file_content("/dist/a.txt"), Some(b"new".to_vec()));
    }

    #[test]
    fn test_memory_fs_normalises_paths() {
        let fs = MemoryFileSystem::new().with_file("/site/./public/../public/a.txt", "a");
        assert!(fs.is_dir(Path::new("/site/public")));
        assert_eq!(fs.tree_below("/site"), vec!["public/", "public/a.txt"]);
    }

    #[test]
    fn test_real_fs_lists_sorted_children() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        for name in ["b.txt", "a.txt", "c.txt"] {
            fs::write(temp_dir.path().join(name), name).expect("Failed to write test file");
        }

        let children = RealFileSystem.list_dir(temp_dir.path()).unwrap();
        let names: Vec<_> = children
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_real_fs_attaches_path_to_errors() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("missing.txt");

        let error = RealFileSystem.read(&missing).unwrap_err();
        assert_eq!(error.io_kind(), Some(io::ErrorKind::NotFound));
        assert!(format!("{error}").contains("missing.txt"));
    }
}
