//! Filesystem operation abstractions for dependency injection.
//!
//! Provides the [`FileSystemOps`] trait so that the applier can run against
//! the real disk ([`SystemFileSystemOps`]) or an in-memory file system
//! ([`MemoryFileSystemOps`]) without any change to the engine itself.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

/// File-system effects consumed by the configuration applier.
///
/// Paths handed to these methods are already resolved (see
/// [`resolve_target`]).
#[cfg_attr(test, mockall::automock)]
pub trait FileSystemOps: Send + Sync {
    /// Returns `true` if a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file at `path` as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`std::io::ErrorKind::NotFound`] if the file
    /// does not exist, or any other I/O error raised while reading.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Replace the contents of `path` with `content`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file (or a missing parent directory) cannot be
    /// written.
    fn write(&self, path: &Path, content: &str) -> std::io::Result<()>;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    }
}

/// In-memory [`FileSystemOps`] keyed by absolute path.
///
/// Seed it with a starting file system, run the engine, then inspect the
/// result with [`contents`](Self::contents) or [`snapshot`](Self::snapshot).
///
/// # Example
///
/// ```
/// use project_setup::operations::{FileSystemOps, MemoryFileSystemOps};
/// use std::path::Path;
///
/// let fs = MemoryFileSystemOps::new().with_file("/home/me/a.txt", "Original");
/// fs.write(Path::new("/home/me/b.txt"), "New").unwrap();
///
/// assert_eq!(fs.contents("/home/me/a.txt").as_deref(), Some("Original"));
/// assert_eq!(fs.contents("/home/me/b.txt").as_deref(), Some("New"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryFileSystemOps {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryFileSystemOps {
    /// Create an empty file system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the starting file system.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.lock().insert(path.into(), content.into());
        self
    }

    /// Current contents of `path`, if present.
    #[must_use]
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().get(path.as_ref()).cloned()
    }

    /// Copy of the whole file system.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.files
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl FileSystemOps for MemoryFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.lock()
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
    }

    fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
        self.lock().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Resolve a configuration-file target against the working directory.
///
/// Absolute targets are returned unchanged.  Relative targets are joined to
/// `root` and normalised lexically: `.` components are dropped and `..` pops
/// the previous component, so `./a.txt` under `/home/me` is `/home/me/a.txt`.
///
/// # Examples
///
/// ```
/// use project_setup::operations::resolve_target;
/// use std::path::{Path, PathBuf};
///
/// let root = Path::new("/home/me");
/// assert_eq!(resolve_target(root, "./a.txt"), PathBuf::from("/home/me/a.txt"));
/// assert_eq!(resolve_target(root, "../b.txt"), PathBuf::from("/home/b.txt"));
/// assert_eq!(resolve_target(root, "/etc/c.txt"), PathBuf::from("/etc/c.txt"));
/// ```
#[must_use]
pub fn resolve_target(root: &Path, target: &str) -> PathBuf {
    let joined = root.join(target);
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
