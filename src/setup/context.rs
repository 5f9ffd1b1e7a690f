//! Per-run context shared by the applier.
use std::path::PathBuf;
use std::sync::Arc;

use crate::logging::Log;
use crate::operations::{FileSystemOps, SystemFileSystemOps};

/// Shared state for one setup run.
#[derive(Clone)]
pub struct Context {
    /// Logger for status output and option recording.
    pub log: Arc<dyn Log>,
    /// File-system effects (injectable for testing).
    pub fs_ops: Arc<dyn FileSystemOps>,
    /// Working directory that relative targets are resolved against.
    pub root: PathBuf,
    /// Whether to perform a dry run (read, but never write).
    pub dry_run: bool,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("log", &"<dyn Log>")
            .field("fs_ops", &"<dyn FileSystemOps>")
            .field("root", &self.root)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Context {
    /// Creates a context that runs against the real file system.
    #[must_use]
    pub fn new(log: Arc<dyn Log>, root: PathBuf, dry_run: bool) -> Self {
        Self {
            log,
            fs_ops: Arc::new(SystemFileSystemOps),
            root,
            dry_run,
        }
    }

    /// Replace the file-system implementation.
    #[must_use]
    pub fn with_fs_ops(mut self, fs_ops: Arc<dyn FileSystemOps>) -> Self {
        self.fs_ops = fs_ops;
        self
    }

    /// Resolve a declared target path against the working directory.
    #[must_use]
    pub fn resolve(&self, target: &str) -> PathBuf {
        crate::operations::resolve_target(&self.root, target)
    }
}
