//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `proser-adapters` crate provides implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{GeneratedFiles, OutputNamespace, Permissions, ProjectConfig};
use crate::error::ProserResult;

/// What a storage entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Result of [`Storage::metadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
    pub kind: EntryKind,
    /// Content length in bytes; 0 for directories.
    pub len: u64,
}

impl EntryInfo {
    pub fn directory() -> Self {
        Self {
            kind: EntryKind::Directory,
            len: 0,
        }
    }

    pub fn file(len: u64) -> Self {
        Self {
            kind: EntryKind::File,
            len,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// Visitor verdict during [`Storage::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    Continue,
    /// Do not descend into the directory just visited. No-op for files.
    SkipSubtree,
}

/// Visitor callback for [`Storage::walk`].
pub type WalkVisitor<'a> = dyn FnMut(&Path, EntryKind) -> ProserResult<WalkControl> + 'a;

/// Port for hierarchical storage.
///
/// Implemented by:
/// - `proser_adapters::storage::LocalStorage` (real filesystem)
/// - `proser_adapters::storage::MemoryStorage` (tests, dry runs)
///
/// Both backends must be observably identical for `walk`, `metadata` and
/// `write_file` on paths under a common root.
pub trait Storage: Send + Sync {
    /// Create or overwrite a file, creating missing ancestors.
    fn write_file(&self, path: &Path, content: &[u8], permissions: Permissions)
    -> ProserResult<()>;

    /// Create a directory and all missing ancestors. Idempotent.
    fn create_dir_all(&self, path: &Path, permissions: Permissions) -> ProserResult<()>;

    /// Pre-order traversal starting at (and including) `root`.
    ///
    /// Siblings are visited in lexicographic order. A visitor error aborts
    /// the walk and is returned unchanged.
    fn walk(&self, root: &Path, visit: &mut WalkVisitor<'_>) -> ProserResult<()>;

    /// Existence and kind of `path`; a not-found storage error otherwise.
    /// `.` always reports as a directory.
    fn metadata(&self, path: &Path) -> ProserResult<EntryInfo>;

    /// Read a file's full content.
    fn read_file(&self, path: &Path) -> ProserResult<Vec<u8>>;

    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }
}

/// How the writer reacts to a failed write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// First failure aborts the generator.
    #[default]
    Strict,
    /// Failures become warnings and the next file is attempted.
    BestEffort,
}

/// Read-only inputs handed to every generator.
///
/// Built once per run and shared by all generators in it.
#[derive(Clone)]
pub struct GenerateContext {
    config: Arc<ProjectConfig>,
    root: PathBuf,
    storage: Arc<dyn Storage>,
}

impl GenerateContext {
    pub fn new(config: ProjectConfig, root: impl Into<PathBuf>, storage: Arc<dyn Storage>) -> Self {
        Self {
            config: Arc::new(config),
            root: root.into(),
            storage,
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Absolute target root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }
}

impl std::fmt::Debug for GenerateContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateContext")
            .field("project", &self.config.general.project_name)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// A unit producing relative-path-to-content output from a config.
///
/// `generate` computes content only; the writer performs persistence. A
/// generator whose section is absent returns an empty set, never an error.
pub trait Generator: Send + Sync {
    /// Stable identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// The part of the target tree this generator owns.
    fn namespace(&self) -> OutputNamespace;

    fn write_policy(&self) -> WritePolicy {
        WritePolicy::Strict
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles>;
}
