//! Bounded, filtered directory enumeration.
//!
//! Decides which directories receive a per-directory guidance file. Only
//! reads through [`Storage::walk`]; never writes.

use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

use crate::{
    application::{
        ApplicationError,
        ports::{EntryKind, Storage, WalkControl},
    },
    domain::SkipList,
    error::ProserResult,
};

/// Direct children of the root are depth 1.
pub const DEFAULT_MAX_DEPTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryScanner {
    max_depth: usize,
    skip_list: SkipList,
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, SkipList::default())
    }
}

impl DirectoryScanner {
    pub fn new(max_depth: usize, skip_list: SkipList) -> Self {
        Self {
            max_depth,
            skip_list,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn skip_list(&self) -> &SkipList {
        &self.skip_list
    }

    /// Directories strictly below `root`, up to `max_depth`, in traversal
    /// order. Hidden, skip-listed and too-deep directories are pruned along
    /// with their whole subtree.
    ///
    /// Only a failure of the walk itself is an error; it is reported with
    /// the root attached.
    #[instrument(skip(self, storage), fields(root = %root.display(), max_depth = self.max_depth))]
    pub fn scan(&self, storage: &dyn Storage, root: &Path) -> ProserResult<Vec<PathBuf>> {
        let mut found = Vec::new();

        storage
            .walk(root, &mut |path, kind| Ok(self.visit(root, path, kind, &mut found)))
            .map_err(|source| ApplicationError::Traversal {
                root: root.to_path_buf(),
                source: Box::new(source),
            })?;

        debug!(count = found.len(), "Directory scan complete");
        Ok(found)
    }

    fn visit(
        &self,
        root: &Path,
        path: &Path,
        kind: EntryKind,
        found: &mut Vec<PathBuf>,
    ) -> WalkControl {
        if kind != EntryKind::Directory || path == root {
            return WalkControl::Continue;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if name.starts_with('.') {
            trace!(path = %path.display(), "Skipping hidden directory");
            return WalkControl::SkipSubtree;
        }
        if self.skip_list.matches(&name) {
            trace!(path = %path.display(), "Skipping listed directory");
            return WalkControl::SkipSubtree;
        }

        let depth = match path.strip_prefix(root) {
            Ok(rel) => rel.components().count(),
            Err(_) => {
                debug!(path = %path.display(), "Cannot relativize, pruning");
                return WalkControl::SkipSubtree;
            }
        };

        if depth == 0 || depth > self.max_depth {
            return WalkControl::SkipSubtree;
        }

        found.push(path.to_path_buf());
        WalkControl::Continue
    }
}
