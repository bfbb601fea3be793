//! In-memory storage for tests and dry runs.
//!
//! Paths are normalized lexically and kept in a `BTreeMap`. `PathBuf`
//! ordering is component-wise, so map order is exactly the pre-order,
//! name-sorted traversal `walkdir` produces on disk, and every subtree is a
//! contiguous key range.

use std::{
    collections::BTreeMap,
    ops::Bound,
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use proser_core::{
    application::{
        ApplicationError, StorageErrorKind,
        ports::{EntryInfo, EntryKind, Storage, WalkControl, WalkVisitor},
    },
    domain::Permissions,
    error::{ProserError, ProserResult},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Directory { permissions: Permissions },
    File { content: Vec<u8>, permissions: Permissions },
}

impl Node {
    fn kind(&self) -> EntryKind {
        match self {
            Node::Directory { .. } => EntryKind::Directory,
            Node::File { .. } => EntryKind::File,
        }
    }
}

/// In-memory storage. Clones share the same tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<BTreeMap<PathBuf, Node>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file as UTF-8 (testing helper).
    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Option<String> {
        let key = normalize(path.as_ref());
        let inner = self.inner.read().ok()?;
        match inner.get(&key) {
            Some(Node::File { content, .. }) => Some(String::from_utf8_lossy(content).into_owned()),
            _ => None,
        }
    }

    /// Permissions recorded for a file or directory.
    pub fn permissions(&self, path: impl AsRef<Path>) -> Option<Permissions> {
        let key = normalize(path.as_ref());
        let inner = self.inner.read().ok()?;
        inner.get(&key).map(|node| match node {
            Node::Directory { permissions } | Node::File { permissions, .. } => *permissions,
        })
    }

    /// All file paths in traversal order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| {
                inner
                    .iter()
                    .filter(|(_, n)| matches!(n, Node::File { .. }))
                    .map(|(p, _)| p.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.clear();
        }
    }

    fn read(&self) -> ProserResult<RwLockReadGuard<'_, BTreeMap<PathBuf, Node>>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StorageLockPoisoned.into())
    }

    fn write(&self) -> ProserResult<RwLockWriteGuard<'_, BTreeMap<PathBuf, Node>>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StorageLockPoisoned.into())
    }
}

impl Storage for MemoryStorage {
    fn write_file(
        &self,
        path: &Path,
        content: &[u8],
        permissions: Permissions,
    ) -> ProserResult<()> {
        let key = normalize(path);
        if key.as_os_str().is_empty() {
            return Err(is_a_directory(path, "write file"));
        }

        let mut inner = self.write()?;
        if let Some(parent) = key.parent() {
            ensure_dirs(&mut inner, parent, Permissions::directory(), path)?;
        }
        if let Some(Node::Directory { .. }) = inner.get(&key) {
            return Err(is_a_directory(path, "write file"));
        }
        inner.insert(
            key,
            Node::File {
                content: content.to_vec(),
                permissions,
            },
        );
        Ok(())
    }

    fn create_dir_all(&self, path: &Path, permissions: Permissions) -> ProserResult<()> {
        let key = normalize(path);
        let mut inner = self.write()?;
        ensure_dirs(&mut inner, &key, permissions, path)
    }

    fn walk(&self, root: &Path, visit: &mut WalkVisitor<'_>) -> ProserResult<()> {
        let key = normalize(root);

        // Snapshot so the visitor may call back into storage.
        let entries: Vec<(PathBuf, EntryKind)> = {
            let inner = self.read()?;
            if key.as_os_str().is_empty() {
                inner
                    .iter()
                    .filter(|(p, _)| !p.has_root())
                    .map(|(p, n)| (p.clone(), n.kind()))
                    .collect()
            } else {
                match inner.get(&key) {
                    None => return Err(ApplicationError::not_found(root, "walk").into()),
                    Some(Node::File { .. }) => Vec::new(),
                    Some(Node::Directory { .. }) => inner
                        .range::<PathBuf, _>((Bound::Excluded(&key), Bound::Unbounded))
                        .take_while(|(p, _)| p.starts_with(&key))
                        .map(|(p, n)| (p.clone(), n.kind()))
                        .collect(),
                }
            }
        };

        let root_kind = self.metadata(root)?.kind;
        if visit(root, root_kind)? == WalkControl::SkipSubtree {
            return Ok(());
        }

        let mut skipped: Option<PathBuf> = None;
        for (path, kind) in entries {
            if skipped.as_ref().is_some_and(|s| path.starts_with(s)) {
                continue;
            }
            let rel = path.strip_prefix(&key).unwrap_or(&path);
            let shown = root.join(rel);
            if visit(&shown, kind)? == WalkControl::SkipSubtree && kind.is_dir() {
                skipped = Some(path);
            }
        }
        Ok(())
    }

    fn metadata(&self, path: &Path) -> ProserResult<EntryInfo> {
        let key = normalize(path);
        if key.as_os_str().is_empty() {
            return Ok(EntryInfo::directory());
        }
        match self.read()?.get(&key) {
            Some(Node::Directory { .. }) => Ok(EntryInfo::directory()),
            Some(Node::File { content, .. }) => Ok(EntryInfo::file(content.len() as u64)),
            None => Err(ApplicationError::not_found(path, "stat").into()),
        }
    }

    fn read_file(&self, path: &Path) -> ProserResult<Vec<u8>> {
        let key = normalize(path);
        match self.read()?.get(&key) {
            Some(Node::File { content, .. }) => Ok(content.clone()),
            Some(Node::Directory { .. }) => Err(is_a_directory(path, "read file")),
            None => Err(ApplicationError::not_found(path, "read file").into()),
        }
    }
}

/// Insert `dir` and every missing ancestor. An existing file anywhere on the
/// way is an error.
fn ensure_dirs(
    inner: &mut BTreeMap<PathBuf, Node>,
    dir: &Path,
    permissions: Permissions,
    requested: &Path,
) -> ProserResult<()> {
    let mut current = PathBuf::new();
    for component in dir.components() {
        current.push(component);
        match inner.get(&current) {
            Some(Node::Directory { .. }) => {}
            Some(Node::File { .. }) => {
                return Err(ApplicationError::storage(
                    requested,
                    "create directory",
                    StorageErrorKind::NotADirectory,
                    format!("{} is a file", current.display()),
                )
                .into());
            }
            None => {
                inner.insert(current.clone(), Node::Directory { permissions });
            }
        }
    }
    Ok(())
}

fn is_a_directory(path: &Path, operation: &'static str) -> ProserError {
    ApplicationError::storage(path, operation, StorageErrorKind::AlreadyExists, "is a directory")
        .into()
}

/// Lexical normalization: drops `.`, resolves `..` where possible. The
/// current directory normalizes to the empty path.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}
