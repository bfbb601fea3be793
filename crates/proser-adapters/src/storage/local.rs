//! Local filesystem storage using `std::fs` and `walkdir`.

use std::fs;
use std::io;
use std::path::Path;

use proser_core::{
    application::{
        ApplicationError, StorageErrorKind,
        ports::{EntryInfo, EntryKind, Storage, WalkControl, WalkVisitor},
    },
    domain::Permissions,
    error::{ProserError, ProserResult},
};
use tracing::trace;
use walkdir::WalkDir;

/// Production storage backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn write_file(
        &self,
        path: &Path,
        content: &[u8],
        permissions: Permissions,
    ) -> ProserResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent, Permissions::directory())?;
        }
        unlock_existing(path)?;
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;
        apply_permissions(path, permissions)
    }

    fn create_dir_all(&self, path: &Path, permissions: Permissions) -> ProserResult<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(permissions.unix_mode());
        }
        #[cfg(not(unix))]
        let _ = permissions;

        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn walk(&self, root: &Path, visit: &mut WalkVisitor<'_>) -> ProserResult<()> {
        let mut entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = entries.next() {
            let entry = entry.map_err(|e| map_walk_error(root, e))?;
            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            if visit(entry.path(), kind)? == WalkControl::SkipSubtree && kind.is_dir() {
                trace!(path = %entry.path().display(), "Not descending");
                entries.skip_current_dir();
            }
        }
        Ok(())
    }

    fn metadata(&self, path: &Path) -> ProserResult<EntryInfo> {
        let meta = fs::metadata(path).map_err(|e| map_io_error(path, e, "stat"))?;
        Ok(if meta.is_dir() {
            EntryInfo::directory()
        } else {
            EntryInfo::file(meta.len())
        })
    }

    fn read_file(&self, path: &Path) -> ProserResult<Vec<u8>> {
        fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

/// A file left read-only by an earlier write gets owner write back, so
/// overwriting behaves like [`crate::MemoryStorage`].
fn unlock_existing(path: &Path) -> ProserResult<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(map_io_error(path, e, "stat")),
    };
    if !meta.is_file() || !meta.permissions().readonly() {
        return Ok(());
    }

    let mut perms = meta.permissions();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        perms.set_mode(perms.mode() | 0o200);
    }
    #[cfg(not(unix))]
    perms.set_readonly(false);

    trace!(path = %path.display(), "Restoring write permission before overwrite");
    fs::set_permissions(path, perms).map_err(|e| map_io_error(path, e, "set permissions"))
}

#[cfg(unix)]
fn apply_permissions(path: &Path, permissions: Permissions) -> ProserResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(permissions.unix_mode()))
        .map_err(|e| map_io_error(path, e, "set permissions"))
}

#[cfg(not(unix))]
fn apply_permissions(path: &Path, permissions: Permissions) -> ProserResult<()> {
    let mut perms = fs::metadata(path)
        .map_err(|e| map_io_error(path, e, "stat"))?
        .permissions();
    perms.set_readonly(!permissions.writable());
    fs::set_permissions(path, perms).map_err(|e| map_io_error(path, e, "set permissions"))
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> ProserError {
    let kind = match e.kind() {
        io::ErrorKind::NotFound => StorageErrorKind::NotFound,
        io::ErrorKind::AlreadyExists => StorageErrorKind::AlreadyExists,
        io::ErrorKind::NotADirectory => StorageErrorKind::NotADirectory,
        _ => StorageErrorKind::Io,
    };
    ApplicationError::storage(path, operation, kind, e.to_string()).into()
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> ProserError {
    let path = e.path().unwrap_or(root).to_path_buf();
    match e.into_io_error() {
        Some(io) => map_io_error(&path, io, "walk"),
        None => ApplicationError::storage(path, "walk", StorageErrorKind::Io, "filesystem loop")
            .into(),
    }
}
