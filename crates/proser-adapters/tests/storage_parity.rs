//! The in-memory backend must be observably identical to the filesystem.

use std::path::{Path, PathBuf};

use proser_adapters::{LocalStorage, MemoryStorage};
use proser_core::application::{DirectoryScanner, EntryKind, Storage, WalkControl};
use proser_core::domain::Permissions;
use tempfile::TempDir;

fn walk(storage: &dyn Storage, root: &Path, skip: Option<&str>) -> Vec<(PathBuf, EntryKind)> {
    let mut seen = Vec::new();
    storage
        .walk(root, &mut |path, kind| {
            let rel = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            let prune = skip.is_some_and(|s| rel == Path::new(s));
            seen.push((rel, kind));
            Ok(if prune {
                WalkControl::SkipSubtree
            } else {
                WalkControl::Continue
            })
        })
        .unwrap();
    seen
}

fn populate(storage: &dyn Storage, root: &Path) {
    for dir in ["src/api", "docs", "node_modules/pkg", "Zeta", "a-b", "a/b"] {
        storage
            .create_dir_all(&root.join(dir), Permissions::directory())
            .unwrap();
    }
    for (file, content) in [
        ("README.md", "readme"),
        ("src/main.rs", "fn main() {}"),
        ("src/api/deep/nested/mod.rs", "// nested"),
        ("docs/guide.md", "guide"),
    ] {
        storage
            .write_file(&root.join(file), content.as_bytes(), Permissions::read_write())
            .unwrap();
    }
    // Overwrite keeps a single entry.
    storage
        .write_file(&root.join("README.md"), b"readme v2", Permissions::read_write())
        .unwrap();
}

#[test]
fn walk_order_matches() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let local = LocalStorage::new();
    let memory = MemoryStorage::new();
    memory.create_dir_all(root, Permissions::directory()).unwrap();

    populate(&local, root);
    populate(&memory, root);

    assert_eq!(walk(&local, root, None), walk(&memory, root, None));
    assert_eq!(walk(&local, root, Some("src")), walk(&memory, root, Some("src")));
}

#[test]
fn metadata_matches() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let local = LocalStorage::new();
    let memory = MemoryStorage::new();
    memory.create_dir_all(root, Permissions::directory()).unwrap();
    populate(&local, root);
    populate(&memory, root);

    for rel in ["", "src", "src/api/deep", "README.md", "docs/guide.md", "missing", "src/nope.rs"] {
        let path = root.join(rel);
        let l = local.metadata(&path);
        let m = memory.metadata(&path);
        assert_eq!(l.is_ok(), m.is_ok(), "{rel}");
        match (l, m) {
            (Ok(l), Ok(m)) => {
                assert_eq!(l.kind, m.kind, "{rel}");
                assert_eq!(l.len, m.len, "{rel}");
            }
            (Err(l), Err(m)) => {
                assert!(l.is_not_found(), "{rel}: {l}");
                assert!(m.is_not_found(), "{rel}: {m}");
            }
            _ => unreachable!(),
        }
    }

    assert_eq!(
        local.read_file(&root.join("README.md")).unwrap(),
        memory.read_file(&root.join("README.md")).unwrap()
    );
}

#[test]
fn scanner_agrees_on_both_backends() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let local = LocalStorage::new();
    let memory = MemoryStorage::new();
    memory.create_dir_all(root, Permissions::directory()).unwrap();
    populate(&local, root);
    populate(&memory, root);

    let scanner = DirectoryScanner::default();
    let from_local = scanner.scan(&local, root).unwrap();
    let from_memory = scanner.scan(&memory, root).unwrap();
    assert_eq!(from_local, from_memory);
    assert!(!from_local.iter().any(|p| p.ends_with("node_modules")));
}

#[test]
fn memory_walk_is_repeatable() {
    let memory = MemoryStorage::new();
    let root = Path::new("/repo");
    memory.create_dir_all(root, Permissions::directory()).unwrap();
    populate(&memory, root);
    assert_eq!(walk(&memory, root, None), walk(&memory, root, None));
}

#[test]
fn overwriting_locked_files_matches() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let local = LocalStorage::new();
    let memory = MemoryStorage::new();
    memory.create_dir_all(root, Permissions::directory()).unwrap();

    for (name, first) in [
        ("locked.md", Permissions::read_only()),
        ("run.sh", Permissions::executable()),
    ] {
        let path = root.join(name);
        for storage in [&local as &dyn Storage, &memory] {
            storage.write_file(&path, b"v1", first).unwrap();
            storage
                .write_file(&path, b"v2", Permissions::read_write())
                .unwrap();
        }
        assert_eq!(local.read_file(&path).unwrap(), b"v2");
        assert_eq!(local.read_file(&path).unwrap(), memory.read_file(&path).unwrap());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(root.join("locked.md")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, Permissions::read_write().unix_mode());
    }
}
