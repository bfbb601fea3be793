//! Test doubles shared by the application-layer unit tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::ports::{
    EntryInfo, EntryKind, GenerateContext, Generator, Storage, WalkControl, WalkVisitor,
    WritePolicy,
};
use crate::application::{ApplicationError, StorageErrorKind};
use crate::domain::{GeneratedFiles, OutputNamespace, Permissions, RelativePath};
use crate::error::ProserResult;

/// Minimal ordered in-memory storage. Writes to any path in `fail_on` fail.
#[derive(Default)]
pub struct StubStorage {
    dirs: Mutex<BTreeSet<PathBuf>>,
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    fail_on: BTreeSet<PathBuf>,
}

impl StubStorage {
    pub fn with_dirs(dirs: &[&str]) -> Self {
        let storage = Self::default();
        for d in dirs {
            storage
                .create_dir_all(Path::new(d), Permissions::directory())
                .unwrap();
        }
        storage
    }

    pub fn failing_on(mut self, path: &str) -> Self {
        self.fail_on.insert(PathBuf::from(path));
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(Path::new(path))
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl Storage for StubStorage {
    fn write_file(&self, path: &Path, content: &[u8], _: Permissions) -> ProserResult<()> {
        if self.fail_on.contains(path) {
            return Err(
                ApplicationError::storage(path, "write", StorageErrorKind::Io, "injected").into(),
            );
        }
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent, Permissions::directory())?;
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path, _: Permissions) -> ProserResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn walk(&self, root: &Path, visit: &mut WalkVisitor<'_>) -> ProserResult<()> {
        let mut entries: Vec<(PathBuf, EntryKind)> = Vec::new();
        for d in self.dirs.lock().unwrap().iter() {
            if d.starts_with(root) {
                entries.push((d.clone(), EntryKind::Directory));
            }
        }
        for f in self.files.lock().unwrap().keys() {
            if f.starts_with(root) {
                entries.push((f.clone(), EntryKind::File));
            }
        }
        if entries.is_empty() {
            return Err(ApplicationError::not_found(root, "walk").into());
        }
        entries.sort();

        let mut skipped: Option<PathBuf> = None;
        for (path, kind) in entries {
            if skipped.as_ref().is_some_and(|s| path.starts_with(s)) {
                continue;
            }
            if visit(&path, kind)? == WalkControl::SkipSubtree && kind.is_dir() {
                skipped = Some(path);
            }
        }
        Ok(())
    }

    fn metadata(&self, path: &Path) -> ProserResult<EntryInfo> {
        if path == Path::new(".") || self.dirs.lock().unwrap().contains(path) {
            return Ok(EntryInfo::directory());
        }
        match self.files.lock().unwrap().get(path) {
            Some(c) => Ok(EntryInfo::file(c.len() as u64)),
            None => Err(ApplicationError::not_found(path, "stat").into()),
        }
    }

    fn read_file(&self, path: &Path) -> ProserResult<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::not_found(path, "read").into())
    }
}

/// Generator returning a fixed list of files.
pub struct StubGenerator {
    pub name: &'static str,
    pub namespace: OutputNamespace,
    pub files: Vec<(&'static str, &'static str)>,
    pub policy: WritePolicy,
}

impl StubGenerator {
    pub fn new(name: &'static str, namespace: OutputNamespace) -> Self {
        Self {
            name,
            namespace,
            files: Vec::new(),
            policy: WritePolicy::Strict,
        }
    }

    pub fn file(mut self, path: &'static str, content: &'static str) -> Self {
        self.files.push((path, content));
        self
    }

    pub fn best_effort(mut self) -> Self {
        self.policy = WritePolicy::BestEffort;
        self
    }
}

impl Generator for StubGenerator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn namespace(&self) -> OutputNamespace {
        self.namespace.clone()
    }

    fn write_policy(&self) -> WritePolicy {
        self.policy
    }

    fn generate(&self, _: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let mut out = GeneratedFiles::new();
        for (path, content) in &self.files {
            out.add(RelativePath::try_new(*path)?, *content)?;
        }
        Ok(out)
    }
}
