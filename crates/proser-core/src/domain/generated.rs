use std::collections::HashSet;

use crate::domain::{
    common::{Permissions, RelativePath},
    error::DomainError,
};

/// One file a generator wants written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: RelativePath,
    pub content: String,
    pub permissions: Permissions,
}

impl GeneratedFile {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Ordered output of a single generator.
///
/// Paths are unique within a set; insertion order is the write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    files: Vec<GeneratedFile>,
    seen: HashSet<RelativePath>,
}

impl GeneratedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with default permissions.
    pub fn add(&mut self, path: RelativePath, content: impl Into<String>) -> Result<(), DomainError> {
        self.add_with_permissions(path, content, Permissions::default())
    }

    pub fn add_with_permissions(
        &mut self,
        path: RelativePath,
        content: impl Into<String>,
        permissions: Permissions,
    ) -> Result<(), DomainError> {
        if !self.seen.insert(path.clone()) {
            return Err(DomainError::DuplicatePath {
                path: path.to_string(),
            });
        }
        self.files.push(GeneratedFile {
            path,
            content: content.into(),
            permissions,
        });
        Ok(())
    }

    pub fn with_file(
        mut self,
        path: RelativePath,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.add(path, content)?;
        Ok(self)
    }

    pub fn get(&self, path: impl AsRef<std::path::Path>) -> Option<&GeneratedFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path.as_path() == path)
    }

    pub fn contains(&self, path: impl AsRef<std::path::Path>) -> bool {
        self.get(path).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedFile> {
        self.files.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.files.iter().map(|f| &f.path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a GeneratedFiles {
    type Item = &'a GeneratedFile;
    type IntoIter = std::slice::Iter<'a, GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

impl IntoIterator for GeneratedFiles {
    type Item = GeneratedFile;
    type IntoIter = std::vec::IntoIter<GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
