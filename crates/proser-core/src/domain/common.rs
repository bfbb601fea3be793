use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A path relative to the target root.
///
/// Invariant: never absolute, never empty, never climbs above the root
/// with `..`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path is not a valid relative path (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_new(&path) {
            Ok(p) => p,
            Err(e) => panic!("RelativePath::new({:?}): {}", path, e),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }

        let mut normal = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => normal.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(DomainError::PathEscapesRoot {
                        path: path.display().to_string(),
                    });
                }
                Component::Prefix(_) | Component::RootDir => {
                    return Err(DomainError::AbsolutePathNotAllowed {
                        path: path.display().to_string(),
                    });
                }
            }
        }

        if normal.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }
        Ok(Self(normal))
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        if segment.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: segment.display().to_string(),
            });
        }
        Self::try_new(self.0.join(segment))
    }

    /// Number of path components; a direct child of the root has depth 1.
    pub fn depth(&self) -> usize {
        self.0.components().count()
    }

    /// Whether any component looks hidden (leading `.`).
    pub fn has_hidden_component(&self) -> bool {
        self.0
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Capability-based permissions model.
///
/// Storage backends translate this to whatever the medium understands; on
/// unix the local backend applies [`Permissions::unix_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permissions {
    readable: bool,
    writable: bool,
    executable: bool,
}

impl Permissions {
    pub const fn read_only() -> Self {
        Self {
            readable: true,
            writable: false,
            executable: false,
        }
    }

    pub const fn read_write() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: false,
        }
    }

    pub const fn executable() -> Self {
        Self {
            readable: true,
            writable: false,
            executable: true,
        }
    }

    pub const fn full() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: true,
        }
    }

    /// Permissions for generated directories (traversable).
    pub const fn directory() -> Self {
        Self::full()
    }

    pub const fn writable(&self) -> bool {
        self.writable
    }

    /// Owner gets every granted bit; group and others never get write.
    pub const fn unix_mode(&self) -> u32 {
        let mut owner = 0;
        let mut rest = 0;
        if self.readable {
            owner |= 0o4;
            rest |= 0o4;
        }
        if self.writable {
            owner |= 0o2;
        }
        if self.executable {
            owner |= 0o1;
            rest |= 0o1;
        }
        (owner << 6) | (rest << 3) | rest
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn relative_path_rejects_parent_escape() {
        assert!(matches!(
            RelativePath::try_new("../outside.md"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(RelativePath::try_new("a/../../b").is_err());
    }

    #[test]
    fn relative_path_rejects_empty() {
        assert_eq!(RelativePath::try_new(""), Err(DomainError::EmptyPath));
        assert_eq!(RelativePath::try_new("./"), Err(DomainError::EmptyPath));
    }

    #[test]
    fn relative_path_drops_cur_dir_components() {
        let p = RelativePath::try_new("./.github/./agents").unwrap();
        assert_eq!(p.as_path(), Path::new(".github/agents"));
        assert_eq!(p.depth(), 2);
        assert!(p.has_hidden_component());
    }

    #[test]
    fn relative_path_join_keeps_invariant() {
        let base = RelativePath::new("src");
        assert_eq!(
            base.join("AGENT.md").unwrap().as_path(),
            Path::new("src/AGENT.md")
        );
        assert!(base.join("/abs").is_err());
    }

    #[test]
    #[should_panic]
    fn relative_path_new_panics_on_absolute() {
        RelativePath::new("/abs");
    }

    #[test]
    fn permission_modes() {
        assert_eq!(Permissions::read_write().unix_mode(), 0o644);
        assert_eq!(Permissions::directory().unix_mode(), 0o755);
        assert_eq!(Permissions::read_only().unix_mode(), 0o444);
        assert_eq!(Permissions::executable().unix_mode(), 0o555);
        assert_eq!(Permissions::default(), Permissions::read_write());
    }
}
