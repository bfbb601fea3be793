//! Output ownership.
//!
//! Every generator declares the slice of the target tree it writes into.
//! Two generators in one project type must never be able to produce the same
//! relative path, so their namespaces are checked for overlap up front.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::domain::common::RelativePath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputNamespace {
    /// Exactly one file.
    File(RelativePath),
    /// Anything below a directory.
    Directory(RelativePath),
    /// A fixed file name inside scanned directories (never the root itself,
    /// never under a hidden directory).
    PerDirectory { file_name: String },
}

impl OutputNamespace {
    pub fn file(path: &str) -> Self {
        Self::File(RelativePath::new(path))
    }

    pub fn directory(path: &str) -> Self {
        Self::Directory(RelativePath::new(path))
    }

    pub fn per_directory(file_name: impl Into<String>) -> Self {
        Self::PerDirectory {
            file_name: file_name.into(),
        }
    }

    /// Whether `path` falls inside this namespace.
    pub fn contains(&self, path: &RelativePath) -> bool {
        match self {
            Self::File(own) => own == path,
            Self::Directory(dir) => path.as_path().starts_with(dir.as_path()) && path != dir,
            Self::PerDirectory { file_name } => per_directory_match(file_name, path),
        }
    }

    /// Whether some path could belong to both namespaces.
    pub fn overlaps(&self, other: &Self) -> bool {
        use OutputNamespace::*;
        match (self, other) {
            (File(a), File(b)) => a == b,
            (File(f), Directory(d)) | (Directory(d), File(f)) => {
                f.as_path().starts_with(d.as_path())
            }
            (Directory(a), Directory(b)) => {
                a.as_path().starts_with(b.as_path()) || b.as_path().starts_with(a.as_path())
            }
            (PerDirectory { file_name }, File(f)) | (File(f), PerDirectory { file_name }) => {
                per_directory_match(file_name, f)
            }
            (PerDirectory { .. }, Directory(d)) | (Directory(d), PerDirectory { .. }) => {
                !d.has_hidden_component()
            }
            (PerDirectory { file_name: a }, PerDirectory { file_name: b }) => a == b,
        }
    }
}

fn per_directory_match(file_name: &str, path: &RelativePath) -> bool {
    let p = path.as_path();
    let parent_ok = p.parent().is_some_and(|parent| parent != Path::new(""));
    p.file_name() == Some(OsStr::new(file_name)) && parent_ok && !path.has_hidden_component()
}

impl fmt::Display for OutputNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "file {}", p),
            Self::Directory(p) => write!(f, "dir {}/", p),
            Self::PerDirectory { file_name } => write!(f, "*/{}", file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rp(s: &str) -> RelativePath {
        RelativePath::new(s)
    }

    #[test]
    fn file_contains_only_itself() {
        let ns = OutputNamespace::file("AGENTS.md");
        assert!(ns.contains(&rp("AGENTS.md")));
        assert!(!ns.contains(&rp("src/AGENTS.md")));
    }

    #[test]
    fn directory_contains_descendants() {
        let ns = OutputNamespace::directory(".github/agents");
        assert!(ns.contains(&rp(".github/agents/architect.agent.md")));
        assert!(!ns.contains(&rp(".github/agents")));
        assert!(!ns.contains(&rp(".github/agents-extra/x.md")));
    }

    #[test]
    fn per_directory_excludes_root_and_hidden() {
        let ns = OutputNamespace::per_directory("AGENT.md");
        assert!(ns.contains(&rp("src/AGENT.md")));
        assert!(ns.contains(&rp("src/api/AGENT.md")));
        assert!(!ns.contains(&rp("AGENT.md")));
        assert!(!ns.contains(&rp(".github/AGENT.md")));
        assert!(!ns.contains(&rp("src/README.md")));
    }

    #[test]
    fn overlap_rules() {
        let copilot = OutputNamespace::file(".github/copilot-instructions.md");
        let agents = OutputNamespace::directory(".github/agents");
        let github = OutputNamespace::directory(".github");
        let root_md = OutputNamespace::file("AGENTS.md");
        let per_dir = OutputNamespace::per_directory("AGENT.md");

        assert!(!copilot.overlaps(&agents));
        assert!(copilot.overlaps(&github));
        assert!(agents.overlaps(&github));
        assert!(!per_dir.overlaps(&root_md));
        assert!(!per_dir.overlaps(&agents));
        assert!(per_dir.overlaps(&OutputNamespace::directory("docs")));
        assert!(per_dir.overlaps(&OutputNamespace::file("src/AGENT.md")));
        assert!(per_dir.overlaps(&per_dir.clone()));
    }
}
