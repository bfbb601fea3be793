/// Directory names never scanned: dependency, build output, VCS, cache and
/// IDE directories.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    ".next",
    ".nuxt",
    "obj",
    "bin",
    "dist",
    "build",
    "out",
    "target",
    "output",
    "vendor",
    "__pycache__",
    ".venv",
    "venv",
    "env",
    ".eggs",
    "*.egg-info",
    ".pytest_cache",
    ".gradle",
    ".mvn",
    ".idea",
    ".vscode",
    ".git",
    "coverage",
    ".nyc_output",
    "tmp",
    "temp",
    "logs",
];

/// Set of directory names the scanner refuses to enter.
///
/// An entry starting with `*` matches any name ending with the rest of the
/// entry; everything else is an exact name match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipList {
    exact: Vec<String>,
    suffixes: Vec<String>,
}

impl SkipList {
    pub fn empty() -> Self {
        Self {
            exact: Vec::new(),
            suffixes: Vec::new(),
        }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::empty().with_extra(names)
    }

    /// Append additional names, ignoring blanks and duplicates.
    pub fn with_extra<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let (bucket, value) = match name.strip_prefix('*') {
                Some(suffix) if !suffix.is_empty() => (&mut self.suffixes, suffix),
                Some(_) => continue,
                None => (&mut self.exact, name),
            };
            if !bucket.iter().any(|v| v == value) {
                bucket.push(value.to_string());
            }
        }
        self
    }

    pub fn matches(&self, dir_name: &str) -> bool {
        self.exact.iter().any(|e| e == dir_name)
            || self.suffixes.iter().any(|s| dir_name.ends_with(s.as_str()))
    }

    /// Entries in their configured spelling.
    pub fn entries(&self) -> impl Iterator<Item = String> + '_ {
        self.exact
            .iter()
            .cloned()
            .chain(self.suffixes.iter().map(|s| format!("*{}", s)))
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SkipList {
    fn default() -> Self {
        Self::from_names(DEFAULT_SKIP_DIRS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_matches_common_dirs() {
        let skip = SkipList::default();
        for name in ["node_modules", "target", ".git", "__pycache__", "logs"] {
            assert!(skip.matches(name), "{name}");
        }
        assert!(!skip.matches("src"));
        assert!(!skip.matches("node_modules2"));
        assert_eq!(skip.len(), DEFAULT_SKIP_DIRS.len());
    }

    #[test]
    fn star_entries_match_suffix() {
        let skip = SkipList::default();
        assert!(skip.matches("proser.egg-info"));
        assert!(!skip.matches("egg-info-notes"));
    }

    #[test]
    fn with_extra_dedups_and_ignores_blank() {
        let skip = SkipList::default().with_extra(["generated", "target", " ", "*"]);
        assert!(skip.matches("generated"));
        assert_eq!(skip.len(), DEFAULT_SKIP_DIRS.len() + 1);
    }
}
