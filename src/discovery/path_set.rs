//! Ordered, de-duplicated search paths.
//!
//! A `PathSet` is built from a colon-separated string (as found in `PATH`)
//! or from a list of entries. First-seen order is kept; later duplicates and
//! empty entries are dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Ordered collection of unique path strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PathSetSource", into = "String")]
pub struct PathSet {
    entries: Vec<String>,
}

/// Accepted config shapes: `"a:b:c"` or `[a, b, c]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PathSetSource {
    Joined(String),
    List(Vec<String>),
}

impl From<PathSetSource> for PathSet {
    fn from(source: PathSetSource) -> Self {
        match source {
            PathSetSource::Joined(s) => Self::from_joined(&s),
            PathSetSource::List(v) => v.into_iter().collect(),
        }
    }
}

impl PathSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a `:`-separated string.
    pub fn from_joined(joined: &str) -> Self {
        joined.split(':').collect()
    }

    /// Whether `path` is one of the entries, compared as a string.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e == path)
    }

    /// Append an entry unless it is empty or already present.
    ///
    /// Returns true if the entry was added.
    pub fn push(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path.is_empty() || self.contains(&path) {
            return false;
        }
        self.entries.push(path);
        true
    }

    /// Append every entry of `other`, keeping this set's order first.
    pub fn extend_from(&mut self, other: &PathSet) {
        for entry in other.iter() {
            self.push(entry);
        }
    }

    /// Delete an entry. Returns true if it was present.
    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != path);
        before != self.entries.len()
    }

    /// Copy with every entry made absolute and symlink-normalized.
    ///
    /// Entries that exist are canonicalized; the rest are made absolute
    /// lexically against the current directory.
    pub fn expanded(&self) -> PathSet {
        self.entries
            .iter()
            .map(|e| expand_entry(Path::new(e)))
            .collect()
    }

    /// Iterate over the entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// First entry, if any.
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn expand_entry(path: &Path) -> String {
    let expanded = std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| PathBuf::from(path));
    expanded.to_string_lossy().into_owned()
}

impl<S: Into<String>> FromIterator<S> for PathSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PathSet::new();
        for entry in iter {
            set.push(entry);
        }
        set
    }
}

impl From<Vec<String>> for PathSet {
    fn from(entries: Vec<String>) -> Self {
        entries.into_iter().collect()
    }
}

impl FromStr for PathSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_joined(s))
    }
}

impl fmt::Display for PathSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join(":"))
    }
}

impl From<PathSet> for String {
    fn from(set: PathSet) -> Self {
        set.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn splits_and_dedupes_preserving_order() {
        let set = PathSet::from_joined("/usr/lib:/opt/lib:/usr/lib:/sw/lib");
        let entries: Vec<_> = set.iter().collect();
        assert_eq!(entries, vec!["/usr/lib", "/opt/lib", "/sw/lib"]);
    }

    #[test]
    fn empty_string_yields_empty_set() {
        let set = PathSet::from_joined("");
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "");
    }

    #[test]
    fn empty_entries_are_dropped() {
        let set = PathSet::from_joined(":/a::/b:");
        assert_eq!(set.len(), 2);
        assert!(!set.contains(""));
    }

    #[test]
    fn contains_matches_exact_strings_only() {
        let set = PathSet::from_joined("/usr/local/lib:/opt/lib");
        assert!(set.contains("/usr/local/lib"));
        assert!(!set.contains("/usr/local/lib/"));
        assert!(!set.contains("/usr/local"));
    }

    #[test]
    fn remove_deletes_entry() {
        let mut set = PathSet::from_joined("/a:/b:/c");
        assert!(set.remove("/b"));
        assert!(!set.remove("/b"));
        assert_eq!(set.to_string(), "/a:/c");
    }

    #[test]
    fn serialize_joins_with_colon() {
        let set: PathSet = vec!["/x".to_string(), "/y".to_string()].into();
        assert_eq!(set.to_string(), "/x:/y");
    }

    #[test]
    fn parse_from_str() {
        let set: PathSet = "/one:/two".parse().unwrap();
        assert_eq!(set.first(), Some("/one"));
    }

    #[test]
    fn extend_from_skips_duplicates() {
        let mut set = PathSet::from_joined("/a:/b");
        set.extend_from(&PathSet::from_joined("/b:/c"));
        assert_eq!(set.to_string(), "/a:/b:/c");
    }

    #[cfg(unix)]
    #[test]
    fn expanded_resolves_symlinks_and_leaves_original() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real");
        std::fs::create_dir(&real).unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let original = PathSet::from_iter([link.to_string_lossy().into_owned()]);
        let expanded = original.expanded();

        let canonical = std::fs::canonicalize(&real).unwrap();
        assert_eq!(expanded.first(), Some(canonical.to_str().unwrap()));
        assert_eq!(original.first(), Some(link.to_str().unwrap()));
    }

    #[test]
    fn expanded_makes_relative_entries_absolute() {
        let set = PathSet::from_joined("does-not-exist/lib");
        let expanded = set.expanded();
        assert!(Path::new(expanded.first().unwrap()).is_absolute());
    }

    #[test]
    fn deserializes_from_string_or_list() {
        let joined: PathSet = serde_yaml::from_str("\"/a:/b:/a\"").unwrap();
        assert_eq!(joined.to_string(), "/a:/b");

        let list: PathSet = serde_yaml::from_str("[/a, /b, /b]").unwrap();
        assert_eq!(list.to_string(), "/a:/b");
    }

    #[test]
    fn serializes_as_joined_string() {
        let set = PathSet::from_joined("/a:/b");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "\"/a:/b\"");
    }
}
