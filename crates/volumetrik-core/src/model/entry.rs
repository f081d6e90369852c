/// Entries and snapshots — the result of scanning one directory level.
///
/// A [`Snapshot`] describes the scanned directory and its immediate
/// children. Directory entries carry the recursive size and file count of
/// everything beneath them, so a snapshot is enough to render every
/// dashboard widget without a second request.
use serde::{Deserialize, Serialize};

/// One file or directory inside the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// File name, unique within one snapshot.
    pub name: String,
    /// Absolute path, used for navigation.
    pub path: String,
    pub is_dir: bool,
    /// Bytes. Directories carry the recursive total.
    pub size: u64,
    /// Descendant file count for directories; `1` for plain files.
    pub file_count: u64,
    /// Last modification, Unix seconds.
    pub modified: u64,
}

impl Entry {
    pub fn file(name: impl Into<String>, path: impl Into<String>, size: u64, modified: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir: false,
            size,
            file_count: 1,
            modified,
        }
    }

    pub fn dir(
        name: impl Into<String>,
        path: impl Into<String>,
        size: u64,
        file_count: u64,
        modified: u64,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir: true,
            size,
            file_count,
            modified,
        }
    }
}

/// The atomic result of one successful scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub current_path: String,
    /// `None` only at a filesystem root.
    pub parent_path: Option<String>,
    pub entries: Vec<Entry>,
    pub disk_total: Option<u64>,
    pub disk_available: Option<u64>,
}

impl Snapshot {
    /// Sum of all entry sizes: the denominator for every percentage shown.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    /// Number of files below this directory (directories contribute their
    /// recursive count).
    pub fn total_files(&self) -> u64 {
        self.entries.iter().map(|e| e.file_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Directory-only listing used by the folder picker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrowseListing {
    pub current: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub directories: Vec<String>,
}

impl BrowseListing {
    /// Full path of the child directory `name` of the listed directory.
    pub fn child_path(&self, name: &str) -> String {
        join_path(&self.current, name)
    }
}

/// Join a directory name onto a base path, keeping the base's separator
/// style (`\` for Windows-looking paths, `/` otherwise).
pub fn join_path(base: &str, part: &str) -> String {
    if base.ends_with('/') || base.ends_with('\\') {
        return format!("{base}{part}");
    }
    let separator = if base.contains('\\') { '\\' } else { '/' };
    format!("{base}{separator}{part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_size_sums_files_and_directories() {
        let snapshot = Snapshot {
            current_path: "/data".into(),
            entries: vec![
                Entry::file("a.txt", "/data/a.txt", 100, 0),
                Entry::dir("sub", "/data/sub", 30, 2, 0),
            ],
            ..Default::default()
        };
        assert_eq!(snapshot.total_size(), 130);
        assert_eq!(snapshot.total_files(), 3);
    }

    #[test]
    fn join_path_respects_trailing_separator() {
        assert_eq!(join_path("/", "home"), "/home");
        assert_eq!(join_path("/home", "user"), "/home/user");
        assert_eq!(join_path("C:\\", "Users"), "C:\\Users");
        assert_eq!(join_path("C:\\Users", "me"), "C:\\Users\\me");
    }

    #[test]
    fn browse_listing_child_path() {
        let listing = BrowseListing {
            current: "/srv".into(),
            parent: Some("/".into()),
            directories: vec!["www".into()],
        };
        assert_eq!(listing.child_path("www"), "/srv/www");
    }
}
