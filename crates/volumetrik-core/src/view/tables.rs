/// Table view models — the two ranking tables and the file browser.
use crate::analysis::{largest_dirs, largest_files, SortState};
use crate::model::format::{format_count, format_date, format_percent, format_size, percent_of};
use crate::model::{Entry, Snapshot};

/// One row of a ranking table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    pub size: u64,
    pub size_text: String,
}

impl From<&Entry> for RankingRow {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.clone(),
            is_dir: entry.is_dir,
            size: entry.size,
            size_text: format_size(entry.size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankingView {
    /// Target of the "parent directory" row, shown above the ranking.
    pub parent: Option<String>,
    pub rows: Vec<RankingRow>,
}

impl RankingView {
    pub fn largest_files(snapshot: Option<&Snapshot>) -> Self {
        Self::build(snapshot, largest_files)
    }

    pub fn largest_dirs(snapshot: Option<&Snapshot>) -> Self {
        Self::build(snapshot, largest_dirs)
    }

    fn build(snapshot: Option<&Snapshot>, rank: fn(&[Entry]) -> Vec<&Entry>) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::default();
        };
        Self {
            parent: snapshot.parent_path.clone(),
            rows: rank(&snapshot.entries).into_iter().map(RankingRow::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_none() && self.rows.is_empty()
    }
}

/// One row of the file browser table.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRow {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    pub size: u64,
    pub size_text: String,
    pub percent: f64,
    pub percent_text: String,
    /// Only directories show a file count.
    pub file_count: Option<u64>,
    pub file_count_text: String,
    pub modified: u64,
    pub modified_text: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileTableView {
    pub parent: Option<String>,
    /// In the order of the held snapshot, which the sort engine has already
    /// arranged.
    pub rows: Vec<FileRow>,
    pub total_size: u64,
    pub sort: SortState,
}

impl FileTableView {
    pub fn build(snapshot: Option<&Snapshot>, sort: SortState) -> Self {
        let Some(snapshot) = snapshot else {
            return Self {
                sort,
                ..Self::default()
            };
        };
        let total_size = snapshot.total_size();
        let rows = snapshot
            .entries
            .iter()
            .map(|entry| {
                let percent = percent_of(entry.size, total_size);
                let file_count = entry.is_dir.then_some(entry.file_count);
                FileRow {
                    name: entry.name.clone(),
                    path: entry.path.clone(),
                    is_dir: entry.is_dir,
                    size: entry.size,
                    size_text: format_size(entry.size),
                    percent,
                    percent_text: format_percent(percent),
                    file_count,
                    file_count_text: file_count.map_or_else(|| "-".to_string(), format_count),
                    modified: entry.modified,
                    modified_text: format_date(entry.modified),
                }
            })
            .collect();
        Self {
            parent: snapshot.parent_path.clone(),
            rows,
            total_size,
            sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            current_path: "/data".into(),
            parent_path: Some("/".into()),
            entries: vec![
                Entry::file("a.txt", "/data/a.txt", 100, 1_700_000_000),
                Entry::file("b.log", "/data/b.log", 50, 0),
                Entry::dir("sub", "/data/sub", 50, 2, 0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn file_rows_carry_percent_and_dir_only_counts() {
        let view = FileTableView::build(Some(&snapshot()), SortState::default());
        assert_eq!(view.parent.as_deref(), Some("/"));
        assert_eq!(view.total_size, 200);
        assert_eq!(view.rows[0].percent, 50.0);
        assert_eq!(view.rows[0].percent_text, "50.0%");
        assert_eq!(view.rows[0].file_count, None);
        assert_eq!(view.rows[0].file_count_text, "-");
        assert_eq!(view.rows[2].file_count, Some(2));
    }

    #[test]
    fn rankings_split_files_and_dirs_with_parent_row() {
        let snap = snapshot();
        let files = RankingView::largest_files(Some(&snap));
        let dirs = RankingView::largest_dirs(Some(&snap));
        assert_eq!(files.rows.len(), 2);
        assert_eq!(files.rows[0].name, "a.txt");
        assert_eq!(dirs.rows.len(), 1);
        assert_eq!(dirs.parent.as_deref(), Some("/"));
    }

    #[test]
    fn root_snapshot_has_no_parent_row() {
        let mut snap = snapshot();
        snap.parent_path = None;
        assert_eq!(RankingView::largest_dirs(Some(&snap)).parent, None);
        assert_eq!(FileTableView::build(Some(&snap), SortState::default()).parent, None);
    }

    #[test]
    fn no_snapshot_renders_empty_tables() {
        assert!(RankingView::largest_files(None).is_empty());
        assert!(FileTableView::build(None, SortState::default()).rows.is_empty());
    }

    #[test]
    fn empty_directory_has_zero_percent_rows() {
        let snap = Snapshot {
            current_path: "/empty".into(),
            entries: vec![Entry::dir("void", "/empty/void", 0, 0, 0)],
            ..Default::default()
        };
        let view = FileTableView::build(Some(&snap), SortState::default());
        assert_eq!(view.rows[0].percent, 0.0);
    }
}
