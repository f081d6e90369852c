/// Sort engine for the file browser table.
///
/// The sort state belongs to the user, not to the data: it survives
/// navigation and is re-applied to every new snapshot.
use crate::model::Entry;
use std::cmp::Ordering;

/// Sortable columns of the file table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Size,
    /// Displayed as a share of the total but ordered by raw size.
    Percent,
    Files,
    Modified,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Name,
        SortColumn::Size,
        SortColumn::Percent,
        SortColumn::Files,
        SortColumn::Modified,
    ];

    /// Names A→Z, everything numeric biggest-first.
    pub fn default_direction(self) -> SortDirection {
        match self {
            Self::Name => SortDirection::Asc,
            Self::Size | Self::Percent | Self::Files | Self::Modified => SortDirection::Desc,
        }
    }

    /// Ascending comparison for this column.
    fn compare(self, a: &Entry, b: &Entry) -> Ordering {
        match self {
            Self::Name => cmp_ignore_case(&a.name, &b.name),
            Self::Size | Self::Percent => a.size.cmp(&b.size),
            Self::Files => a.file_count.cmp(&b.file_count),
            Self::Modified => a.modified.cmp(&b.modified),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Size,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Header click: the active column flips, a new column starts from its
    /// natural direction.
    pub fn select(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = column.default_direction();
        }
    }

    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        self.direction.apply(self.column.compare(a, b))
    }
}

/// Stable in-place sort of `entries` by `state`.
pub fn sort_entries(entries: &mut [Entry], state: SortState) {
    entries.sort_by(|a, b| state.compare(a, b));
}

/// Case-insensitive comparison without allocating lower-cased copies.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::file("a.txt", "/a.txt", 100, 30),
            Entry::file("b.log", "/b.log", 50, 10),
            Entry::dir("sub", "/sub", 30, 2, 20),
        ]
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn size_desc_orders_biggest_first() {
        let mut entries = sample();
        sort_entries(&mut entries, SortState::new(SortColumn::Size, SortDirection::Desc));
        assert_eq!(names(&entries), vec!["a.txt", "b.log", "sub"]);
    }

    /// `percent` keys on size, so both columns must produce the same order.
    #[test]
    fn percent_sorts_identically_to_size() {
        let mut by_size = sample();
        let mut by_percent = sample();
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            sort_entries(&mut by_size, SortState::new(SortColumn::Size, direction));
            sort_entries(&mut by_percent, SortState::new(SortColumn::Percent, direction));
            assert_eq!(names(&by_size), names(&by_percent));
        }
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let mut entries = vec![
            Entry::file("beta", "/beta", 1, 0),
            Entry::file("Alpha", "/Alpha", 1, 0),
            Entry::file("alpha2", "/alpha2", 1, 0),
        ];
        sort_entries(&mut entries, SortState::new(SortColumn::Name, SortDirection::Asc));
        assert_eq!(names(&entries), vec!["Alpha", "alpha2", "beta"]);
    }

    #[test]
    fn files_and_modified_columns() {
        let mut entries = sample();
        sort_entries(&mut entries, SortState::new(SortColumn::Files, SortDirection::Desc));
        assert_eq!(entries[0].name, "sub");
        sort_entries(&mut entries, SortState::new(SortColumn::Modified, SortDirection::Asc));
        assert_eq!(names(&entries), vec!["b.log", "sub", "a.txt"]);
    }

    /// Elements comparing equal retain their relative input order.
    #[test]
    fn sort_is_stable_for_every_state() {
        let base: Vec<Entry> = (0..12u64)
            .map(|i| Entry::file(format!("f{i:02}"), format!("/f{i:02}"), i % 3, i % 2))
            .collect();
        for column in SortColumn::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let state = SortState::new(column, direction);
                let mut sorted = base.clone();
                sort_entries(&mut sorted, state);
                for pair in sorted.windows(2) {
                    if state.compare(&pair[0], &pair[1]) == Ordering::Equal {
                        let i = base.iter().position(|e| e.name == pair[0].name).unwrap();
                        let j = base.iter().position(|e| e.name == pair[1].name).unwrap();
                        assert!(i < j, "{column:?}/{direction:?} broke stability");
                    }
                }
            }
        }
    }

    /// Flipping the direction twice lands back on the original order.
    #[test]
    fn toggling_twice_restores_order() {
        let mut entries: Vec<Entry> = (0..8u64)
            .map(|i| Entry::file(format!("f{i}"), format!("/f{i}"), (i * 7) % 4, 0))
            .collect();
        let mut state = SortState::new(SortColumn::Size, SortDirection::Desc);
        sort_entries(&mut entries, state);
        let first = names(&entries).join(",");

        state.select(SortColumn::Size);
        sort_entries(&mut entries, state);
        state.select(SortColumn::Size);
        sort_entries(&mut entries, state);

        assert_eq!(state.direction, SortDirection::Desc);
        assert_eq!(names(&entries).join(","), first);
    }

    #[test]
    fn selecting_new_column_resets_direction() {
        let mut state = SortState::default();
        state.select(SortColumn::Name);
        assert_eq!(state, SortState::new(SortColumn::Name, SortDirection::Asc));
        state.select(SortColumn::Name);
        assert_eq!(state.direction, SortDirection::Desc);
        state.select(SortColumn::Modified);
        assert_eq!(state, SortState::new(SortColumn::Modified, SortDirection::Desc));
    }
}
