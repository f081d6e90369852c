/// Analysis modules — pure transforms over a snapshot's entries.

pub mod file_types;
pub mod sort;
pub mod top_files;

pub use file_types::{aggregate, extension_of, fold_top, TypeStat, OTHER_BUCKET};
pub use sort::{sort_entries, SortColumn, SortDirection, SortState};
pub use top_files::{largest_dirs, largest_files, top_n, RANKING_LIMIT};
