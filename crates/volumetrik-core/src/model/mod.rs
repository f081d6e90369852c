/// Data model for one directory snapshot.
///
/// Re-exports the snapshot types and the display formatting helpers.
pub mod entry;
pub mod format;

pub use entry::{join_path, BrowseListing, Entry, Snapshot};
