/// Top-N rankings — largest files and largest directories.
///
/// Rankings are computed per render from the snapshot's entries and borrow
/// from them; nothing is cached between scans.
use crate::model::Entry;

/// Row count of both ranking tables.
pub const RANKING_LIMIT: usize = 10;

/// The `n` largest entries matching `predicate`, biggest first.
///
/// Equal sizes keep their order in `entries`.
pub fn top_n<'a, P>(entries: &'a [Entry], predicate: P, n: usize) -> Vec<&'a Entry>
where
    P: Fn(&Entry) -> bool,
{
    if n == 0 {
        return Vec::new();
    }
    let mut picked: Vec<&Entry> = entries.iter().filter(|e| predicate(e)).collect();
    picked.sort_by(|a, b| b.size.cmp(&a.size));
    picked.truncate(n);
    picked
}

pub fn largest_files(entries: &[Entry]) -> Vec<&Entry> {
    top_n(entries, |e| !e.is_dir, RANKING_LIMIT)
}

pub fn largest_dirs(entries: &[Entry]) -> Vec<&Entry> {
    top_n(entries, |e| e.is_dir, RANKING_LIMIT)
}
