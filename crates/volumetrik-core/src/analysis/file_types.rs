/// File type statistics grouped by extension.
///
/// Directories never contribute: a directory's size is already the sum of
/// the files below it, and the scan only exposes one level, so counting
/// both would double-count.
use crate::model::Entry;
use compact_str::CompactString;
use std::collections::HashMap;

/// Bucket for files without a usable extension, and for folded remainders.
pub const OTHER_BUCKET: &str = "other";

/// Size and count totals for one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStat {
    pub extension: CompactString,
    pub total_size: u64,
    pub file_count: u64,
}

impl TypeStat {
    pub fn is_other(&self) -> bool {
        self.extension == OTHER_BUCKET
    }
}

/// Lower-cased suffix after the last `.` of `name`, or [`OTHER_BUCKET`]
/// when there is no dot or the suffix is empty (`"archive."`).
///
/// Dotfiles keep their suffix: `.bashrc` groups under `bashrc`.
pub fn extension_of(name: &str) -> CompactString {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => CompactString::from(ext.to_lowercase()),
        _ => CompactString::const_new(OTHER_BUCKET),
    }
}

/// Group every non-directory entry by extension.
///
/// The result is the full, uncapped list ordered by `total_size`
/// descending; equal sizes keep the order in which their extension was
/// first encountered.
pub fn aggregate(entries: &[Entry]) -> Vec<TypeStat> {
    let mut stats: Vec<TypeStat> = Vec::new();
    let mut index: HashMap<CompactString, usize> = HashMap::new();

    for entry in entries.iter().filter(|e| !e.is_dir) {
        let ext = extension_of(&entry.name);
        let slot = *index.entry(ext.clone()).or_insert_with(|| {
            stats.push(TypeStat {
                extension: ext,
                total_size: 0,
                file_count: 0,
            });
            stats.len() - 1
        });
        stats[slot].total_size += entry.size;
        stats[slot].file_count += 1;
    }

    // `sort_by` is stable, which gives the first-encountered tie-break.
    stats.sort_by(|a, b| b.total_size.cmp(&a.total_size));
    stats
}

/// Keep the first `n` stats and fold the remainder into the `other` bucket.
///
/// If `other` is already among the first `n` the remainder is merged into
/// it in place; otherwise a synthesized `other` row is appended. Nothing is
/// appended when the remainder is empty or weighs zero bytes.
pub fn fold_top(stats: &[TypeStat], n: usize) -> Vec<TypeStat> {
    let split = n.min(stats.len());
    let (head, tail) = stats.split_at(split);
    let mut folded = head.to_vec();

    let rest_size: u64 = tail.iter().map(|s| s.total_size).sum();
    let rest_count: u64 = tail.iter().map(|s| s.file_count).sum();
    if rest_size == 0 {
        return folded;
    }

    if let Some(other) = folded.iter_mut().find(|s| s.is_other()) {
        other.total_size += rest_size;
        other.file_count += rest_count;
    } else {
        folded.push(TypeStat {
            extension: CompactString::const_new(OTHER_BUCKET),
            total_size: rest_size,
            file_count: rest_count,
        });
    }
    folded
}
