/// File-type usage bar and its legend.
///
/// Segments are the top types plus a folded `other` row, each sized as a
/// share of the snapshot's total size. Slivers under
/// [`MIN_VISIBLE_PERCENT`] are left out of the bar and the legend, but their
/// bytes still count toward the total, so the visible segments may add up
/// to less than 100%.
use super::palette::{Palette, Rgb, ThemeMode};
use crate::analysis::TypeStat;
use crate::model::format::percent_of;

/// Smallest share, in percent, that still gets a segment.
pub const MIN_VISIBLE_PERCENT: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSegment {
    pub extension: String,
    pub size: u64,
    pub file_count: u64,
    pub percent: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeUsageView {
    NoData,
    Bar {
        /// Also the legend, one entry per segment.
        segments: Vec<TypeSegment>,
        total_size: u64,
    },
}

impl TypeUsageView {
    /// Build from the already folded type list.
    ///
    /// Colours follow the position in `folded`, so a type keeps its colour
    /// even when a sliver before it is hidden.
    pub fn build(folded: &[TypeStat], total_size: u64, palette: Palette, theme: ThemeMode) -> Self {
        if folded.is_empty() || total_size == 0 {
            return Self::NoData;
        }
        let segments: Vec<TypeSegment> = folded
            .iter()
            .enumerate()
            .map(|(index, stat)| TypeSegment {
                extension: stat.extension.to_string(),
                size: stat.total_size,
                file_count: stat.file_count,
                percent: percent_of(stat.total_size, total_size),
                color: palette.color(theme, index),
            })
            .filter(|segment| segment.percent >= MIN_VISIBLE_PERCENT)
            .collect();

        if segments.is_empty() {
            Self::NoData
        } else {
            Self::Bar {
                segments,
                total_size,
            }
        }
    }

    pub fn segments(&self) -> &[TypeSegment] {
        match self {
            Self::NoData => &[],
            Self::Bar { segments, .. } => segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{aggregate, fold_top};
    use crate::model::Entry;

    fn files(sizes: &[(&str, u64)]) -> Vec<Entry> {
        sizes
            .iter()
            .map(|(name, size)| Entry::file(*name, format!("/{name}"), *size, 0))
            .collect()
    }

    fn build(entries: &[Entry], total: u64) -> TypeUsageView {
        let folded = fold_top(&aggregate(entries), 5);
        TypeUsageView::build(&folded, total, Palette::Default, ThemeMode::Dark)
    }

    #[test]
    fn slivers_are_dropped_but_counted() {
        let entries = files(&[("a.iso", 9_990), ("b.txt", 10)]);
        let view = build(&entries, 10_000);
        let segments = view.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].extension, "iso");
        assert!((segments[0].percent - 99.9).abs() < 1e-9);
        assert!(matches!(view, TypeUsageView::Bar { total_size: 10_000, .. }));
    }

    #[test]
    fn colours_follow_folded_position() {
        let entries = files(&[("a.iso", 5_000), ("b.txt", 1), ("c.log", 4_999)]);
        let view = build(&entries, 10_000);
        let segments = view.segments();
        // Folded order: iso, log, txt. The hidden txt sliver keeps slot 2.
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].extension, "log");
        assert_eq!(segments[1].color, Palette::Default.color(ThemeMode::Dark, 1));
    }

    #[test]
    fn empty_or_zero_sized_input_is_no_data() {
        assert_eq!(build(&[], 0), TypeUsageView::NoData);
        assert_eq!(build(&files(&[("a.txt", 0)]), 0), TypeUsageView::NoData);
    }

    #[test]
    fn directories_only_is_no_data() {
        // Type stats skip directories, so nothing is left to draw even
        // though the snapshot has a non-zero total.
        let entries = vec![Entry::dir("sub", "/sub", 500, 3, 0)];
        assert_eq!(build(&entries, 500), TypeUsageView::NoData);
    }

    #[test]
    fn percent_is_relative_to_snapshot_total() {
        let entries = files(&[("a.txt", 50)]);
        let view = build(&entries, 200);
        assert_eq!(view.segments()[0].percent, 25.0);
    }
}
