/// Magnitude (bar) and share (donut) charts over the folded type list.
use super::palette::{Palette, Rgb, ThemeMode};
use crate::analysis::TypeStat;
use crate::model::format::percent_of;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub size: u64,
    pub file_count: u64,
    /// Share of the charted total, in percent.
    pub share: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartsView {
    NoData,
    Ready {
        slices: Vec<ChartSlice>,
        /// Largest slice, the full length of the magnitude axis.
        max_size: u64,
        total_size: u64,
    },
}

impl ChartsView {
    pub fn build(folded: &[TypeStat], palette: Palette, theme: ThemeMode) -> Self {
        let total_size: u64 = folded.iter().map(|s| s.total_size).sum();
        if total_size == 0 {
            return Self::NoData;
        }
        let slices: Vec<ChartSlice> = folded
            .iter()
            .enumerate()
            .map(|(index, stat)| ChartSlice {
                label: stat.extension.to_string(),
                size: stat.total_size,
                file_count: stat.file_count,
                share: percent_of(stat.total_size, total_size),
                color: palette.color(theme, index),
            })
            .collect();
        let max_size = slices.iter().map(|s| s.size).max().unwrap_or(0);
        Self::Ready {
            slices,
            max_size,
            total_size,
        }
    }

    pub fn slices(&self) -> &[ChartSlice] {
        match self {
            Self::NoData => &[],
            Self::Ready { slices, .. } => slices,
        }
    }
}
