/// View coordinator — fans one snapshot out to every dashboard widget.
///
/// A render pass borrows the snapshot, aggregates it once, and returns
/// freshly built view models; nothing derived is kept between passes.
/// Every view degrades on its own: a snapshot with no files still shows
/// its capacity bar, a snapshot without disk totals still shows its tables.
pub mod capacity;
pub mod charts;
pub mod palette;
pub mod tables;
pub mod type_usage;

pub use capacity::CapacityView;
pub use charts::{ChartSlice, ChartsView};
pub use palette::{Palette, Rgb, ThemeMode};
pub use tables::{FileRow, FileTableView, RankingRow, RankingView};
pub use type_usage::{TypeSegment, TypeUsageView, MIN_VISIBLE_PERCENT};

use crate::analysis::{aggregate, fold_top, SortState, TypeStat};
use crate::i18n::{tr, Locale, Text};
use crate::model::Snapshot;

/// Number of file types shown before the rest is folded into `other`.
pub const TYPE_LIMIT: usize = 5;

/// Widget titles and column headers in the active locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    pub largest_directories: &'static str,
    pub largest_files: &'static str,
    pub file_browser: &'static str,
    pub top_file_types: &'static str,
    pub file_type_usage: &'static str,
    pub available_space: &'static str,
    pub name: &'static str,
    pub size: &'static str,
    pub percent: &'static str,
    pub files: &'static str,
    pub modified: &'static str,
    pub up: &'static str,
    pub used: &'static str,
    pub available: &'static str,
    pub total: &'static str,
    pub no_data: &'static str,
    pub capacity_unknown: &'static str,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        let t = |text| tr(locale, text);
        Self {
            largest_directories: t(Text::LargestDirectories),
            largest_files: t(Text::LargestFiles),
            file_browser: t(Text::FileBrowser),
            top_file_types: t(Text::TopFileTypes),
            file_type_usage: t(Text::FileTypeUsage),
            available_space: t(Text::AvailableSpace),
            name: t(Text::Name),
            size: t(Text::Size),
            percent: t(Text::Percent),
            files: t(Text::Files),
            modified: t(Text::Modified),
            up: t(Text::Up),
            used: t(Text::Used),
            available: t(Text::Available),
            total: t(Text::Total),
            no_data: t(Text::NoData),
            capacity_unknown: t(Text::CapacityUnknown),
        }
    }
}

/// Everything one render pass produces.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViews {
    pub current_path: Option<String>,
    pub capacity: CapacityView,
    pub type_usage: TypeUsageView,
    pub charts: ChartsView,
    pub largest_files: RankingView,
    pub largest_dirs: RankingView,
    pub file_table: FileTableView,
    pub labels: Labels,
    pub palette: Palette,
    pub theme: ThemeMode,
}

/// Rendering context shared by all views: palette, theme and locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewCoordinator {
    palette: Palette,
    theme: ThemeMode,
    locale: Locale,
}

impl ViewCoordinator {
    pub fn new(palette: Palette, theme: ThemeMode, locale: Locale) -> Self {
        Self {
            palette,
            theme,
            locale,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Build every view from `snapshot`, whose entries are expected to be
    /// sorted by `sort` already. Never fails; `None` renders the empty
    /// dashboard.
    pub fn render(&self, snapshot: Option<&Snapshot>, sort: SortState) -> DashboardViews {
        let folded = self.folded_types(snapshot);
        let total_size = snapshot.map_or(0, Snapshot::total_size);

        DashboardViews {
            current_path: snapshot.map(|s| s.current_path.clone()),
            capacity: CapacityView::from_snapshot(snapshot),
            type_usage: TypeUsageView::build(&folded, total_size, self.palette, self.theme),
            charts: ChartsView::build(&folded, self.palette, self.theme),
            largest_files: RankingView::largest_files(snapshot),
            largest_dirs: RankingView::largest_dirs(snapshot),
            file_table: FileTableView::build(snapshot, sort),
            labels: Labels::for_locale(self.locale),
            palette: self.palette,
            theme: self.theme,
        }
    }

    /// Rebuild only the charts, e.g. after their widget was resized.
    pub fn render_charts(&self, snapshot: Option<&Snapshot>) -> ChartsView {
        ChartsView::build(&self.folded_types(snapshot), self.palette, self.theme)
    }

    fn folded_types(&self, snapshot: Option<&Snapshot>) -> Vec<TypeStat> {
        match snapshot {
            Some(s) => fold_top(&aggregate(&s.entries), TYPE_LIMIT),
            None => Vec::new(),
        }
    }
}
