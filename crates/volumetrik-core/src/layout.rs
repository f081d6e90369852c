/// Widget layout — grid geometry of the dashboard widgets and its debounced
/// persistence.
///
/// Every drag or resize is recorded immediately, but the service only sees
/// the geometry once the layout has been quiet for [`QUIET_PERIOD`]. A burst
/// of changes therefore collapses into a single write carrying the latest
/// geometry.
use crate::error::{PersistenceError, ServiceError};
use crate::service::DashboardService;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How long the layout must stay unchanged before it is persisted.
pub const QUIET_PERIOD: Duration = Duration::from_secs(1);

/// Column count of the dashboard grid.
pub const GRID_COLUMNS: u32 = 12;

// ── Widgets ────────────────────────────────────────────────────────

/// The dashboard widgets that can be placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    LargestDirs,
    LargestFiles,
    Browser,
    FileTypes,
    TopTypes,
    DiskSpace,
}

impl WidgetId {
    pub const ALL: [WidgetId; 6] = [
        WidgetId::LargestDirs,
        WidgetId::LargestFiles,
        WidgetId::Browser,
        WidgetId::FileTypes,
        WidgetId::TopTypes,
        WidgetId::DiskSpace,
    ];

    /// Identifier stored in the layout document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LargestDirs => "widget-largedirs",
            Self::LargestFiles => "widget-largefiles",
            Self::Browser => "widget-browser",
            Self::FileTypes => "widget-filetypes",
            Self::TopTypes => "widget-toptypes",
            Self::DiskSpace => "widget-diskspace",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == id)
    }

    /// Whether the widget draws the magnitude and share charts.
    pub fn hosts_chart(self) -> bool {
        matches!(self, Self::TopTypes)
    }
}

/// Position and size of one widget, in grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    #[serde(rename = "id")]
    pub widget_id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl LayoutEntry {
    pub fn new(widget: WidgetId, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            widget_id: widget.as_str().to_string(),
            x,
            y,
            w,
            h,
        }
    }

    pub fn widget(&self) -> Option<WidgetId> {
        WidgetId::from_id(&self.widget_id)
    }
}

/// Layout applied on first start and after a reset.
pub fn default_layout() -> Vec<LayoutEntry> {
    vec![
        LayoutEntry::new(WidgetId::LargestDirs, 0, 0, 6, 10),
        LayoutEntry::new(WidgetId::Browser, 6, 0, 6, 10),
        LayoutEntry::new(WidgetId::FileTypes, 0, 10, 6, 7),
        LayoutEntry::new(WidgetId::TopTypes, 6, 10, 6, 7),
        LayoutEntry::new(WidgetId::DiskSpace, 0, 17, 12, 3),
        LayoutEntry::new(WidgetId::LargestFiles, 0, 20, 12, 8),
    ]
}

/// Fill in any widget missing from `entries` with its default geometry.
fn complete(mut entries: Vec<LayoutEntry>) -> Vec<LayoutEntry> {
    for fallback in default_layout() {
        if !entries.iter().any(|e| e.widget_id == fallback.widget_id) {
            entries.push(fallback);
        }
    }
    entries
}

// ── Store ──────────────────────────────────────────────────────────

/// Current widget geometry plus the debounce state of its persistence.
#[derive(Debug)]
pub struct LayoutStore {
    entries: Vec<LayoutEntry>,
    /// Time of the most recent unsaved change.
    changed_at: Option<Instant>,
    /// Bumped whenever the presentation must drop its own widget state and
    /// re-apply the stored geometry.
    epoch: u64,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStore {
    pub fn new() -> Self {
        Self {
            entries: default_layout(),
            changed_at: None,
            epoch: 0,
        }
    }

    /// Replace the geometry with what the service has stored.
    ///
    /// A missing or empty layout falls back to the defaults.
    pub fn load(&mut self, service: &dyn DashboardService) -> Result<(), ServiceError> {
        let stored = service.load_layout()?;
        self.entries = match stored {
            Some(entries) if !entries.is_empty() => complete(entries),
            _ => default_layout(),
        };
        self.changed_at = None;
        Ok(())
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn geometry(&self, widget: WidgetId) -> Option<&LayoutEntry> {
        self.entries
            .iter()
            .find(|e| e.widget_id == widget.as_str())
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_dirty(&self) -> bool {
        self.changed_at.is_some()
    }

    /// Record a layout change. Restarts the quiet period.
    pub fn record_change(&mut self, entries: Vec<LayoutEntry>, now: Instant) {
        if entries == self.entries {
            return;
        }
        self.entries = entries;
        self.changed_at = Some(now);
    }

    /// When the pending change becomes due, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.changed_at.map(|at| at + QUIET_PERIOD)
    }

    /// Persist the geometry if the quiet period has elapsed.
    ///
    /// Returns `None` when nothing was written. A failed write is reported
    /// once and not retried; the geometry stays in memory.
    pub fn flush_due(
        &mut self,
        service: &dyn DashboardService,
        now: Instant,
    ) -> Option<Result<(), PersistenceError>> {
        let deadline = self.next_deadline()?;
        if now < deadline {
            return None;
        }
        self.changed_at = None;
        debug!(widgets = self.entries.len(), "Persisting layout");
        Some(
            service
                .save_layout(&self.entries)
                .map_err(PersistenceError::layout),
        )
    }

    /// Persist an empty layout and re-apply whatever the service now
    /// reports, which is the default geometry.
    pub fn reset(&mut self, service: &dyn DashboardService) -> Result<(), PersistenceError> {
        self.changed_at = None;
        service.save_layout(&[]).map_err(PersistenceError::layout)?;

        if let Err(e) = self.load(service) {
            warn!("Reloading layout after reset failed: {e}");
            self.entries = default_layout();
        }
        self.epoch += 1;
        info!(epoch = self.epoch, "Layout reset");
        Ok(())
    }
}
