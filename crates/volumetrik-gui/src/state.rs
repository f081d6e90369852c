/// Application state management.
///
/// Wraps the core [`Dashboard`] controller with the state that only the UI
/// cares about: the path field, dialogs, toasts, and the widget window
/// bookkeeping. Everything runs on the UI thread; [`AppState::tick`] is
/// called once per frame.
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use volumetrik_core::dashboard::{Dashboard, Intent, NoticeLevel};
use volumetrik_core::i18n::Text;
use volumetrik_core::layout::{LayoutEntry, WidgetId};
use volumetrik_core::model::BrowseListing;
use volumetrik_core::service::DashboardService;
use volumetrik_core::settings::ThresholdType;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// Oldest toasts are dropped beyond this many.
const MAX_TOASTS: usize = 5;

/// Repaint cadence while a scan is running, so the spinner keeps moving.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Monitoring,
    Alerts,
}

/// A transient message in the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: NoticeLevel,
    pub message: String,
    pub expires_at: Instant,
}

/// The "add monitored path" form in the settings dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleForm {
    pub path: String,
    pub threshold_type: ThresholdType,
    pub threshold_value: f64,
    /// Inline validation message from the last rejected submission.
    pub error: Option<&'static str>,
}

impl Default for RuleForm {
    fn default() -> Self {
        Self {
            path: String::new(),
            threshold_type: ThresholdType::MaxUsed,
            threshold_value: 10.0,
            error: None,
        }
    }
}

/// The folder picker.
#[derive(Debug, Clone, Default)]
pub struct BrowseDialog {
    pub listing: Option<BrowseListing>,
    pub error: Option<String>,
}

/// All application state.
pub struct AppState {
    pub dashboard: Dashboard,

    // ── Toolbar ────────────────────────────────────────
    pub path_input: String,

    // ── Dialogs ────────────────────────────────────────
    pub show_settings: bool,
    pub settings_tab: SettingsTab,
    pub rule_form: RuleForm,
    pub browse: Option<BrowseDialog>,

    // ── Status ─────────────────────────────────────────
    pub toasts: Vec<Toast>,

    // ── Widget windows ─────────────────────────────────
    /// Window rectangles seen last frame, per widget.
    window_rects: HashMap<WidgetId, egui::Rect>,
    /// Widgets the user is currently dragging or resizing.
    moving: HashSet<WidgetId>,
    /// Layout epoch the window bookkeeping belongs to.
    window_epoch: u64,
    /// Path shown by the views the last time the path field was synced.
    shown_path: Option<String>,
}

impl AppState {
    pub fn new(service: Arc<dyn DashboardService>, start_path: impl Into<String>) -> Self {
        let dashboard = Dashboard::new(service);
        let window_epoch = dashboard.layout().epoch();
        let mut state = Self {
            dashboard,
            path_input: start_path.into(),
            show_settings: false,
            settings_tab: SettingsTab::default(),
            rule_form: RuleForm::default(),
            browse: None,
            toasts: Vec::new(),
            window_rects: HashMap::new(),
            moving: HashSet::new(),
            window_epoch,
            shown_path: None,
        };
        state.collect_notices(Instant::now());
        state
    }

    // ── Intents ────────────────────────────────────────────────────

    /// Forward an intent to the dashboard, turning a rejection into a toast.
    pub fn dispatch(&mut self, intent: Intent) {
        let now = Instant::now();
        if let Err(e) = self.dashboard.dispatch(intent) {
            let message = self.dashboard.validation_message(&e);
            self.push_toast(NoticeLevel::Error, message.to_string(), now);
        }
        self.collect_notices(now);
    }

    /// The scan/stop button.
    pub fn toggle_scan(&mut self) {
        let path = self.path_input.clone();
        self.dispatch(Intent::ToggleScan(path));
    }

    // ── Frame loop ─────────────────────────────────────────────────

    /// Apply finished work and expire toasts. Returns `true` when the views
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.dashboard.tick(now);
        self.collect_notices(now);
        self.toasts.retain(|t| t.expires_at > now);

        // A completed navigation shows the new directory in the path field.
        let current = &self.dashboard.views().current_path;
        if *current != self.shown_path {
            if let Some(path) = current {
                self.path_input.clone_from(path);
            }
            self.shown_path.clone_from(current);
        }

        if self.dashboard.layout().epoch() != self.window_epoch {
            self.window_epoch = self.dashboard.layout().epoch();
            self.window_rects.clear();
            self.moving.clear();
        }
        changed
    }

    /// How soon the next frame is needed even without input, if at all.
    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        let mut wake: Option<Duration> = None;
        let mut consider = |at: Instant| {
            let wait = at.saturating_duration_since(now);
            wake = Some(wake.map_or(wait, |w| w.min(wait)));
        };

        if let Some(deadline) = self.dashboard.layout().next_deadline() {
            consider(deadline);
        }
        if let Some(first) = self.toasts.iter().map(|t| t.expires_at).min() {
            consider(first);
        }
        if self.dashboard.is_busy() {
            consider(now + BUSY_REPAINT);
        }
        wake
    }

    fn collect_notices(&mut self, now: Instant) {
        for notice in self.dashboard.drain_notices() {
            self.push_toast(notice.level, notice.message, now);
        }
    }

    fn push_toast(&mut self, level: NoticeLevel, message: String, now: Instant) {
        self.toasts.push(Toast {
            level,
            message,
            expires_at: now + TOAST_LIFETIME,
        });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
    }

    // ── Settings dialog ────────────────────────────────────────────

    /// Reload settings from the service and show the dialog. A load failure
    /// still opens the dialog on the last known document.
    pub fn open_settings(&mut self) {
        if let Err(e) = self.dashboard.open_settings() {
            let message = format!("{e}");
            self.push_toast(NoticeLevel::Error, message, Instant::now());
        }
        self.rule_form = RuleForm::default();
        self.settings_tab = SettingsTab::General;
        self.show_settings = true;
    }

    /// Close the dialog, discarding unsaved edits.
    pub fn cancel_settings(&mut self) {
        self.dashboard.settings_mut().revert();
        self.show_settings = false;
    }

    /// Save the draft. The dialog stays open with the draft intact on
    /// failure.
    pub fn save_settings(&mut self) {
        if self.dashboard.save_settings().is_ok() {
            self.show_settings = false;
        }
        self.collect_notices(Instant::now());
    }

    /// Submit the "add monitored path" form.
    pub fn add_rule(&mut self) {
        let form = &self.rule_form;
        match self.dashboard.add_monitored_path(
            &form.path,
            form.threshold_type,
            form.threshold_value,
        ) {
            Ok(()) => {
                self.rule_form.path.clear();
                self.rule_form.error = None;
            }
            Err(e) => self.rule_form.error = Some(self.dashboard.validation_message(&e)),
        }
    }

    pub fn remove_rule(&mut self, index: usize) {
        if let Err(e) = self.dashboard.remove_monitored_path(index) {
            tracing::warn!("Removing monitored path failed: {e}");
        }
    }

    // ── Folder picker ──────────────────────────────────────────────

    /// Open the picker at the path currently in the path field, or at the
    /// filesystem root when the field is empty.
    pub fn open_browser(&mut self) {
        let start = self.path_input.trim().to_string();
        self.browse = Some(BrowseDialog::default());
        self.browse_to(&start);
    }

    /// Show the directories under `path` in the picker.
    pub fn browse_to(&mut self, path: &str) {
        let result = self.dashboard.service().browse(path);
        let Some(dialog) = self.browse.as_mut() else {
            return;
        };
        match result {
            Ok(listing) => {
                dialog.listing = Some(listing);
                dialog.error = None;
            }
            Err(e) => {
                tracing::warn!(path = %path, "Browse failed: {e}");
                dialog.error = Some(e.to_string());
            }
        }
    }

    /// Use the directory shown in the picker as the scan target and scan it.
    pub fn choose_browsed(&mut self) {
        let chosen = self
            .browse
            .take()
            .and_then(|d| d.listing)
            .map(|l| l.current);
        if let Some(path) = chosen {
            self.path_input.clone_from(&path);
            self.dispatch(Intent::RequestScan(path));
        }
    }

    // ── Layout ─────────────────────────────────────────────────────

    pub fn layout_epoch(&self) -> u64 {
        self.window_epoch
    }

    /// Track a widget window's on-screen rectangle. Returns `true` once the
    /// user has finished moving or resizing it (`released`).
    pub fn observe_window(
        &mut self,
        widget: WidgetId,
        rect: egui::Rect,
        pointer_down: bool,
        released: bool,
    ) -> bool {
        let previous = self.window_rects.insert(widget, rect);
        if pointer_down && previous.is_some_and(|p| p != rect) {
            self.moving.insert(widget);
        }
        released && self.moving.remove(&widget)
    }

    /// Store new geometry for `widget` and schedule the layout write.
    ///
    /// A size change of the chart widget also redraws its charts.
    pub fn widget_moved(&mut self, geometry: LayoutEntry, now: Instant) {
        let Some(widget) = geometry.widget() else {
            return;
        };
        let mut entries = self.dashboard.layout().entries().to_vec();
        let Some(slot) = entries.iter_mut().find(|e| e.widget_id == geometry.widget_id) else {
            return;
        };
        if *slot == geometry {
            return;
        }
        let resized = slot.w != geometry.w || slot.h != geometry.h;
        *slot = geometry;
        self.dashboard.record_layout(entries, now);

        if resized {
            self.dispatch(Intent::WidgetResized(widget));
        }
    }

    pub fn reset_layout(&mut self) {
        // The notice covers both outcomes.
        let _ = self.dashboard.reset_layout();
        self.collect_notices(Instant::now());
    }

    // ── Convenience ────────────────────────────────────────────────

    pub fn text(&self, text: Text) -> &'static str {
        self.dashboard.text(text)
    }
}
