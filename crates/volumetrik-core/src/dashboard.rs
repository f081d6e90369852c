/// Dashboard controller — owns the session, sort state, view coordinator,
/// settings and layout, and turns user intents into state transitions.
///
/// The frontend calls [`Dashboard::dispatch`] for every user action and
/// [`Dashboard::tick`] once per frame, then draws [`Dashboard::views`] and
/// shows whatever [`Dashboard::drain_notices`] returns.
use crate::analysis::{SortColumn, SortState};
use crate::error::{PersistenceError, ServiceError, ValidationError};
use crate::i18n::{tr, Locale, Text};
use crate::layout::{LayoutEntry, LayoutStore, WidgetId};
use crate::model::Snapshot;
use crate::service::DashboardService;
use crate::session::{ScanSession, SessionEvent};
use crate::settings::{Appearance, MonitoredPathRule, SettingsSync, ThresholdType};
use crate::view::{DashboardViews, Palette, ThemeMode, ViewCoordinator};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// A user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    RequestScan(String),
    StopScan,
    /// The scan/stop button: stops a running scan, otherwise scans the path.
    ToggleScan(String),
    /// A directory row was activated.
    SelectDirectory(String),
    /// The parent row was activated.
    NavigateParent,
    ChangeSortColumn(SortColumn),
    SetPalette(Palette),
    ToggleTheme,
    WidgetResized(WidgetId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

pub struct Dashboard {
    service: Arc<dyn DashboardService>,
    session: ScanSession,
    sort: SortState,
    coordinator: ViewCoordinator,
    settings: SettingsSync,
    layout: LayoutStore,
    views: DashboardViews,
    notices: Vec<Notice>,
    full_renders: u64,
    chart_renders: u64,
}

impl Dashboard {
    /// Create the controller and load settings and layout from `service`.
    ///
    /// The stored palette and theme are restored. Load failures fall back
    /// to defaults; a layout failure is also reported as a notice.
    pub fn new(service: Arc<dyn DashboardService>) -> Self {
        let mut settings = SettingsSync::new();
        if let Err(e) = settings.load(service.as_ref()) {
            warn!("Loading settings failed, using defaults: {e}");
        }

        let appearance = &settings.committed().appearance;
        let coordinator =
            ViewCoordinator::new(appearance.palette(), appearance.theme(), settings.locale());
        let mut notices = Vec::new();
        let mut layout = LayoutStore::new();
        if let Err(e) = layout.load(service.as_ref()) {
            warn!("Loading layout failed, using defaults: {e}");
            notices.push(Notice::new(
                NoticeLevel::Error,
                format!("{}{e}", tr(coordinator.locale(), Text::ErrorLoadingLayout)),
            ));
        }

        let sort = SortState::default();
        let views = coordinator.render(None, sort);
        Self {
            session: ScanSession::new(Arc::clone(&service)),
            service,
            sort,
            coordinator,
            settings,
            layout,
            views,
            notices,
            full_renders: 1,
            chart_renders: 0,
        }
    }

    // ── Intents ────────────────────────────────────────────────────

    /// Apply a user intent. Only scan requests can be rejected, and only
    /// for an empty path.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), ValidationError> {
        match intent {
            Intent::RequestScan(path) | Intent::SelectDirectory(path) => self.start_scan(&path)?,
            Intent::ToggleScan(path) => {
                if self.session.is_busy() {
                    self.stop_scan();
                } else {
                    self.start_scan(&path)?;
                }
            }
            Intent::StopScan => self.stop_scan(),
            Intent::NavigateParent => {
                let parent = self
                    .session
                    .snapshot()
                    .and_then(|s| s.parent_path.clone());
                match parent {
                    Some(parent) => self.start_scan(&parent)?,
                    None => debug!("Already at a filesystem root"),
                }
            }
            Intent::ChangeSortColumn(column) => {
                self.sort.select(column);
                self.session.sort_entries(self.sort);
                self.rerender();
            }
            Intent::SetPalette(palette) => {
                self.coordinator.set_palette(palette);
                self.rerender();
                self.save_appearance();
            }
            Intent::ToggleTheme => {
                self.coordinator.toggle_theme();
                self.rerender();
                self.save_appearance();
            }
            Intent::WidgetResized(widget) => {
                if widget.hosts_chart() {
                    self.views.charts = self.coordinator.render_charts(self.session.snapshot());
                    self.chart_renders += 1;
                }
            }
        }
        Ok(())
    }

    fn start_scan(&mut self, path: &str) -> Result<(), ValidationError> {
        self.session.start(path)?;
        self.notify(
            NoticeLevel::Info,
            format!("{}{}", self.text(Text::ScanStarted), path.trim()),
        );
        Ok(())
    }

    fn stop_scan(&mut self) {
        if let Some(SessionEvent::Cancelled { user_initiated: true, .. }) = self.session.stop() {
            self.notify(NoticeLevel::Info, self.text(Text::ScanAborted));
        }
    }

    // ── Frame loop ─────────────────────────────────────────────────

    /// Apply finished scans and flush a due layout write.
    ///
    /// Returns `true` when the views changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        for event in self.session.process_replies() {
            match event {
                SessionEvent::Completed { .. } => {
                    self.session.sort_entries(self.sort);
                    self.rerender();
                    changed = true;
                }
                SessionEvent::Failed { error, .. } => {
                    self.notify(
                        NoticeLevel::Error,
                        format!("{}{error}", self.text(Text::ScanFailed)),
                    );
                    changed = true;
                }
                // User stops are reported by `stop_scan` when they happen.
                SessionEvent::Cancelled { path, .. } => {
                    debug!(path = %path, "Scan cancelled by the service");
                    changed = true;
                }
            }
        }

        match self.layout.flush_due(self.service.as_ref(), now) {
            Some(Ok(())) => self.notify(NoticeLevel::Success, self.text(Text::LayoutSaved)),
            Some(Err(e)) => self.notify(
                NoticeLevel::Error,
                format!("{}{}", self.text(Text::ErrorSavingLayout), e.source),
            ),
            None => {}
        }

        changed
    }

    fn rerender(&mut self) {
        self.views = self.coordinator.render(self.session.snapshot(), self.sort);
        self.full_renders += 1;
    }

    // ── Settings ───────────────────────────────────────────────────

    /// Reload the settings document; called when the dialog opens. The
    /// loaded language becomes the display locale.
    pub fn open_settings(&mut self) -> Result<(), ServiceError> {
        self.settings.load(self.service.as_ref()).inspect_err(|e| {
            warn!("Loading settings failed: {e}");
        })?;
        if self.settings.locale() != self.coordinator.locale() {
            self.coordinator.set_locale(self.settings.locale());
            self.rerender();
        }
        Ok(())
    }

    pub fn settings(&self) -> &SettingsSync {
        &self.settings
    }

    /// Mutable access to the settings draft for unvalidated form fields.
    pub fn settings_mut(&mut self) -> &mut SettingsSync {
        &mut self.settings
    }

    pub fn add_monitored_path(
        &mut self,
        path: &str,
        threshold_type: ThresholdType,
        threshold_value: f64,
    ) -> Result<(), ValidationError> {
        self.settings
            .add_monitored_path(path, threshold_type, threshold_value)
    }

    pub fn remove_monitored_path(
        &mut self,
        index: usize,
    ) -> Result<MonitoredPathRule, ValidationError> {
        self.settings.remove_monitored_path(index)
    }

    /// Save the settings draft together with the current layout.
    ///
    /// On success the saved language becomes the display locale.
    pub fn save_settings(&mut self) -> Result<(), PersistenceError> {
        self.settings.draft_mut().appearance = self.appearance();
        let layout = Some(self.layout.entries().to_vec());
        match self.settings.save(self.service.as_ref(), layout) {
            Ok(()) => {
                self.coordinator.set_locale(self.settings.locale());
                self.rerender();
                self.notify(NoticeLevel::Success, self.text(Text::SettingsSavedSuccess));
                Ok(())
            }
            Err(e) => {
                self.notify(
                    NoticeLevel::Error,
                    format!("{}{}", self.text(Text::SettingsSaveFailed), e.source),
                );
                Err(e)
            }
        }
    }

    fn appearance(&self) -> Appearance {
        Appearance::new(self.coordinator.palette(), self.coordinator.theme())
    }

    /// Write the current palette and theme. Failures become an error notice.
    fn save_appearance(&mut self) {
        let appearance = self.appearance();
        let layout = Some(self.layout.entries().to_vec());
        if let Err(e) = self
            .settings
            .save_appearance(self.service.as_ref(), appearance, layout)
        {
            self.notify(
                NoticeLevel::Error,
                format!("{}{}", self.text(Text::SettingsSaveFailed), e.source),
            );
        }
    }

    /// Localised inline message for a rejected form submission.
    pub fn validation_message(&self, error: &ValidationError) -> &'static str {
        match error {
            ValidationError::DuplicatePath(_) => self.text(Text::PathAlreadyMonitored),
            ValidationError::EmptyPath
            | ValidationError::InvalidThreshold
            | ValidationError::NoSuchRule(_) => self.text(Text::InvalidPathThreshold),
        }
    }

    // ── Layout ─────────────────────────────────────────────────────

    pub fn layout(&self) -> &LayoutStore {
        &self.layout
    }

    pub fn record_layout(&mut self, entries: Vec<LayoutEntry>, now: Instant) {
        self.layout.record_change(entries, now);
    }

    /// Restore the default layout. The layout epoch changes on success,
    /// telling the frontend to drop its own widget positions.
    pub fn reset_layout(&mut self) -> Result<(), PersistenceError> {
        match self.layout.reset(self.service.as_ref()) {
            Ok(()) => {
                self.rerender();
                self.notify(NoticeLevel::Success, self.text(Text::LayoutReset));
                Ok(())
            }
            Err(e) => {
                self.notify(
                    NoticeLevel::Error,
                    format!("{}{}", self.text(Text::ErrorSavingLayout), e.source),
                );
                Err(e)
            }
        }
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub fn views(&self) -> &DashboardViews {
        &self.views
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_busy()
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.session.snapshot()
    }

    pub fn service(&self) -> &Arc<dyn DashboardService> {
        &self.service
    }

    pub fn locale(&self) -> Locale {
        self.coordinator.locale()
    }

    pub fn palette(&self) -> Palette {
        self.coordinator.palette()
    }

    pub fn theme(&self) -> ThemeMode {
        self.coordinator.theme()
    }

    pub fn text(&self, text: Text) -> &'static str {
        tr(self.coordinator.locale(), text)
    }

    /// Number of full render passes so far.
    pub fn full_renders(&self) -> u64 {
        self.full_renders
    }

    /// Number of chart-only render passes so far.
    pub fn chart_renders(&self) -> u64 {
        self.chart_renders
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice::new(level, message));
    }
}
