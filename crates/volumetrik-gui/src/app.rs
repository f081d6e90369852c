/// Main `eframe::App` implementation for Volumetrik.
///
/// Composes the toolbar, status bar, dialogs, and one floating window per
/// dashboard widget placed on the layout grid.
use crate::grid::Grid;
use crate::panels;
use crate::state::AppState;
use crate::theme::VolumetrikTheme;
use crate::widgets;
use std::sync::Arc;
use std::time::Instant;
use volumetrik_core::dashboard::Intent;
use volumetrik_core::layout::WidgetId;
use volumetrik_core::service::DashboardService;
use volumetrik_core::view::DashboardViews;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that settings
/// and layout are loaded before the OS window is created.
pub struct VolumetrikState {
    pub(crate) inner: AppState,
}

impl VolumetrikState {
    /// Load settings and layout from `service`.
    pub fn build(service: Arc<dyn DashboardService>, start_path: impl Into<String>) -> Self {
        Self {
            inner: AppState::new(service, start_path),
        }
    }
}

/// The Volumetrik application.
pub struct VolumetrikApp {
    state: AppState,
}

impl VolumetrikApp {
    /// Create the application from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: VolumetrikState) -> Self {
        VolumetrikTheme::for_mode(state.inner.dashboard.theme()).apply(&cc.egui_ctx);
        Self { state: state.inner }
    }

    /// Draw every widget window and apply what the user did to them.
    fn widget_windows(&mut self, ctx: &egui::Context, area: egui::Rect) {
        let now = Instant::now();
        let entries = self.state.dashboard.layout().entries().to_vec();
        let grid = Grid::fit(area, &entries);
        let epoch = self.state.layout_epoch();
        let (pointer_down, released) =
            ctx.input(|i| (i.pointer.primary_down(), i.pointer.primary_released()));

        let mut intents = Vec::new();
        for entry in &entries {
            let Some(widget) = entry.widget() else {
                continue;
            };
            let views = self.state.dashboard.views();

            let shown = egui::Window::new(widget_title(views, widget))
                .id(egui::Id::new((widget.as_str(), epoch)))
                .default_rect(grid.rect_of(entry))
                .constrain_to(area)
                .collapsible(false)
                .resizable(true)
                .show(ctx, |ui| draw_widget(ui, views, widget));

            let Some(shown) = shown else {
                continue;
            };
            if let Some(Some(intent)) = shown.inner {
                intents.push(intent);
            }
            let rect = shown.response.rect;
            if self
                .state
                .observe_window(widget, rect, pointer_down, released)
            {
                self.state.widget_moved(grid.snap(entry, rect), now);
            }
        }

        for intent in intents {
            self.state.dispatch(intent);
        }
    }
}

fn widget_title(views: &DashboardViews, widget: WidgetId) -> &'static str {
    let labels = &views.labels;
    match widget {
        WidgetId::LargestDirs => labels.largest_directories,
        WidgetId::LargestFiles => labels.largest_files,
        WidgetId::Browser => labels.file_browser,
        WidgetId::FileTypes => labels.file_type_usage,
        WidgetId::TopTypes => labels.top_file_types,
        WidgetId::DiskSpace => labels.available_space,
    }
}

fn draw_widget(ui: &mut egui::Ui, views: &DashboardViews, widget: WidgetId) -> Option<Intent> {
    match widget {
        WidgetId::LargestDirs => {
            panels::rankings_panel::rankings_panel(ui, views, &views.largest_dirs)
        }
        WidgetId::LargestFiles => {
            panels::rankings_panel::rankings_panel(ui, views, &views.largest_files)
        }
        WidgetId::Browser => panels::browser_panel::browser_panel(ui, views),
        WidgetId::FileTypes => {
            panels::type_usage_panel::type_usage_panel(ui, views);
            None
        }
        WidgetId::TopTypes => {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| panels::chart_panel::chart_panel(ui, views));
            None
        }
        WidgetId::DiskSpace => {
            panels::capacity_panel::capacity_panel(ui, views);
            None
        }
    }
}

impl eframe::App for VolumetrikApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        VolumetrikTheme::for_mode(self.state.dashboard.theme()).apply(ctx);

        // ── Process background work ───────────────────────────────────────
        let now = Instant::now();
        self.state.tick(now);
        if let Some(wait) = self.state.repaint_after(now) {
            ctx.request_repaint_after(wait);
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Dashboard grid ────────────────────────────────────────────────
        let area = egui::CentralPanel::default()
            .show(ctx, |ui| ui.max_rect())
            .inner;
        self.widget_windows(ctx, area);

        // ── Dialogs ───────────────────────────────────────────────────────
        panels::settings_panel::settings_panel(ctx, &mut self.state);
        panels::browse_dialog::browse_dialog(ctx, &mut self.state);
    }
}
