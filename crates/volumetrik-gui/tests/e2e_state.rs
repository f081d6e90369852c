/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These exercise the real dashboard against the local filesystem backend
/// without spinning up an egui window, keeping them fast and deterministic.
use egui::{Pos2, Rect, Vec2};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use volumetrik_core::dashboard::{Intent, NoticeLevel};
use volumetrik_core::i18n::Locale;
use volumetrik_core::layout::{default_layout, LayoutEntry, WidgetId, QUIET_PERIOD};
use volumetrik_core::service::LocalService;
use volumetrik_core::settings::Settings;
use volumetrik_core::view::{Palette, ThemeMode};
use volumetrik_gui::state::{AppState, SettingsTab, TOAST_LIFETIME};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// A small tree to scan plus a settings file location outside of it.
///
/// ```text
/// root/
///   tree/
///     a.txt      (100 bytes)
///     b.bin      (200 bytes)
///     sub/c.rs   (300 bytes)
///   settings.json
/// ```
struct Fixture {
    tmp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let tree = tmp.path().join("tree");
        fs::create_dir_all(tree.join("sub")).unwrap();
        write_bytes(&tree.join("a.txt"), 100);
        write_bytes(&tree.join("b.bin"), 200);
        write_bytes(&tree.join("sub").join("c.rs"), 300);
        Self { tmp }
    }

    fn tree(&self) -> String {
        self.tmp.path().join("tree").to_string_lossy().into_owned()
    }

    fn settings_path(&self) -> std::path::PathBuf {
        self.tmp.path().join("settings.json")
    }

    fn state(&self) -> AppState {
        let service = Arc::new(LocalService::new(self.settings_path()));
        AppState::new(service, self.tree())
    }

    fn stored_settings(&self) -> Settings {
        let text = fs::read_to_string(self.settings_path()).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

/// Tick until the in-flight scan finishes. Panics after 30 s.
fn pump_until_idle(state: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while state.dashboard.is_busy() {
        assert!(
            Instant::now() < deadline,
            "scan did not complete within 30 seconds"
        );
        state.tick(Instant::now());
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn moved(widget: WidgetId, dx: u32, dw: u32) -> LayoutEntry {
    let mut entry = default_layout()
        .into_iter()
        .find(|e| e.widget() == Some(widget))
        .unwrap();
    entry.x += dx;
    entry.w += dw;
    entry
}

// ── Scanning ──────────────────────────────────────────────────────────────────

#[test]
fn new_state_starts_idle_with_default_layout() {
    let fx = Fixture::new();
    let state = fx.state();
    assert!(!state.dashboard.is_busy());
    assert_eq!(state.path_input, fx.tree());
    assert_eq!(state.dashboard.layout().entries(), default_layout().as_slice());
    assert!(state.toasts.is_empty());
    assert!(state.repaint_after(Instant::now()).is_none());
}

#[test]
fn scan_button_scans_and_syncs_the_path_field() {
    let fx = Fixture::new();
    let mut state = fx.state();

    state.toggle_scan();
    assert!(state.dashboard.is_busy());
    assert!(state.repaint_after(Instant::now()).is_some());
    pump_until_idle(&mut state);

    let views = state.dashboard.views();
    let current = views.current_path.clone().unwrap();
    assert!(current.ends_with("tree"), "got {current}");
    assert_eq!(state.path_input, current);
    assert_eq!(views.file_table.rows.len(), 3);
    assert_eq!(views.file_table.rows[0].name, "sub");
    assert!(state
        .toasts
        .iter()
        .any(|t| t.level == NoticeLevel::Info && t.message.contains("tree")));
}

#[test]
fn directory_navigation_updates_the_path_field() {
    let fx = Fixture::new();
    let mut state = fx.state();
    state.toggle_scan();
    pump_until_idle(&mut state);

    let sub = state.dashboard.views().file_table.rows[0].path.clone();
    state.dispatch(Intent::SelectDirectory(sub.clone()));
    pump_until_idle(&mut state);
    assert_eq!(state.path_input, sub);
}

#[test]
fn empty_path_shows_an_error_toast() {
    let fx = Fixture::new();
    let mut state = fx.state();
    state.path_input = "   ".into();
    state.toggle_scan();
    assert!(!state.dashboard.is_busy());
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].level, NoticeLevel::Error);
}

#[test]
fn missing_directory_reports_failure() {
    let fx = Fixture::new();
    let mut state = fx.state();
    state.path_input = fx.tmp.path().join("nope").to_string_lossy().into_owned();
    state.toggle_scan();
    pump_until_idle(&mut state);
    assert!(state.dashboard.views().current_path.is_none());
    assert!(state.toasts.iter().any(|t| t.level == NoticeLevel::Error));
}

#[test]
fn toasts_expire() {
    let fx = Fixture::new();
    let mut state = fx.state();
    state.path_input.clear();
    state.toggle_scan();
    assert!(!state.toasts.is_empty());

    let wake = state.repaint_after(Instant::now()).unwrap();
    assert!(wake <= TOAST_LIFETIME);

    state.tick(Instant::now() + TOAST_LIFETIME + Duration::from_millis(10));
    assert!(state.toasts.is_empty());
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[test]
fn window_moves_are_reported_once_on_release() {
    let fx = Fixture::new();
    let mut state = fx.state();
    let a = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(300.0, 200.0));
    let b = a.translate(Vec2::new(40.0, 0.0));

    assert!(!state.observe_window(WidgetId::Browser, a, false, false));
    // Rect changes while the button is held: a drag.
    assert!(!state.observe_window(WidgetId::Browser, b, true, false));
    assert!(state.observe_window(WidgetId::Browser, b, false, true));
    assert!(!state.observe_window(WidgetId::Browser, b, false, true));

    // A release without a preceding change is not a move.
    assert!(!state.observe_window(WidgetId::DiskSpace, a, false, false));
    assert!(!state.observe_window(WidgetId::DiskSpace, a, false, true));
}

#[test]
fn widget_moves_are_persisted_after_the_quiet_period() {
    let fx = Fixture::new();
    let mut state = fx.state();
    let t0 = Instant::now();

    state.widget_moved(moved(WidgetId::DiskSpace, 0, 0), t0);
    assert!(!state.dashboard.layout().is_dirty(), "unchanged geometry");

    let mut entry = moved(WidgetId::DiskSpace, 0, 0);
    entry.y += 2;
    state.widget_moved(entry.clone(), t0);
    assert!(state.dashboard.layout().is_dirty());
    assert!(state.repaint_after(t0).unwrap() <= QUIET_PERIOD);

    state.tick(t0 + QUIET_PERIOD);
    assert!(!state.dashboard.layout().is_dirty());
    let stored = fx.stored_settings().layout.unwrap();
    assert!(stored.contains(&entry));
    assert!(state.toasts.iter().any(|t| t.level == NoticeLevel::Success));
}

#[test]
fn resizing_the_chart_widget_redraws_charts() {
    let fx = Fixture::new();
    let mut state = fx.state();
    let now = Instant::now();

    state.widget_moved(moved(WidgetId::TopTypes, 0, 0), now);
    let mut shifted = moved(WidgetId::TopTypes, 0, 0);
    shifted.y += 1;
    state.widget_moved(shifted, now);
    assert_eq!(state.dashboard.chart_renders(), 0);

    let mut wider = moved(WidgetId::TopTypes, 0, 0);
    wider.x -= 2;
    wider.w += 2;
    state.widget_moved(wider, now);
    assert_eq!(state.dashboard.chart_renders(), 1);

    state.widget_moved(moved(WidgetId::Browser, 0, 0), now);
    let mut narrower = moved(WidgetId::Browser, 0, 0);
    narrower.w -= 1;
    state.widget_moved(narrower, now);
    assert_eq!(state.dashboard.chart_renders(), 1);
}

#[test]
fn reset_layout_changes_the_window_epoch() {
    let fx = Fixture::new();
    let mut state = fx.state();
    let epoch = state.layout_epoch();
    state.widget_moved(moved(WidgetId::Browser, 0, 0), Instant::now());
    let mut entry = moved(WidgetId::Browser, 0, 0);
    entry.h += 3;
    state.widget_moved(entry, Instant::now());

    state.reset_layout();
    state.tick(Instant::now());
    assert_eq!(state.layout_epoch(), epoch + 1);
    assert_eq!(state.dashboard.layout().entries(), default_layout().as_slice());
    assert_eq!(fx.stored_settings().layout, Some(default_layout()));
}

// ── Settings dialog ───────────────────────────────────────────────────────────

#[test]
fn rule_form_validates_inline_and_cancel_discards() {
    let fx = Fixture::new();
    let mut state = fx.state();
    state.open_settings();
    assert!(state.show_settings);
    assert_eq!(state.settings_tab, SettingsTab::General);

    state.rule_form.path = "/".into();
    state.add_rule();
    assert_eq!(state.rule_form.error, Some("Path already monitored"));

    state.rule_form.path = "  ".into();
    state.add_rule();
    assert!(state.rule_form.error.is_some());

    state.rule_form.path = "/srv/media".into();
    state.add_rule();
    assert_eq!(state.rule_form.error, None);
    assert!(state.rule_form.path.is_empty());
    assert_eq!(state.dashboard.settings().rules().len(), 2);

    state.cancel_settings();
    assert!(!state.show_settings);
    assert_eq!(state.dashboard.settings().rules().len(), 1);
    assert!(!fx.settings_path().exists());
}

#[test]
fn saving_settings_persists_and_switches_language() {
    let fx = Fixture::new();
    let mut state = fx.state();
    state.open_settings();
    state.dashboard.settings_mut().draft_mut().language = "de".into();
    state.rule_form.path = "/srv/backups".into();
    state.add_rule();
    state.remove_rule(0);

    state.save_settings();
    assert!(!state.show_settings);
    assert_eq!(state.dashboard.locale(), Locale::De);

    let stored = fx.stored_settings();
    assert_eq!(stored.language, "de");
    assert_eq!(stored.monitoring.paths.len(), 1);
    assert_eq!(stored.monitoring.paths[0].path, "/srv/backups");

    // A restarted app picks the language up again.
    let restarted = fx.state();
    assert_eq!(restarted.dashboard.locale(), Locale::De);
}

#[test]
fn palette_and_theme_are_restored_after_restart() {
    let fx = Fixture::new();
    let mut state = fx.state();
    state.dispatch(Intent::SetPalette(Palette::Forest));
    state.dispatch(Intent::ToggleTheme);
    state.open_settings();
    state.save_settings();

    let stored = fx.stored_settings();
    assert_eq!(stored.appearance.palette, "forest");
    assert_eq!(stored.appearance.theme, "light");

    let restarted = fx.state();
    assert_eq!(restarted.dashboard.palette(), Palette::Forest);
    assert_eq!(restarted.dashboard.theme(), ThemeMode::Light);
}

// ── Folder picker ─────────────────────────────────────────────────────────────

#[test]
fn folder_picker_walks_and_chooses() {
    let fx = Fixture::new();
    let mut state = fx.state();

    state.open_browser();
    let listing = state.browse.as_ref().unwrap().listing.clone().unwrap();
    assert_eq!(listing.directories, vec!["sub".to_string()]);

    let sub = listing.child_path("sub");
    state.browse_to(&sub);
    let inner = state.browse.as_ref().unwrap().listing.clone().unwrap();
    assert!(inner.directories.is_empty());

    state.browse_to(&listing.child_path("missing"));
    let dialog = state.browse.as_ref().unwrap();
    assert!(dialog.error.is_some());
    assert_eq!(dialog.listing.as_ref().unwrap().current, inner.current);

    state.choose_browsed();
    assert!(state.browse.is_none());
    assert_eq!(state.path_input, inner.current);
    assert!(state.dashboard.is_busy());
    pump_until_idle(&mut state);
    assert_eq!(state.dashboard.views().file_table.rows.len(), 1);
}
