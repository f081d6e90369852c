/// Bottom status bar — scan state, totals, and toasts.
use crate::state::AppState;
use egui::Ui;
use volumetrik_core::dashboard::NoticeLevel;
use volumetrik_core::model::format::{format_count, format_size};

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_error = egui::Color32::from_rgb(0xf8, 0x71, 0x71);
    let color_success = egui::Color32::from_rgb(0x4a, 0xde, 0x80);

    ui.horizontal(|ui| {
        if let Some(path) = state.dashboard.session().in_flight_path() {
            ui.spinner();
            ui.label(
                egui::RichText::new(format!("{}...", truncate_path(path, 60)))
                    .size(12.0)
                    .color(color_normal),
            );
        } else if let Some(snapshot) = state.dashboard.snapshot() {
            ui.label(
                egui::RichText::new(truncate_path(&snapshot.current_path, 60))
                    .size(12.0)
                    .color(color_normal),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} files", format_count(snapshot.total_files())))
                    .size(12.0)
                    .color(color_normal),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format_size(snapshot.total_size()))
                    .size(12.0)
                    .color(color_accent),
            );
        } else {
            ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
        }

        // Newest toast rightmost.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for toast in state.toasts.iter().rev() {
                let color = match toast.level {
                    NoticeLevel::Info => color_normal,
                    NoticeLevel::Success => color_success,
                    NoticeLevel::Error => color_error,
                };
                ui.label(egui::RichText::new(&toast.message).size(12.0).color(color));
                ui.separator();
            }
        });
    });
}

/// Truncate a path string to fit within `max_len` characters, replacing the
/// middle with "..." if needed.
fn truncate_path(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        return path.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();
    format!("{head}...{tail}")
}
