/// Top action bar -- path field, scan controls, palette, theme and settings.
use crate::state::AppState;
use egui::Ui;
use volumetrik_core::dashboard::Intent;
use volumetrik_core::i18n::Text;
use volumetrik_core::view::Palette;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("📊 Volumetrik")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Path field. Enter scans, like the scan button.
        let hint = state.text(Text::EnterPath);
        let field = ui.add(
            egui::TextEdit::singleline(&mut state.path_input)
                .hint_text(hint)
                .desired_width(320.0),
        );
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            let path = state.path_input.clone();
            state.dispatch(Intent::RequestScan(path));
        }

        if ui
            .button("📁")
            .on_hover_text(state.text(Text::SelectFolder))
            .clicked()
        {
            state.open_browser();
        }

        let busy = state.dashboard.is_busy();
        let label = if busy {
            format!("⏹ {}", state.text(Text::Stop))
        } else {
            format!("▶ {}", state.text(Text::Scan))
        };
        if ui
            .add(egui::Button::new(label).min_size(egui::vec2(80.0, 28.0)))
            .clicked()
        {
            state.toggle_scan();
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("⚙")
                .on_hover_text(state.text(Text::Settings))
                .clicked()
            {
                state.open_settings();
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let dark = state.dashboard.theme().is_dark();
            if ui.button(if dark { "☀" } else { "🌙" }).clicked() {
                state.dispatch(Intent::ToggleTheme);
            }

            if ui
                .button("⟲")
                .on_hover_text(state.text(Text::ResetLayout))
                .clicked()
            {
                state.reset_layout();
            }

            ui.separator();

            // ── Palette ───────────────────────────────────────────
            let current = state.dashboard.palette();
            let mut chosen = None;
            egui::ComboBox::from_id_salt("palette")
                .selected_text(state.text(current.label()))
                .show_ui(ui, |ui| {
                    for palette in Palette::ALL {
                        if ui
                            .selectable_label(palette == current, state.text(palette.label()))
                            .clicked()
                        {
                            chosen = Some(palette);
                        }
                    }
                });
            ui.label(
                egui::RichText::new(state.text(Text::ColorPalette))
                    .size(12.0)
                    .color(ui.visuals().weak_text_color()),
            );
            if let Some(palette) = chosen.filter(|p| *p != current) {
                state.dispatch(Intent::SetPalette(palette));
            }
        });
    });
}
