/// Folder picker — walks the service's directory listing and sets the
/// scan target.
use crate::state::AppState;
use volumetrik_core::i18n::Text;

enum PickerAction {
    Open(String),
    Choose,
    Close,
}

pub fn browse_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = state.browse.as_ref() else {
        return;
    };
    let title = state.text(Text::SelectFolder);
    let choose_label = state.text(Text::SelectThisFolder);
    let cancel_label = state.text(Text::Cancel);

    let mut open = true;
    let mut action = None;

    egui::Window::new(title)
        .id(egui::Id::new("browse_dialog"))
        .open(&mut open)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_size([420.0, 380.0])
        .show(ctx, |ui| {
            if let Some(error) = &dialog.error {
                ui.label(
                    egui::RichText::new(error.as_str())
                        .color(egui::Color32::from_rgb(0xf8, 0x71, 0x71)),
                );
            }

            let Some(listing) = &dialog.listing else {
                return;
            };

            ui.horizontal(|ui| {
                let up = ui.add_enabled(listing.parent.is_some(), egui::Button::new("⬆"));
                if up.clicked() {
                    action = listing.parent.clone().map(PickerAction::Open);
                }
                ui.label(egui::RichText::new(listing.current.as_str()).strong());
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(280.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for name in &listing.directories {
                        if ui.selectable_label(false, format!("📁 {name}")).clicked() {
                            action = Some(PickerAction::Open(listing.child_path(name)));
                        }
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button(choose_label).clicked() {
                    action = Some(PickerAction::Choose);
                }
                if ui.button(cancel_label).clicked() {
                    action = Some(PickerAction::Close);
                }
            });
        });

    if !open {
        action = Some(PickerAction::Close);
    }
    match action {
        Some(PickerAction::Open(path)) => state.browse_to(&path),
        Some(PickerAction::Choose) => state.choose_browsed(),
        Some(PickerAction::Close) => state.browse = None,
        None => {}
    }
}
