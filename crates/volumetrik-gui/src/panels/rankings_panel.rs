/// Largest files / largest directories widgets.
use crate::theme::VolumetrikTheme;
use crate::widgets::size_bar::size_bar;
use egui::Ui;
use volumetrik_core::dashboard::Intent;
use volumetrik_core::view::{DashboardViews, RankingView};

/// Draw one ranking. Clicking a directory navigates into it; the parent
/// row, shown when there is one, navigates up.
pub fn rankings_panel(
    ui: &mut Ui,
    views: &DashboardViews,
    ranking: &RankingView,
) -> Option<Intent> {
    let color_muted = ui.visuals().weak_text_color();
    if ranking.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(views.labels.no_data).color(color_muted));
        });
        return None;
    }

    let theme = VolumetrikTheme::for_mode(views.theme);
    let largest = ranking.rows.first().map_or(0, |r| r.size).max(1);
    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new(ui.id().with("ranking"))
                .num_columns(3)
                .striped(true)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    if ranking.parent.is_some() {
                        let up = egui::RichText::new(format!("⬆ {}", views.labels.up)).strong();
                        let label = egui::Label::new(up).sense(egui::Sense::click());
                        if ui
                            .add(label)
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .clicked()
                        {
                            action = Some(Intent::NavigateParent);
                        }
                        ui.end_row();
                    }

                    if ranking.rows.is_empty() {
                        ui.label(egui::RichText::new(views.labels.no_data).color(color_muted));
                        ui.end_row();
                    }

                    for row in &ranking.rows {
                        let icon = if row.is_dir { "📁" } else { "📄" };
                        let name = egui::RichText::new(format!("{icon} {}", row.name));
                        if row.is_dir {
                            let label = egui::Label::new(name.color(theme.folder_icon))
                                .sense(egui::Sense::click());
                            let link = ui
                                .add(label)
                                .on_hover_cursor(egui::CursorIcon::PointingHand)
                                .on_hover_text(row.path.as_str());
                            if link.clicked() {
                                action = Some(Intent::SelectDirectory(row.path.clone()));
                            }
                        } else {
                            ui.label(name).on_hover_text(row.path.as_str());
                        }

                        let percent = row.size as f32 / largest as f32 * 100.0;
                        size_bar(ui, percent, 80.0, 8.0, theme.bar_color(percent));
                        ui.label(egui::RichText::new(&row.size_text).strong());
                        ui.end_row();
                    }
                });
        });

    action
}
