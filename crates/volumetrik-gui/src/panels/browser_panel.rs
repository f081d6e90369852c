/// File browser widget — the sortable table of the scanned directory.
///
/// Header clicks change the sort column (a second click on the same column
/// flips the direction). Directory rows and the parent row navigate.
use crate::theme::VolumetrikTheme;
use crate::widgets::size_bar::size_bar;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use volumetrik_core::analysis::{SortColumn, SortDirection, SortState};
use volumetrik_core::dashboard::Intent;
use volumetrik_core::view::DashboardViews;

const ROW_HEIGHT: f32 = 22.0;

pub fn browser_panel(ui: &mut Ui, views: &DashboardViews) -> Option<Intent> {
    let table = &views.file_table;
    let labels = &views.labels;
    let theme = VolumetrikTheme::for_mode(views.theme);
    let color_muted = ui.visuals().weak_text_color();

    if views.current_path.is_none() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(labels.no_data).color(color_muted));
        });
        return None;
    }

    let mut action = None;

    TableBuilder::new(ui)
        .id_salt("file_browser")
        .striped(true)
        .resizable(true)
        .vscroll(true)
        .auto_shrink([false, false])
        .column(Column::remainder().at_least(160.0).clip(true))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(90.0))
        .header(ROW_HEIGHT, |mut header| {
            let columns = [
                (SortColumn::Name, labels.name),
                (SortColumn::Size, labels.size),
                (SortColumn::Percent, labels.percent),
                (SortColumn::Files, labels.files),
                (SortColumn::Modified, labels.modified),
            ];
            for (column, label) in columns {
                header.col(|ui| {
                    if header_button(ui, label, column, table.sort) {
                        action = Some(Intent::ChangeSortColumn(column));
                    }
                });
            }
        })
        .body(|mut body| {
            if table.parent.is_some() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        let up = egui::RichText::new(format!("⬆ {}", labels.up)).strong();
                        if clickable(ui, up) {
                            action = Some(Intent::NavigateParent);
                        }
                    });
                    for _ in 0..4 {
                        row.col(|_| {});
                    }
                });
            }

            body.rows(ROW_HEIGHT, table.rows.len(), |mut row| {
                let entry = &table.rows[row.index()];
                row.col(|ui| {
                    if entry.is_dir {
                        let name = egui::RichText::new(format!("📁 {}", entry.name))
                            .color(theme.folder_icon);
                        if clickable(ui, name) {
                            action = Some(Intent::SelectDirectory(entry.path.clone()));
                        }
                    } else {
                        ui.label(format!("📄 {}", entry.name));
                    }
                });
                row.col(|ui| {
                    ui.label(entry.size_text.as_str());
                });
                row.col(|ui| {
                    ui.horizontal(|ui| {
                        let percent = entry.percent as f32;
                        size_bar(ui, percent, 60.0, 8.0, theme.bar_color(percent));
                        ui.label(
                            egui::RichText::new(&entry.percent_text)
                                .size(11.0)
                                .color(color_muted),
                        );
                    });
                });
                row.col(|ui| {
                    ui.label(entry.file_count_text.as_str());
                });
                row.col(|ui| {
                    ui.label(egui::RichText::new(&entry.modified_text).color(color_muted));
                });
            });
        });

    action
}

/// A column header that shows the sort arrow when active. Returns `true`
/// when clicked.
fn header_button(ui: &mut Ui, label: &str, column: SortColumn, sort: SortState) -> bool {
    let text = if sort.column == column {
        let arrow = match sort.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        };
        egui::RichText::new(format!("{label} {arrow}")).strong()
    } else {
        egui::RichText::new(label).strong()
    };
    ui.add(egui::Button::new(text).frame(false)).clicked()
}

fn clickable(ui: &mut Ui, text: egui::RichText) -> bool {
    ui.add(egui::Label::new(text).sense(egui::Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}
