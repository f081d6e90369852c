/// Disk capacity widget — used and free space of the scanned directory's disk.
use crate::widgets::size_bar::stacked_bar;
use egui::Ui;
use volumetrik_core::model::format::{format_percent, format_size};
use volumetrik_core::view::{CapacityView, DashboardViews};

pub fn capacity_panel(ui: &mut Ui, views: &DashboardViews) {
    let labels = &views.labels;
    let color_muted = ui.visuals().weak_text_color();

    let CapacityView::Known {
        used,
        available,
        total,
        used_percent,
    } = views.capacity
    else {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(labels.capacity_unknown).color(color_muted));
        });
        return;
    };

    let used_color = crate::theme::VolumetrikTheme::for_mode(views.theme).bar_color(used_percent as f32);
    let width = ui.available_width();
    stacked_bar(ui, &[(used_percent as f32, used_color)], width, 18.0);
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}:", labels.used)).color(color_muted));
        ui.label(format!("{} ({})", format_size(used), format_percent(used_percent)));
        ui.separator();
        ui.label(egui::RichText::new(format!("{}:", labels.available)).color(color_muted));
        ui.label(format_size(available));
        ui.separator();
        ui.label(egui::RichText::new(format!("{}:", labels.total)).color(color_muted));
        ui.label(egui::RichText::new(format_size(total)).strong());
    });
}
