/// Storage-by-type widget — one stacked bar with a legend.
use crate::theme::to_color32;
use crate::widgets::size_bar::stacked_bar;
use egui::{Ui, Vec2};
use volumetrik_core::model::format::{format_percent, format_size};
use volumetrik_core::view::{DashboardViews, TypeUsageView};

pub fn type_usage_panel(ui: &mut Ui, views: &DashboardViews) {
    let color_muted = ui.visuals().weak_text_color();

    let TypeUsageView::Bar { segments, .. } = &views.type_usage else {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(views.labels.no_data).color(color_muted));
        });
        return;
    };

    let bar: Vec<(f32, egui::Color32)> = segments
        .iter()
        .map(|s| (s.percent as f32, to_color32(s.color)))
        .collect();
    let width = ui.available_width();
    let response = stacked_bar(ui, &bar, width, 22.0);

    // Hovering the bar names the segment under the pointer.
    let rect = response.rect;
    let hovered = ui.ctx().pointer_hover_pos().and_then(|pointer| {
        let mut left = rect.min.x;
        segments.iter().find(|segment| {
            let right = left + rect.width() * (segment.percent as f32 / 100.0);
            let hit = pointer.x >= left && pointer.x < right;
            left = right;
            hit
        })
    });
    if let Some(segment) = hovered {
        response.on_hover_text_at_pointer(format!(
            "{}: {} ({})",
            segment.extension,
            format_size(segment.size),
            format_percent(segment.percent)
        ));
    }

    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for segment in segments {
            let (dot, _) = ui.allocate_exact_size(Vec2::new(10.0, 10.0), egui::Sense::hover());
            ui.painter_at(dot)
                .circle_filled(dot.center(), 4.0, to_color32(segment.color));
            ui.label(egui::RichText::new(&segment.extension).size(12.0));
            ui.label(
                egui::RichText::new(format_percent(segment.percent))
                    .size(11.0)
                    .color(color_muted),
            );
            ui.add_space(6.0);
        }
    });
}
