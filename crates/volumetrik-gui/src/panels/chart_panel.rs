/// Top file types charts — magnitude bars scaled to the largest type and a
/// share donut.
///
/// Both are laid out from the widget's current size every frame, so a
/// resized widget is redrawn at its new size.
use crate::theme::to_color32;
use egui::{Pos2, Rect, Stroke, Ui, Vec2};
use std::f32::consts::TAU;
use volumetrik_core::model::format::{format_count, format_percent, format_size};
use volumetrik_core::view::{ChartsView, DashboardViews};

const LABEL_WIDTH: f32 = 70.0;
const BAR_HEIGHT: f32 = 14.0;

/// Donut ring thickness as a fraction of its outer radius.
const RING_FRACTION: f32 = 0.35;

/// Polyline points per full turn of the donut.
const ARC_RESOLUTION: f32 = 128.0;

pub fn chart_panel(ui: &mut Ui, views: &DashboardViews) {
    let color_normal = ui.visuals().text_color();
    let color_muted = ui.visuals().weak_text_color();
    let bar_track_bg = ui.visuals().extreme_bg_color;

    let ChartsView::Ready {
        slices,
        max_size,
        total_size,
    } = &views.charts
    else {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(views.labels.no_data).color(color_muted));
        });
        return;
    };

    for slice in slices {
        ui.horizontal(|ui| {
            ui.add_sized(
                Vec2::new(LABEL_WIDTH, BAR_HEIGHT),
                egui::Label::new(
                    egui::RichText::new(&slice.label)
                        .color(color_normal)
                        .size(12.0),
                )
                .truncate(),
            );

            let bar_width = (ui.available_width() - 140.0).max(20.0);
            let (bar_rect, response) =
                ui.allocate_exact_size(Vec2::new(bar_width, BAR_HEIGHT), egui::Sense::hover());
            let painter = ui.painter_at(bar_rect);
            painter.rect_filled(bar_rect, 2.0, bar_track_bg);

            let fraction = if *max_size > 0 {
                slice.size as f32 / *max_size as f32
            } else {
                0.0
            };
            let fill_w = bar_width * fraction.clamp(0.0, 1.0);
            if fill_w > 0.5 {
                let fill_rect = Rect::from_min_size(bar_rect.min, Vec2::new(fill_w, BAR_HEIGHT));
                painter.rect_filled(fill_rect, 2.0, to_color32(slice.color));
            }
            response.on_hover_text(format!(
                "{} {}",
                format_count(slice.file_count),
                views.labels.files
            ));

            ui.label(
                egui::RichText::new(format_size(slice.size))
                    .color(color_normal)
                    .size(12.0),
            );
            ui.label(
                egui::RichText::new(format!("({})", format_percent(slice.share)))
                    .color(color_muted)
                    .size(11.0),
            );
        });
        ui.add_space(2.0);
    }

    ui.add_space(6.0);
    let side = ui.available_width().min(ui.available_height()).clamp(60.0, 220.0);
    ui.vertical_centered(|ui| {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), egui::Sense::hover());
        donut(ui, rect, slices.iter().map(|s| (s.share as f32, to_color32(s.color))));
        response.on_hover_text(format_size(*total_size));
    });
}

/// Paint a ring divided into arcs, one per `(percent, colour)`, starting at
/// twelve o'clock and running clockwise.
fn donut(ui: &Ui, rect: Rect, shares: impl Iterator<Item = (f32, egui::Color32)>) {
    let painter = ui.painter_at(rect);
    let outer = rect.width().min(rect.height()) / 2.0;
    let thickness = outer * RING_FRACTION;
    let radius = outer - thickness / 2.0;
    let center = rect.center();

    let mut start = -TAU / 4.0;
    for (percent, color) in shares {
        let sweep = TAU * (percent / 100.0).clamp(0.0, 1.0);
        if sweep <= f32::EPSILON {
            continue;
        }
        let steps = ((sweep / TAU) * ARC_RESOLUTION).ceil().max(2.0) as usize;
        let points: Vec<Pos2> = (0..=steps)
            .map(|i| {
                let angle = start + sweep * i as f32 / steps as f32;
                center + radius * Vec2::angled(angle)
            })
            .collect();
        painter.add(egui::Shape::line(points, Stroke::new(thickness, color)));
        start += sweep;
    }
}
