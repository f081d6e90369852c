/// Proportional size bar widget -- shows relative size with colour coding.
use egui::{Color32, Rect, Response, Ui, Vec2};

/// Draw a horizontal bar filled to `percent` of `width`.
pub fn size_bar(ui: &mut Ui, percent: f32, width: f32, height: f32, fill: Color32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);

    let fill_w = width * (percent / 100.0).clamp(0.0, 1.0);
    if fill_w > 0.5 {
        let fill_rect = Rect::from_min_size(rect.min, Vec2::new(fill_w, height));
        painter.rect_filled(fill_rect, 2.0, fill);
    }
}

/// Draw consecutive segments side by side across `width`. Each segment is
/// `(percent, colour)`; the remainder stays as background track.
pub fn stacked_bar(ui: &mut Ui, segments: &[(f32, Color32)], width: f32, height: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 3.0, ui.visuals().extreme_bg_color);

    let mut x = rect.min.x;
    for &(percent, color) in segments {
        let w = width * (percent / 100.0).clamp(0.0, 1.0);
        if w <= 0.5 {
            continue;
        }
        let right = (x + w).min(rect.max.x);
        painter.rect_filled(
            Rect::from_min_max(egui::pos2(x, rect.min.y), egui::pos2(right, rect.max.y)),
            0.0,
            color,
        );
        x = right;
    }
    response
}
