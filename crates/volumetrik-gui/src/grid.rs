/// Dashboard grid — maps stored widget geometry to screen rectangles and
/// back.
///
/// The grid is [`GRID_COLUMNS`] wide and stretches across the available
/// width. Row height shrinks with the window so the whole layout stays
/// visible, between [`MIN_ROW_HEIGHT`] and [`MAX_ROW_HEIGHT`].
use egui::{Pos2, Rect, Vec2};
use volumetrik_core::layout::{LayoutEntry, GRID_COLUMNS};

pub const MAX_ROW_HEIGHT: f32 = 50.0;
pub const MIN_ROW_HEIGHT: f32 = 24.0;

/// Gap between neighbouring widgets.
pub const GUTTER: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    origin: Pos2,
    cell_width: f32,
    row_height: f32,
}

impl Grid {
    /// Fit `entries` into `area`.
    pub fn fit(area: Rect, entries: &[LayoutEntry]) -> Self {
        let rows = entries.iter().map(|e| e.y + e.h).max().unwrap_or(1).max(1);
        Self {
            origin: area.min,
            cell_width: (area.width() / GRID_COLUMNS as f32).max(1.0),
            row_height: (area.height() / rows as f32).clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT),
        }
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Screen rectangle of `entry`, inset by half a gutter on each side.
    pub fn rect_of(&self, entry: &LayoutEntry) -> Rect {
        let min = self.origin
            + Vec2::new(
                entry.x as f32 * self.cell_width,
                entry.y as f32 * self.row_height,
            );
        let size = Vec2::new(
            entry.w as f32 * self.cell_width,
            entry.h as f32 * self.row_height,
        );
        Rect::from_min_size(min, size).shrink(GUTTER / 2.0)
    }

    /// Snap a screen rectangle back to grid cells. The result always spans
    /// at least one cell and never leaves the grid columns.
    pub fn snap(&self, entry: &LayoutEntry, rect: Rect) -> LayoutEntry {
        let outer = rect.expand(GUTTER / 2.0);
        let w = ((outer.width() / self.cell_width).round() as u32).clamp(1, GRID_COLUMNS);
        let h = ((outer.height() / self.row_height).round() as u32).max(1);
        let x = (((outer.min.x - self.origin.x) / self.cell_width).round().max(0.0) as u32)
            .min(GRID_COLUMNS - w);
        let y = ((outer.min.y - self.origin.y) / self.row_height).round().max(0.0) as u32;

        LayoutEntry {
            widget_id: entry.widget_id.clone(),
            x,
            y,
            w,
            h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volumetrik_core::layout::{default_layout, WidgetId};

    fn area() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 40.0), Vec2::new(1200.0, 2000.0))
    }

    #[test]
    fn snap_inverts_rect_of() {
        let layout = default_layout();
        let grid = Grid::fit(area(), &layout);
        for entry in &layout {
            assert_eq!(&grid.snap(entry, grid.rect_of(entry)), entry);
        }
    }

    #[test]
    fn row_height_is_clamped() {
        let layout = default_layout();
        let tall = Grid::fit(area(), &layout);
        assert_eq!(tall.row_height(), MAX_ROW_HEIGHT);

        let short = Rect::from_min_size(Pos2::ZERO, Vec2::new(1200.0, 100.0));
        assert_eq!(Grid::fit(short, &layout).row_height(), MIN_ROW_HEIGHT);
    }

    #[test]
    fn snap_keeps_widgets_inside_the_columns() {
        let grid = Grid::fit(area(), &default_layout());
        let entry = LayoutEntry::new(WidgetId::Browser, 6, 0, 6, 10);

        let dragged_off = Rect::from_min_size(Pos2::new(1500.0, -80.0), Vec2::new(500.0, 200.0));
        let snapped = grid.snap(&entry, dragged_off);
        assert!(snapped.x + snapped.w <= GRID_COLUMNS);
        assert_eq!(snapped.y, 0);

        let tiny = Rect::from_min_size(Pos2::new(20.0, 50.0), Vec2::new(5.0, 5.0));
        let snapped = grid.snap(&entry, tiny);
        assert_eq!((snapped.w, snapped.h), (1, 1));
        assert_eq!(snapped.widget_id, "widget-browser");
    }
}
