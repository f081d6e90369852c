/// Colour scheme and visual theme for Volumetrik.
///
/// Chrome colours live here; series colours come from the active palette
/// in `volumetrik-core` and are converted with [`to_color32`].
use egui::{Color32, Stroke, Visuals};
use volumetrik_core::view::{Rgb, ThemeMode};

/// Semantic colours for the dashboard chrome.
pub struct VolumetrikTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub folder_icon: Color32,
    pub error: Color32,
    pub success: Color32,
    pub bar_small: Color32,
    pub bar_large: Color32,
    pub bar_track: Color32,
    pub separator: Color32,
    pub selection: Color32,
}

impl VolumetrikTheme {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x0f, 0x17, 0x2a),
            surface: Color32::from_rgb(0x1e, 0x29, 0x3b),
            surface_hover: Color32::from_rgb(0x33, 0x41, 0x55),
            text_primary: Color32::from_rgb(0xe2, 0xe8, 0xf0),
            text_secondary: Color32::from_rgb(0xcb, 0xd5, 0xe1),
            text_muted: Color32::from_rgb(0x94, 0xa3, 0xb8),
            accent: Color32::from_rgb(0x38, 0xbd, 0xf8),
            folder_icon: Color32::from_rgb(0xfa, 0xcc, 0x15),
            error: Color32::from_rgb(0xf8, 0x71, 0x71),
            success: Color32::from_rgb(0x4a, 0xde, 0x80),
            bar_small: Color32::from_rgb(0x4a, 0xde, 0x80),
            bar_large: Color32::from_rgb(0xf8, 0x71, 0x71),
            bar_track: Color32::from_rgb(0x33, 0x41, 0x55),
            separator: Color32::from_rgb(0x33, 0x41, 0x55),
            selection: Color32::from_rgb(0x1e, 0x3a, 0x5f),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf1, 0xf5, 0xf9),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe2, 0xe8, 0xf0),
            text_primary: Color32::from_rgb(0x0f, 0x17, 0x2a),
            text_secondary: Color32::from_rgb(0x33, 0x41, 0x55),
            text_muted: Color32::from_rgb(0x64, 0x74, 0x8b),
            accent: Color32::from_rgb(0x02, 0x84, 0xc7),
            folder_icon: Color32::from_rgb(0xca, 0x8a, 0x04),
            error: Color32::from_rgb(0xdc, 0x26, 0x26),
            success: Color32::from_rgb(0x16, 0xa3, 0x4a),
            bar_small: Color32::from_rgb(0x16, 0xa3, 0x4a),
            bar_large: Color32::from_rgb(0xdc, 0x26, 0x26),
            bar_track: Color32::from_rgb(0xe2, 0xe8, 0xf0),
            separator: Color32::from_rgb(0xcb, 0xd5, 0xe1),
            selection: Color32::from_rgba_premultiplied(0x02, 0x84, 0xc7, 0x30),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Bar colour for a share of the parent, from `bar_small` at 0 % to
    /// `bar_large` at 100 %.
    pub fn bar_color(&self, percent: f32) -> Color32 {
        let t = (percent / 100.0).clamp(0.0, 1.0);
        lerp_color(self.bar_small, self.bar_large, t)
    }
}

/// Convert a palette colour.
pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Linear interpolation between two colours.
fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        (a.r() as f32 * (1.0 - t) + b.r() as f32 * t) as u8,
        (a.g() as f32 * (1.0 - t) + b.g() as f32 * t) as u8,
        (a.b() as f32 * (1.0 - t) + b.b() as f32 * t) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_color_spans_the_gradient() {
        let theme = VolumetrikTheme::dark();
        assert_eq!(theme.bar_color(0.0), theme.bar_small);
        assert_eq!(theme.bar_color(100.0), theme.bar_large);
        assert_eq!(theme.bar_color(250.0), theme.bar_large);
    }

    #[test]
    fn light_theme_is_light() {
        assert!(VolumetrikTheme::for_mode(ThemeMode::Light).background.r() >= 128);
        assert!(VolumetrikTheme::for_mode(ThemeMode::Dark).background.r() < 128);
    }
}
