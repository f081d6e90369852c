/// Chart palettes and the light/dark theme switch.
///
/// Colours are plain RGB so the core stays free of UI dependencies; the
/// frontend converts them to its own colour type.
use crate::i18n::Text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        [Self::Dark, Self::Light].into_iter().find(|t| t.id() == id)
    }
}

/// Number of distinct colours per palette. Further series wrap around.
pub const PALETTE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Default,
    Ocean,
    Sunset,
    Forest,
    Royal,
}

impl Palette {
    pub const ALL: [Palette; 5] = [
        Palette::Default,
        Palette::Ocean,
        Palette::Sunset,
        Palette::Forest,
        Palette::Royal,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Forest => "forest",
            Self::Royal => "purple",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn label(self) -> Text {
        match self {
            Self::Default => Text::PaletteDefault,
            Self::Ocean => Text::PaletteOcean,
            Self::Sunset => Text::PaletteSunset,
            Self::Forest => Text::PaletteForest,
            Self::Royal => Text::PaletteRoyal,
        }
    }

    /// Series colours for `theme`. Light themes use darker shades so bars
    /// keep their contrast on a white background.
    pub fn colors(self, theme: ThemeMode) -> [Rgb; PALETTE_SIZE] {
        match (self, theme) {
            (Self::Default, ThemeMode::Dark) => [
                Rgb(0x3b, 0x82, 0xf6),
                Rgb(0x10, 0xb9, 0x81),
                Rgb(0xf5, 0x9e, 0x0b),
                Rgb(0xef, 0x44, 0x44),
                Rgb(0x8b, 0x5c, 0xf6),
                Rgb(0x64, 0x74, 0x8b),
            ],
            (Self::Default, ThemeMode::Light) => [
                Rgb(0x25, 0x63, 0xeb),
                Rgb(0x05, 0x96, 0x69),
                Rgb(0xd9, 0x77, 0x06),
                Rgb(0xdc, 0x26, 0x26),
                Rgb(0x7c, 0x3a, 0xed),
                Rgb(0x47, 0x55, 0x69),
            ],
            (Self::Ocean, ThemeMode::Dark) => [
                Rgb(0x0e, 0xa5, 0xe9),
                Rgb(0x06, 0xb6, 0xd4),
                Rgb(0x3b, 0x82, 0xf6),
                Rgb(0x14, 0xb8, 0xa6),
                Rgb(0x63, 0x66, 0xf1),
                Rgb(0x67, 0xe8, 0xf9),
            ],
            (Self::Ocean, ThemeMode::Light) => [
                Rgb(0x02, 0x84, 0xc7),
                Rgb(0x08, 0x91, 0xb2),
                Rgb(0x25, 0x63, 0xeb),
                Rgb(0x0d, 0x94, 0x88),
                Rgb(0x4f, 0x46, 0xe5),
                Rgb(0x15, 0x5e, 0x75),
            ],
            (Self::Sunset, ThemeMode::Dark) => [
                Rgb(0xf9, 0x73, 0x16),
                Rgb(0xef, 0x44, 0x44),
                Rgb(0xf5, 0x9e, 0x0b),
                Rgb(0xec, 0x48, 0x99),
                Rgb(0xea, 0xb3, 0x08),
                Rgb(0xfb, 0x71, 0x85),
            ],
            (Self::Sunset, ThemeMode::Light) => [
                Rgb(0xea, 0x58, 0x0c),
                Rgb(0xdc, 0x26, 0x26),
                Rgb(0xd9, 0x77, 0x06),
                Rgb(0xdb, 0x27, 0x77),
                Rgb(0xca, 0x8a, 0x04),
                Rgb(0xe1, 0x1d, 0x48),
            ],
            (Self::Forest, ThemeMode::Dark) => [
                Rgb(0x22, 0xc5, 0x5e),
                Rgb(0x84, 0xcc, 0x16),
                Rgb(0x10, 0xb9, 0x81),
                Rgb(0xa3, 0xe6, 0x35),
                Rgb(0x16, 0xa3, 0x4a),
                Rgb(0x6b, 0x72, 0x80),
            ],
            (Self::Forest, ThemeMode::Light) => [
                Rgb(0x15, 0x80, 0x3d),
                Rgb(0x4d, 0x7c, 0x0f),
                Rgb(0x04, 0x78, 0x57),
                Rgb(0x65, 0xa3, 0x0d),
                Rgb(0x16, 0x65, 0x34),
                Rgb(0x4b, 0x55, 0x63),
            ],
            (Self::Royal, ThemeMode::Dark) => [
                Rgb(0xa8, 0x55, 0xf7),
                Rgb(0x8b, 0x5c, 0xf6),
                Rgb(0xd9, 0x46, 0xef),
                Rgb(0x63, 0x66, 0xf1),
                Rgb(0xc0, 0x84, 0xfc),
                Rgb(0xf4, 0x72, 0xb6),
            ],
            (Self::Royal, ThemeMode::Light) => [
                Rgb(0x93, 0x33, 0xea),
                Rgb(0x7c, 0x3a, 0xed),
                Rgb(0xc0, 0x26, 0xd3),
                Rgb(0x4f, 0x46, 0xe5),
                Rgb(0x6b, 0x21, 0xa8),
                Rgb(0xdb, 0x27, 0x77),
            ],
        }
    }

    pub fn color(self, theme: ThemeMode, index: usize) -> Rgb {
        self.colors(theme)[index % PALETTE_SIZE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for palette in Palette::ALL {
            assert_eq!(Palette::from_id(palette.id()), Some(palette));
        }
        assert_eq!(Palette::from_id("purple"), Some(Palette::Royal));
        assert_eq!(Palette::from_id("crimson"), None);
    }

    #[test]
    fn colors_wrap_around() {
        let p = Palette::Ocean;
        assert_eq!(p.color(ThemeMode::Dark, 0), p.color(ThemeMode::Dark, PALETTE_SIZE));
        assert_ne!(p.color(ThemeMode::Dark, 0), p.color(ThemeMode::Light, 0));
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert!(!ThemeMode::Dark.toggled().is_dark());
    }

    #[test]
    fn theme_ids_round_trip() {
        for theme in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(ThemeMode::from_id(theme.id()), Some(theme));
        }
        assert_eq!(ThemeMode::from_id("sepia"), None);
    }
}
