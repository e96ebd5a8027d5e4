use crate::foundation::color::Color;

/// Palette selection for the sky, stars, moon and clouds.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkyTheme {
    #[default]
    NightSky,
    WinterMorning,
}

/// Every theme-dependent color and constant used by the sky layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemePalette {
    /// Sky gradient stops at `sky_phase = 0`.
    pub sky_base: [Color; 3],
    /// Sky gradient stops at `sky_phase = 1`.
    pub sky_shifted: [Color; 3],
    pub star: Color,
    pub star_glow_alpha: f64,
    /// Star base radius in reference pixels.
    pub star_radius_ref_px: f64,
    pub moon: Color,
    /// Crescent mask color; matches the first base sky stop.
    pub moon_mask: Color,
    pub cloud_body: Color,
    pub cloud_highlight: Color,
    pub cloud_shadow: Color,
    pub cloud_alpha: f64,
}

const NIGHT: ThemePalette = ThemePalette {
    sky_base: [
        Color::from_argb(0xFF0B1026),
        Color::from_argb(0xFF152044),
        Color::from_argb(0xFF1F2D5E),
    ],
    sky_shifted: [
        Color::from_argb(0xFF2B1308),
        Color::from_argb(0xFF7A2E12),
        Color::from_argb(0xFFFF6A1A),
    ],
    star: Color::from_argb(0xFFFFF9C4),
    star_glow_alpha: 0.25,
    star_radius_ref_px: 5.0,
    moon: Color::from_argb(0xFFFFF3E0),
    moon_mask: Color::from_argb(0xFF0B1026),
    cloud_body: Color::from_argb(0xFF2B3A52),
    cloud_highlight: Color::from_argb(0xFF3A4A62),
    cloud_shadow: Color::from_argb(0xFF1A2333),
    cloud_alpha: 0.6,
};

const MORNING: ThemePalette = ThemePalette {
    sky_base: [
        Color::from_argb(0xFFE3F2FD),
        Color::from_argb(0xFFBBDEFB),
        Color::from_argb(0xFF90CAF9),
    ],
    sky_shifted: [
        Color::from_argb(0xFFB3E5FC),
        Color::from_argb(0xFF81D4FA),
        Color::from_argb(0xFF4FC3F7),
    ],
    star: Color::from_argb(0xFFFFFDE7),
    star_glow_alpha: 0.20,
    star_radius_ref_px: 4.0,
    moon: Color::from_argb(0xFFFFFDE7),
    moon_mask: Color::from_argb(0xFF90CAF9),
    cloud_body: Color::from_argb(0xFFE1F5FE),
    cloud_highlight: Color::WHITE,
    cloud_shadow: Color::from_argb(0xFFB3E5FC),
    cloud_alpha: 0.7,
};

impl SkyTheme {
    pub fn palette(self) -> &'static ThemePalette {
        match self {
            Self::NightSky => &NIGHT,
            Self::WinterMorning => &MORNING,
        }
    }
}
