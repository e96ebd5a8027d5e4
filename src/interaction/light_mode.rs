use crate::foundation::core::Point;

/// Fairy-light behaviour, advanced by taps.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LightMode {
    /// Bulbs walk a six-stop hue cycle.
    #[default]
    Rainbow = 0,
    /// Bulbs keep their palette color.
    Original = 1,
    /// Bulbs are drawn as dim gray dots.
    Off = 2,
}

impl LightMode {
    pub const ALL: [Self; 3] = [Self::Rainbow, Self::Original, Self::Off];

    /// `(mode + 1) mod 3`.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Mode for an index, wrapping modulo 3.
    pub fn from_index(i: u8) -> Self {
        match i % 3 {
            0 => Self::Rainbow,
            1 => Self::Original,
            _ => Self::Off,
        }
    }
}

/// Tap handler. The point is accepted for hosts that deliver one but does not affect the result.
pub fn on_tap(mode: LightMode, _point: Point) -> LightMode {
    mode.next()
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/light_mode.rs"]
mod tests;
