/// Period of the fast light / topper twinkle oscillator.
pub const TWINKLE_PERIOD_MS: u64 = 2200;
/// Period of the tree sway oscillator.
pub const SWAY_PERIOD_MS: u64 = 6200;
/// Period of the sky cycle; also drives cloud drift and snowfall.
pub const SKY_PERIOD_MS: u64 = 18000;
/// Period of the star-field twinkle oscillator.
pub const STAR_TWINKLE_PERIOD_MS: u64 = 3500;

/// The four independent repeating phases of the scene, each in `[0, 1)`.
///
/// Phases are derived from absolute elapsed time, never accumulated from frame deltas, so a
/// long-running host cannot drift.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct TimePhases {
    pub twinkle: f64,
    pub sway: f64,
    pub sky: f64,
    pub star_twinkle: f64,
}

impl TimePhases {
    pub fn at(elapsed_ms: u64) -> Self {
        Self {
            twinkle: phase(elapsed_ms, TWINKLE_PERIOD_MS),
            sway: phase(elapsed_ms, SWAY_PERIOD_MS),
            sky: phase(elapsed_ms, SKY_PERIOD_MS),
            star_twinkle: phase(elapsed_ms, STAR_TWINKLE_PERIOD_MS),
        }
    }
}

/// `(elapsed mod period) / period`, computed in integer space before the division.
pub fn phase(elapsed_ms: u64, period_ms: u64) -> f64 {
    if period_ms == 0 {
        return 0.0;
    }
    (elapsed_ms % period_ms) as f64 / period_ms as f64
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
