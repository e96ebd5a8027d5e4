use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// `(sin(2πt) + 1) / 2`, a smooth oscillator in `[0, 1]` with period 1.
pub fn unit_sine(t: f64) -> f64 {
    ((TAU * t).sin() + 1.0) * 0.5
}

/// `sin(2πt)`.
pub fn wave(t: f64) -> f64 {
    (TAU * t).sin()
}

/// Fractional part for non-negative inputs, wrapped into `[0, 1)` for negative ones.
pub fn fract(v: f64) -> f64 {
    v.rem_euclid(1.0)
}

/// Index hash `((i * mul + add) mod 100) / 100`.
///
/// All per-entity pseudo-randomness in the scene comes from this family of formulas.
pub fn hash_fraction(i: u64, mul: u64, add: u64) -> f64 {
    ((i * mul + add) % 100) as f64 / 100.0
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Scalar cubic Bernstein polynomial.
pub fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}
