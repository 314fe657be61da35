use serde::Deserialize;

/// 8-bit RGB, implicitly opaque. Arithmetic is done in f64 and clamped back
/// into a channel on every write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const MAX_VAL: u8 = 255;

    pub const fn of_rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn black() -> Self {
        Self::of_rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::of_rgb(255, 255, 255)
    }

    fn channels(&self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    fn from_channels(c: [f64; 3]) -> Self {
        Self::of_rgb(clamp_channel(c[0]), clamp_channel(c[1]), clamp_channel(c[2]))
    }

    pub fn scale(&self, f: f64) -> Color {
        let [r, g, b] = self.channels();
        Self::from_channels([r * f, g * f, b * f])
    }

    pub fn add(&self, c: &Color) -> Color {
        let [r0, g0, b0] = self.channels();
        let [r1, g1, b1] = c.channels();
        Self::from_channels([r0 + r1, g0 + g1, b0 + b1])
    }

    /// Linear interpolation towards `other`: `w = 0` keeps `self`, `w = 1`
    /// yields `other`. Out-of-range weights are not rejected, only the
    /// result is clamped.
    pub fn blend(&self, other: &Color, w: f64) -> Color {
        let base = self.channels();
        let other = other.channels();
        let mix = |i: usize| base[i] * (1. - w) + other[i] * w;
        Self::from_channels([mix(0), mix(1), mix(2)])
    }

    pub fn to_int_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Self::of_rgb(c[0], c[1], c[2])
    }
}

/// Clamp to `[0, 255]` and truncate toward zero. NaN maps to 0.
pub fn clamp_channel(v: f64) -> u8 {
    if v.is_nan() {
        0
    } else {
        v.clamp(0., 255.) as u8
    }
}
