//! Normalized RGB pixel.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Two channels closer than this compare equal. 8-bit quantization on
/// every decode/encode makes exact comparison useless.
pub const PIXEL_EPSILON: f64 = 1e-2;

/// Scale between 8-bit channel values and the normalized range.
const MAX_COLOR: f64 = 255.0;

/// RGB pixel with every channel kept in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pixel {
    r: f64,
    g: f64,
    b: f64,
}

/// NaN maps to 0.0; `f64::clamp` would pass it through.
#[inline]
fn clamp_channel(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl Pixel {
    pub const BLACK: Pixel = Pixel { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Pixel = Pixel { r: 1.0, g: 1.0, b: 1.0 };

    /// Builds a pixel from floating-point channels, clamping each one.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Builds a pixel from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / MAX_COLOR,
            f64::from(g) / MAX_COLOR,
            f64::from(b) / MAX_COLOR,
        )
    }

    /// Converts back to 8-bit channels, truncating.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r * MAX_COLOR) as u8,
            (self.g * MAX_COLOR) as u8,
            (self.b * MAX_COLOR) as u8,
        ]
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn channels(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    pub fn set(&mut self, r: f64, g: f64, b: f64) {
        *self = Self::new(r, g, b);
    }
}

impl From<(f64, f64, f64)> for Pixel {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self::new(r, g, b)
    }
}

impl PartialEq for Pixel {
    fn eq(&self, other: &Self) -> bool {
        (self.r - other.r).abs() < PIXEL_EPSILON
            && (self.g - other.g).abs() < PIXEL_EPSILON
            && (self.b - other.b).abs() < PIXEL_EPSILON
    }
}

impl AddAssign for Pixel {
    fn add_assign(&mut self, rhs: Self) {
        self.set(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b);
    }
}

impl Add for Pixel {
    type Output = Pixel;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl MulAssign<f64> for Pixel {
    fn mul_assign(&mut self, rhs: f64) {
        self.set(self.r * rhs, self.g * rhs, self.b * rhs);
    }
}

impl Mul<f64> for Pixel {
    type Output = Pixel;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

/// Per-channel scaling.
impl MulAssign<(f64, f64, f64)> for Pixel {
    fn mul_assign(&mut self, (r, g, b): (f64, f64, f64)) {
        self.set(self.r * r, self.g * g, self.b * b);
    }
}

impl Mul<(f64, f64, f64)> for Pixel {
    type Output = Pixel;

    fn mul(mut self, rhs: (f64, f64, f64)) -> Self::Output {
        self *= rhs;
        self
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "({}, {}, {})", r, g, b)
    }
}
