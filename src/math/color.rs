use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq};

use super::EPSILON;

/// An RGB color with unclamped floating-point channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Creates a new color.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Black `(0, 0, 0)`.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// White `(1, 1, 1)`.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Component-wise (Hadamard) product.
    #[must_use]
    pub fn hadamard(&self, other: &Color) -> Color {
        Color::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    /// Scales each channel to `[0, max]`, rounding to the nearest integer.
    #[must_use]
    pub fn to_scaled(&self, max: u16) -> [u16; 3] {
        let scale = |c: f64| -> u16 {
            let scaled = (c * f64::from(max)).round().clamp(0.0, f64::from(max));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let value = scaled as u16;
            value
        };
        [scale(self.r), scale(self.g), scale(self.b)]
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, rhs: f64) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

impl Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        self.hadamard(&rhs)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::black(), Add::add)
    }
}

impl AbsDiffEq for Color {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.r, &other.r, epsilon)
            && f64::abs_diff_eq(&self.g, &other.g, epsilon)
            && f64::abs_diff_eq(&self.b, &other.b, epsilon)
    }
}

impl RelativeEq for Color {
    fn default_max_relative() -> f64 {
        EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.r, &other.r, epsilon, max_relative)
            && f64::relative_eq(&self.g, &other.g, epsilon, max_relative)
            && f64::relative_eq(&self.b, &other.b, epsilon, max_relative)
    }
}
