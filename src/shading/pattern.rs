//! Procedural color patterns.
//!
//! A pattern lives in its own space, placed relative to the object it shades
//! by its [`Transform`]. The scene maps world points into object space; this
//! module only handles the object → pattern step and the color functions.

use crate::error::Result;
use crate::math::{Color, Matrix4, Point3, Transform};

/// The color function of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Alternates `a` and `b` on unit intervals of x.
    Stripe,
    /// Linear blend from `a` to `b` across each unit of x.
    Gradient,
    /// Concentric rings in the xz plane.
    Ring,
    /// 3D checkerboard of unit cubes.
    Checkers,
    /// Linear blend from `a` to `b` along the distance from the y axis.
    RadialGradient,
}

/// A two-color procedural pattern with its own transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    a: Color,
    b: Color,
    transform: Transform,
}

impl Pattern {
    /// Creates a pattern of `kind` with the identity transform.
    #[must_use]
    pub fn new(kind: PatternKind, a: Color, b: Color) -> Self {
        Self {
            kind,
            a,
            b,
            transform: Transform::identity(),
        }
    }

    /// Alternating stripes along x.
    #[must_use]
    pub fn stripe(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Stripe, a, b)
    }

    /// Gradient along x.
    #[must_use]
    pub fn gradient(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Gradient, a, b)
    }

    /// Rings around the y axis.
    #[must_use]
    pub fn ring(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Ring, a, b)
    }

    /// 3D checkers.
    #[must_use]
    pub fn checkers(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Checkers, a, b)
    }

    /// Gradient outward from the y axis.
    #[must_use]
    pub fn radial_gradient(a: Color, b: Color) -> Self {
        Self::new(PatternKind::RadialGradient, a, b)
    }

    /// Returns the pattern with `matrix` as its object → pattern placement.
    ///
    /// # Errors
    ///
    /// Returns an error if `matrix` is not invertible.
    pub fn with_transform(mut self, matrix: Matrix4) -> Result<Self> {
        self.transform = Transform::new(matrix)?;
        Ok(self)
    }

    /// The pattern kind.
    #[must_use]
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The pattern transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Color at a point already in pattern space.
    #[must_use]
    pub fn pattern_at(&self, point: &Point3) -> Color {
        match self.kind {
            PatternKind::Stripe => {
                if point.x.floor().rem_euclid(2.0) == 0.0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::Gradient => {
                let fraction = point.x - point.x.floor();
                self.a + (self.b - self.a) * fraction
            }
            PatternKind::Ring => {
                let distance = point.x.hypot(point.z);
                if distance.floor().rem_euclid(2.0) == 0.0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::Checkers => {
                let sum = point.x.floor() + point.y.floor() + point.z.floor();
                if sum.rem_euclid(2.0) == 0.0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::RadialGradient => {
                let distance = point.x.hypot(point.z);
                let fraction = distance - distance.floor();
                self.a + (self.b - self.a) * fraction
            }
        }
    }

    /// Color at an object-space point, after applying the pattern transform.
    #[must_use]
    pub fn pattern_at_object(&self, object_point: &Point3) -> Color {
        self.pattern_at(&self.transform.to_local_point(object_point))
    }
}
