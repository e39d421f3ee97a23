use crate::math::{Color, Point3};

/// A point light source with no falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Light position in world space.
    pub position: Point3,
    /// Light color and brightness.
    pub intensity: Color,
}

impl PointLight {
    /// Creates a point light.
    #[must_use]
    pub fn new(position: Point3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
