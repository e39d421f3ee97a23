use crate::math::{Point3, Vector3, EPSILON};

use super::{BoundingBox, LocalHit, Primitive, Ray};

/// The infinite xz plane at `y = 0`, normal `+y`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane;

impl Plane {
    /// Creates the xz plane.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Primitive for Plane {
    fn local_intersect(&self, ray: &Ray) -> Vec<LocalHit> {
        if ray.direction.y.abs() < EPSILON {
            return Vec::new();
        }
        vec![LocalHit::at(-ray.origin.y / ray.direction.y)]
    }

    fn local_normal_at(&self, _point: &Point3, _uv: Option<(f64, f64)>) -> Vector3 {
        Vector3::y()
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            Point3::new(f64::NEG_INFINITY, 0.0, f64::NEG_INFINITY),
            Point3::new(f64::INFINITY, 0.0, f64::INFINITY),
        )
    }
}
