use crate::math::{Point3, Vector3, EPSILON};

use super::{BoundingBox, LocalHit, Primitive, Ray};

/// A unit-radius cylinder around the y axis.
///
/// Truncated to the open interval `(minimum, maximum)` and optionally capped.
/// The default is infinite and open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// Lower y bound (exclusive).
    pub minimum: f64,
    /// Upper y bound (exclusive).
    pub maximum: f64,
    /// Whether the ends are capped.
    pub closed: bool,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            closed: false,
        }
    }
}

impl Cylinder {
    /// Creates a cylinder truncated to `(minimum, maximum)`.
    #[must_use]
    pub fn new(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self {
            minimum,
            maximum,
            closed,
        }
    }

    fn intersect_caps(&self, ray: &Ray, hits: &mut Vec<LocalHit>) {
        if !self.closed || ray.direction.y.abs() < EPSILON {
            return;
        }
        for y in [self.minimum, self.maximum] {
            let t = (y - ray.origin.y) / ray.direction.y;
            if within_radius(ray, t, 1.0) {
                hits.push(LocalHit::at(t));
            }
        }
    }
}

/// Whether the ray at `t` lies within `radius` of the y axis.
pub(super) fn within_radius(ray: &Ray, t: f64, radius: f64) -> bool {
    let x = ray.origin.x + t * ray.direction.x;
    let z = ray.origin.z + t * ray.direction.z;
    x * x + z * z <= radius * radius
}

impl Primitive for Cylinder {
    fn local_intersect(&self, ray: &Ray) -> Vec<LocalHit> {
        let mut hits = Vec::new();
        let a = ray.direction.x.powi(2) + ray.direction.z.powi(2);

        if a.abs() >= EPSILON {
            let b = 2.0 * ray.origin.x * ray.direction.x + 2.0 * ray.origin.z * ray.direction.z;
            let c = ray.origin.x.powi(2) + ray.origin.z.powi(2) - 1.0;
            if let Some((t0, t1)) = super::solve_quadratic(a, b, c) {
                for t in [t0, t1] {
                    let y = ray.origin.y + t * ray.direction.y;
                    if self.minimum < y && y < self.maximum {
                        hits.push(LocalHit::at(t));
                    }
                }
            } else {
                return hits;
            }
        }

        self.intersect_caps(ray, &mut hits);
        hits
    }

    fn local_normal_at(&self, point: &Point3, _uv: Option<(f64, f64)>) -> Vector3 {
        let dist = point.x.powi(2) + point.z.powi(2);
        if dist < 1.0 && point.y >= self.maximum - EPSILON {
            Vector3::y()
        } else if dist < 1.0 && point.y <= self.minimum + EPSILON {
            -Vector3::y()
        } else {
            Vector3::new(point.x, 0.0, point.z)
        }
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            Point3::new(-1.0, self.minimum, -1.0),
            Point3::new(1.0, self.maximum, 1.0),
        )
    }
}
