use crate::math::{Point3, Vector3, EPSILON};

use super::cylinder::within_radius;
use super::{solve_quadratic, BoundingBox, LocalHit, Primitive, Ray};

/// A double-napped cone around the y axis, `x² + z² = y²`.
///
/// Truncation and capping work as for [`super::Cylinder`], except that a cap
/// at height `y` has radius `|y|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    /// Lower y bound (exclusive).
    pub minimum: f64,
    /// Upper y bound (exclusive).
    pub maximum: f64,
    /// Whether the ends are capped.
    pub closed: bool,
}

impl Default for Cone {
    fn default() -> Self {
        Self {
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            closed: false,
        }
    }
}

impl Cone {
    /// Creates a cone truncated to `(minimum, maximum)`.
    #[must_use]
    pub fn new(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self {
            minimum,
            maximum,
            closed,
        }
    }

    fn in_range(&self, ray: &Ray, t: f64) -> bool {
        let y = ray.origin.y + t * ray.direction.y;
        self.minimum < y && y < self.maximum
    }
}

impl Primitive for Cone {
    fn local_intersect(&self, ray: &Ray) -> Vec<LocalHit> {
        let (o, d) = (&ray.origin, &ray.direction);
        let a = d.x.powi(2) - d.y.powi(2) + d.z.powi(2);
        let b = 2.0 * o.x * d.x - 2.0 * o.y * d.y + 2.0 * o.z * d.z;
        let c = o.x.powi(2) - o.y.powi(2) + o.z.powi(2);

        let mut hits = Vec::new();
        if a.abs() < EPSILON {
            // Ray parallel to one half of the cone: at most one side hit.
            if b.abs() >= EPSILON {
                let t = -c / (2.0 * b);
                if self.in_range(ray, t) {
                    hits.push(LocalHit::at(t));
                }
            }
        } else if let Some((t0, t1)) = solve_quadratic(a, b, c) {
            for t in [t0, t1] {
                if self.in_range(ray, t) {
                    hits.push(LocalHit::at(t));
                }
            }
        }

        if self.closed && d.y.abs() >= EPSILON {
            for y in [self.minimum, self.maximum] {
                let t = (y - o.y) / d.y;
                if within_radius(ray, t, y.abs()) {
                    hits.push(LocalHit::at(t));
                }
            }
        }
        hits
    }

    fn local_normal_at(&self, point: &Point3, _uv: Option<(f64, f64)>) -> Vector3 {
        let dist = point.x.powi(2) + point.z.powi(2);
        if dist < self.maximum.powi(2) && point.y >= self.maximum - EPSILON {
            return Vector3::y();
        }
        if dist < self.minimum.powi(2) && point.y <= self.minimum + EPSILON {
            return -Vector3::y();
        }
        let mut y = dist.sqrt();
        if point.y > 0.0 {
            y = -y;
        }
        Vector3::new(point.x, y, point.z)
    }

    fn bounds(&self) -> BoundingBox {
        let limit = self.minimum.abs().max(self.maximum.abs());
        BoundingBox::new(
            Point3::new(-limit, self.minimum, -limit),
            Point3::new(limit, self.maximum, limit),
        )
    }
}
