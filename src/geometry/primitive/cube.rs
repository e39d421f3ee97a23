use crate::math::{Point3, Vector3};

use super::{BoundingBox, LocalHit, Primitive, Ray};

/// The axis-aligned cube spanning `[-1, 1]` on every axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cube;

impl Cube {
    /// Creates the unit cube.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Primitive for Cube {
    fn local_intersect(&self, ray: &Ray) -> Vec<LocalHit> {
        match self.bounds().slab_range(ray) {
            Some((t_min, t_max)) if t_min <= t_max => {
                vec![LocalHit::at(t_min), LocalHit::at(t_max)]
            }
            _ => Vec::new(),
        }
    }

    fn local_normal_at(&self, point: &Point3, _uv: Option<(f64, f64)>) -> Vector3 {
        let (ax, ay, az) = (point.x.abs(), point.y.abs(), point.z.abs());
        let max_c = ax.max(ay).max(az);
        if max_c == ax {
            Vector3::new(point.x, 0.0, 0.0)
        } else if max_c == ay {
            Vector3::new(0.0, point.y, 0.0)
        } else {
            Vector3::new(0.0, 0.0, point.z)
        }
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn ray_hits_each_face() {
        let cases = [
            (p(5.0, 0.5, 0.0), v(-1.0, 0.0, 0.0), 4.0, 6.0),
            (p(-5.0, 0.5, 0.0), v(1.0, 0.0, 0.0), 4.0, 6.0),
            (p(0.5, 5.0, 0.0), v(0.0, -1.0, 0.0), 4.0, 6.0),
            (p(0.5, -5.0, 0.0), v(0.0, 1.0, 0.0), 4.0, 6.0),
            (p(0.5, 0.0, 5.0), v(0.0, 0.0, -1.0), 4.0, 6.0),
            (p(0.5, 0.0, -5.0), v(0.0, 0.0, 1.0), 4.0, 6.0),
            (p(0.0, 0.5, 0.0), v(0.0, 0.0, 1.0), -1.0, 1.0),
        ];
        for (origin, direction, t1, t2) in cases {
            let hits = Cube.local_intersect(&Ray::new(origin, direction));
            assert_eq!(hits, vec![LocalHit::at(t1), LocalHit::at(t2)]);
        }
    }

    #[test]
    fn ray_misses_cube() {
        let cases = [
            (p(-2.0, 0.0, 0.0), v(0.2673, 0.5345, 0.8018)),
            (p(0.0, -2.0, 0.0), v(0.8018, 0.2673, 0.5345)),
            (p(0.0, 0.0, -2.0), v(0.5345, 0.8018, 0.2673)),
            (p(2.0, 0.0, 2.0), v(0.0, 0.0, -1.0)),
            (p(0.0, 2.0, 2.0), v(0.0, -1.0, 0.0)),
            (p(2.0, 2.0, 0.0), v(-1.0, 0.0, 0.0)),
        ];
        for (origin, direction) in cases {
            assert!(Cube.local_intersect(&Ray::new(origin, direction)).is_empty());
        }
    }

    #[test]
    fn normal_on_surface() {
        let cases = [
            (p(1.0, 0.5, -0.8), v(1.0, 0.0, 0.0)),
            (p(-1.0, -0.2, 0.9), v(-1.0, 0.0, 0.0)),
            (p(-0.4, 1.0, -0.1), v(0.0, 1.0, 0.0)),
            (p(0.3, -1.0, -0.7), v(0.0, -1.0, 0.0)),
            (p(-0.6, 0.3, 1.0), v(0.0, 0.0, 1.0)),
            (p(0.4, 0.4, -1.0), v(0.0, 0.0, -1.0)),
            (p(1.0, 1.0, 1.0), v(1.0, 0.0, 0.0)),
            (p(-1.0, -1.0, -1.0), v(-1.0, 0.0, 0.0)),
        ];
        for (point, normal) in cases {
            assert_eq!(Cube.local_normal_at(&point, None), normal);
        }
    }
}
