use crate::math::{Point3, Vector3};

use super::{solve_quadratic, BoundingBox, LocalHit, Primitive, Ray};

/// The unit sphere centered at the object-space origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere;

impl Sphere {
    /// Creates a unit sphere.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Primitive for Sphere {
    fn local_intersect(&self, ray: &Ray) -> Vec<LocalHit> {
        let sphere_to_ray = ray.origin - Point3::origin();
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * ray.direction.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

        match solve_quadratic(a, b, c) {
            Some((t0, t1)) => vec![LocalHit::at(t0), LocalHit::at(t1)],
            None => Vec::new(),
        }
    }

    fn local_normal_at(&self, point: &Point3, _uv: Option<(f64, f64)>) -> Vector3 {
        point - Point3::origin()
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
    }
}
