mod cone;
mod cube;
mod cylinder;
mod plane;
mod smooth_triangle;
mod sphere;
mod triangle;

pub use cone::Cone;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use plane::Plane;
pub use smooth_triangle::SmoothTriangle;
pub use sphere::Sphere;
pub use triangle::Triangle;

use std::fmt::Debug;

use crate::math::{Point3, Vector3, EPSILON};

use super::{BoundingBox, Ray};

/// A ray-parameter hit reported by a primitive in its own object space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHit {
    /// Distance along the ray.
    pub t: f64,
    /// Barycentric `(u, v)` for triangle hits that need normal interpolation.
    pub uv: Option<(f64, f64)>,
}

impl LocalHit {
    /// A hit with no surface coordinates.
    #[must_use]
    pub fn at(t: f64) -> Self {
        Self { t, uv: None }
    }

    /// A hit carrying barycentric coordinates.
    #[must_use]
    pub fn with_uv(t: f64, u: f64, v: f64) -> Self {
        Self { t, uv: Some((u, v)) }
    }
}

/// Trait for geometric primitives defined in their own object space.
///
/// Rays and points handed to a primitive are already in object space; the
/// scene takes care of transforms and parent chains.
pub trait Primitive: Debug + Send + Sync {
    /// Intersects an object-space ray, returning hits in any order.
    fn local_intersect(&self, ray: &Ray) -> Vec<LocalHit>;

    /// Object-space normal at `point`. `uv` is the barycentric pair recorded
    /// by [`Primitive::local_intersect`], when the primitive records one.
    fn local_normal_at(&self, point: &Point3, uv: Option<(f64, f64)>) -> Vector3;

    /// Object-space bounding box.
    fn bounds(&self) -> BoundingBox;
}

/// Vertices with precomputed edges, shared by flat and smooth triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TriangleEdges {
    pub(crate) p1: Point3,
    pub(crate) p2: Point3,
    pub(crate) p3: Point3,
    pub(crate) e1: Vector3,
    pub(crate) e2: Vector3,
}

impl TriangleEdges {
    pub(crate) fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            p1,
            p2,
            p3,
            e1: p2 - p1,
            e2: p3 - p1,
        }
    }

    /// Möller–Trumbore. Returns `(t, u, v)` for a hit inside the triangle.
    pub(crate) fn intersect(&self, ray: &Ray) -> Option<(f64, f64, f64)> {
        let dir_cross_e2 = ray.direction.cross(&self.e2);
        let det = self.e1.dot(&dir_cross_e2);
        if det.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / det;
        let p1_to_origin = ray.origin - self.p1;
        let u = f * p1_to_origin.dot(&dir_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let origin_cross_e1 = p1_to_origin.cross(&self.e1);
        let v = f * ray.direction.dot(&origin_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * self.e2.dot(&origin_cross_e1);
        Some((t, u, v))
    }

    pub(crate) fn bounds(&self) -> BoundingBox {
        let mut bounds = BoundingBox::empty();
        bounds.include(&self.p1);
        bounds.include(&self.p2);
        bounds.include(&self.p3);
        bounds
    }
}

/// Solves `a*t^2 + b*t + c = 0`, returning both roots in ascending order.
///
/// A tangent ray yields two equal roots.
pub(crate) fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let t0 = (-b - root) / (2.0 * a);
    let t1 = (-b + root) / (2.0 * a);
    if t0 > t1 {
        Some((t1, t0))
    } else {
        Some((t0, t1))
    }
}
