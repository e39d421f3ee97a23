use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, EPSILON};

use super::{BoundingBox, LocalHit, Primitive, Ray, TriangleEdges};

/// A flat triangle with a precomputed face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    edges: TriangleEdges,
    normal: Vector3,
}

impl Triangle {
    /// Creates a triangle from three vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the vertices are collinear.
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Result<Self> {
        let edges = TriangleEdges::new(p1, p2, p3);
        let cross = edges.e2.cross(&edges.e1);
        let norm = cross.norm();
        if norm < EPSILON {
            return Err(GeometryError::Degenerate("triangle vertices are collinear".into()).into());
        }
        Ok(Self {
            edges,
            normal: cross / norm,
        })
    }

    /// The three vertices.
    #[must_use]
    pub fn vertices(&self) -> [Point3; 3] {
        [self.edges.p1, self.edges.p2, self.edges.p3]
    }

    /// Edge vectors `p2 - p1` and `p3 - p1`.
    #[must_use]
    pub fn edges(&self) -> (Vector3, Vector3) {
        (self.edges.e1, self.edges.e2)
    }

    /// The face normal.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }
}

impl Primitive for Triangle {
    fn local_intersect(&self, ray: &Ray) -> Vec<LocalHit> {
        self.edges
            .intersect(ray)
            .map(|(t, _, _)| vec![LocalHit::at(t)])
            .unwrap_or_default()
    }

    fn local_normal_at(&self, _point: &Point3, _uv: Option<(f64, f64)>) -> Vector3 {
        self.normal
    }

    fn bounds(&self) -> BoundingBox {
        self.edges.bounds()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LumenError;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn triangle() -> Triangle {
        Triangle::new(p(0.0, 1.0, 0.0), p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn construction_precomputes_edges_and_normal() {
        let t = triangle();
        assert_eq!(t.edges(), (v(-1.0, -1.0, 0.0), v(1.0, -1.0, 0.0)));
        assert_eq!(t.normal(), v(0.0, 0.0, -1.0));
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        let result = Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0));
        assert!(matches!(
            result,
            Err(LumenError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn normal_is_the_face_normal_everywhere() {
        let t = triangle();
        for point in [p(0.0, 0.5, 0.0), p(-0.5, 0.75, 0.0), p(0.5, 0.25, 0.0)] {
            assert_eq!(t.local_normal_at(&point, None), t.normal());
        }
    }

    #[test]
    fn parallel_ray_misses() {
        let r = Ray::new(p(0.0, -1.0, -2.0), v(0.0, 1.0, 0.0));
        assert!(triangle().local_intersect(&r).is_empty());
    }

    #[test]
    fn ray_misses_each_edge() {
        for origin in [p(1.0, 1.0, -2.0), p(-1.0, 1.0, -2.0), p(0.0, -1.0, -2.0)] {
            let r = Ray::new(origin, v(0.0, 0.0, 1.0));
            assert!(triangle().local_intersect(&r).is_empty());
        }
    }

    #[test]
    fn ray_strikes_triangle() {
        let r = Ray::new(p(0.0, 0.5, -2.0), v(0.0, 0.0, 1.0));
        let hits = triangle().local_intersect(&r);
        assert_eq!(hits, vec![LocalHit::at(2.0)]);
    }

    #[test]
    fn bounds_enclose_vertices() {
        let t = Triangle::new(p(-3.0, 7.0, 2.0), p(6.0, 2.0, -4.0), p(2.0, -1.0, -1.0)).unwrap();
        let b = t.bounds();
        assert_eq!(b.min, p(-3.0, -1.0, -4.0));
        assert_eq!(b.max, p(6.0, 7.0, 2.0));
    }
}
