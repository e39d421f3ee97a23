use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, EPSILON};

use super::{BoundingBox, LocalHit, Primitive, Ray, TriangleEdges};

/// A triangle whose normal is interpolated from per-vertex normals.
///
/// Hits record barycentric `(u, v)`; the normal at a hit is
/// `n2 * u + n3 * v + n1 * (1 - u - v)`. It is left unnormalized here and
/// normalized once mapped out of object space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothTriangle {
    edges: TriangleEdges,
    normals: [Vector3; 3],
}

impl SmoothTriangle {
    /// Creates a smooth triangle from vertices and their normals.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the vertices are collinear.
    pub fn new(
        p1: Point3,
        p2: Point3,
        p3: Point3,
        n1: Vector3,
        n2: Vector3,
        n3: Vector3,
    ) -> Result<Self> {
        let edges = TriangleEdges::new(p1, p2, p3);
        if edges.e2.cross(&edges.e1).norm() < EPSILON {
            return Err(
                GeometryError::Degenerate("smooth triangle vertices are collinear".into()).into(),
            );
        }
        Ok(Self {
            edges,
            normals: [n1, n2, n3],
        })
    }

    /// The three vertices.
    #[must_use]
    pub fn vertices(&self) -> [Point3; 3] {
        [self.edges.p1, self.edges.p2, self.edges.p3]
    }

    /// The per-vertex normals.
    #[must_use]
    pub fn normals(&self) -> [Vector3; 3] {
        self.normals
    }
}

impl Primitive for SmoothTriangle {
    fn local_intersect(&self, ray: &Ray) -> Vec<LocalHit> {
        self.edges
            .intersect(ray)
            .map(|(t, u, v)| vec![LocalHit::with_uv(t, u, v)])
            .unwrap_or_default()
    }

    fn local_normal_at(&self, _point: &Point3, uv: Option<(f64, f64)>) -> Vector3 {
        let [n1, n2, n3] = self.normals;
        match uv {
            Some((u, v)) => n2 * u + n3 * v + n1 * (1.0 - u - v),
            None => n1,
        }
    }

    fn bounds(&self) -> BoundingBox {
        self.edges.bounds()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn tri() -> SmoothTriangle {
        SmoothTriangle::new(
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn intersection_records_uv() {
        let r = Ray::new(Point3::new(-0.2, 0.3, -2.0), Vector3::new(0.0, 0.0, 1.0));
        let hits = tri().local_intersect(&r);
        assert_eq!(hits.len(), 1);
        let (u, v) = hits[0].uv.unwrap();
        assert_abs_diff_eq!(u, 0.45, epsilon = EPSILON);
        assert_abs_diff_eq!(v, 0.25, epsilon = EPSILON);
    }

    #[test]
    fn normal_is_interpolated() {
        let n = tri().local_normal_at(&Point3::origin(), Some((0.45, 0.25)));
        assert_abs_diff_eq!(
            n.normalize(),
            Vector3::new(-0.5547, 0.83205, 0.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn missing_uv_falls_back_to_first_normal() {
        let n = tri().local_normal_at(&Point3::origin(), None);
        assert_eq!(n, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn keeps_vertices_and_normals() {
        let t = tri();
        assert_eq!(t.vertices()[1], Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(t.normals()[2], Vector3::new(1.0, 0.0, 0.0));
    }
}
