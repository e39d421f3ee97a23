use std::ops::Deref;

use crate::geometry::LocalHit;

use super::ShapeId;

/// A ray hit on a specific shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance along the ray.
    pub t: f64,
    /// The primitive shape that was hit.
    pub object: ShapeId,
    /// Barycentric coordinates, for smooth triangles.
    pub uv: Option<(f64, f64)>,
}

impl Intersection {
    /// Creates an intersection without surface coordinates.
    #[must_use]
    pub fn new(t: f64, object: ShapeId) -> Self {
        Self { t, object, uv: None }
    }

    /// Creates an intersection carrying barycentric coordinates.
    #[must_use]
    pub fn with_uv(t: f64, object: ShapeId, u: f64, v: f64) -> Self {
        Self {
            t,
            object,
            uv: Some((u, v)),
        }
    }

    pub(crate) fn from_local(hit: LocalHit, object: ShapeId) -> Self {
        Self {
            t: hit.t,
            object,
            uv: hit.uv,
        }
    }
}

/// Intersections sorted by ascending `t`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intersections(Vec<Intersection>);

impl Intersections {
    /// Sorts `intersections` by `t`.
    #[must_use]
    pub fn new(mut intersections: Vec<Intersection>) -> Self {
        intersections.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self(intersections)
    }

    /// The nearest intersection with non-negative `t`.
    #[must_use]
    pub fn hit(&self) -> Option<&Intersection> {
        self.0.iter().find(|i| i.t >= 0.0)
    }

    /// Consumes the collection, returning the sorted list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Intersection> {
        self.0
    }
}

impl Deref for Intersections {
    type Target = [Intersection];

    fn deref(&self) -> &[Intersection] {
        &self.0
    }
}

impl From<Vec<Intersection>> for Intersections {
    fn from(intersections: Vec<Intersection>) -> Self {
        Self::new(intersections)
    }
}

impl IntoIterator for Intersections {
    type Item = Intersection;
    type IntoIter = std::vec::IntoIter<Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
