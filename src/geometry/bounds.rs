use crate::math::{Matrix4, Point3, EPSILON};

use super::Ray;

/// An axis-aligned bounding box.
///
/// Used as the culling volume for groups and CSG nodes. Bounds may be
/// infinite along any axis (planes, open cylinders and cones).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    /// Creates a bounding box from two corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// An empty box: min at +infinity, max at -infinity.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Returns `true` if no point has been included yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grows the box to contain `point`.
    pub fn include(&mut self, point: &Point3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Grows the box to contain `other`.
    pub fn merge(&mut self, other: &BoundingBox) {
        if other.is_empty() {
            return;
        }
        self.include(&other.min);
        self.include(&other.max);
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }

    /// Returns `true` if `other` lies entirely inside this box.
    #[must_use]
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Transforms all eight corners by `matrix` and returns their bounds.
    ///
    /// Zero matrix entries contribute nothing, so infinite extents survive
    /// axis-aligned transforms instead of turning into NaN.
    #[must_use]
    pub fn transform(&self, matrix: &Matrix4) -> BoundingBox {
        if self.is_empty() {
            return *self;
        }
        let mut out = BoundingBox::empty();
        for &x in &[self.min.x, self.max.x] {
            for &y in &[self.min.y, self.max.y] {
                for &z in &[self.min.z, self.max.z] {
                    out.include(&transform_corner(matrix, [x, y, z]));
                }
            }
        }
        out
    }

    /// Slab test of `ray` against this box.
    #[must_use]
    pub fn intersects(&self, ray: &Ray) -> bool {
        match self.slab_range(ray) {
            Some((t_min, t_max)) => t_min <= t_max,
            None => false,
        }
    }

    /// Entry and exit `t` across all three slabs, unordered against each other.
    pub(crate) fn slab_range(&self, ray: &Ray) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for axis in 0..3 {
            let (lo, hi) = check_axis(
                ray.origin[axis],
                ray.direction[axis],
                self.min[axis],
                self.max[axis],
            );
            t_min = t_min.max(lo);
            t_max = t_max.min(hi);
        }
        Some((t_min, t_max))
    }
}

/// Entry/exit `t` of a ray against the slab `[min, max]` on one axis.
///
/// A near-zero direction maps the numerators to signed infinity so the slab
/// either spans the whole ray or misses it.
pub(crate) fn check_axis(origin: f64, direction: f64, min: f64, max: f64) -> (f64, f64) {
    let t_min_numerator = min - origin;
    let t_max_numerator = max - origin;

    let (t_min, t_max) = if direction.abs() >= EPSILON {
        (t_min_numerator / direction, t_max_numerator / direction)
    } else {
        (
            t_min_numerator * f64::INFINITY,
            t_max_numerator * f64::INFINITY,
        )
    };

    if t_min > t_max {
        (t_max, t_min)
    } else {
        (t_min, t_max)
    }
}

fn transform_corner(matrix: &Matrix4, corner: [f64; 3]) -> Point3 {
    let mut out = [0.0; 3];
    for (row, value) in out.iter_mut().enumerate() {
        let mut sum = matrix[(row, 3)];
        for (col, &c) in corner.iter().enumerate() {
            let m = matrix[(row, col)];
            if m != 0.0 {
                sum += m * c;
            }
        }
        *value = sum;
    }
    Point3::new(out[0], out[1], out[2])
}
