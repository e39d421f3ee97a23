use crate::math::{Matrix4, Point3, Vector3};

/// A ray in 3D space defined by an origin and a direction.
///
/// The direction is not normalized: rays carried into object space keep
/// whatever length the inverse transform gives them, so `t` values stay
/// comparable across spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vector3,
}

impl Ray {
    /// Creates a new ray.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Evaluates the ray at parameter `t`: `origin + t * direction`.
    #[must_use]
    pub fn position(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Returns a new ray with both origin and direction multiplied by `matrix`.
    #[must_use]
    pub fn transform(&self, matrix: &Matrix4) -> Ray {
        Ray {
            origin: matrix.transform_point(&self.origin),
            direction: matrix.transform_vector(&self.direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{scaling, translation, EPSILON};
    use approx::assert_abs_diff_eq;

    #[test]
    fn computing_a_point_from_a_distance() {
        let r = Ray::new(Point3::new(2.0, 3.0, 4.0), Vector3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(r.position(0.0), Point3::new(2.0, 3.0, 4.0));
        assert_abs_diff_eq!(r.position(1.0), Point3::new(3.0, 3.0, 4.0));
        assert_abs_diff_eq!(r.position(-1.0), Point3::new(1.0, 3.0, 4.0));
        assert_abs_diff_eq!(r.position(2.5), Point3::new(4.5, 3.0, 4.0));
    }

    #[test]
    fn translating_a_ray() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 1.0, 0.0));
        let r2 = r.transform(&translation(3.0, 4.0, 5.0));
        assert_abs_diff_eq!(r2.origin, Point3::new(4.0, 6.0, 8.0), epsilon = EPSILON);
        assert_abs_diff_eq!(r2.direction, Vector3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn scaling_a_ray() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 1.0, 0.0));
        let r2 = r.transform(&scaling(2.0, 3.0, 4.0));
        assert_abs_diff_eq!(r2.origin, Point3::new(2.0, 6.0, 12.0), epsilon = EPSILON);
        assert_abs_diff_eq!(r2.direction, Vector3::new(0.0, 3.0, 0.0), epsilon = EPSILON);
        assert_abs_diff_eq!(r.origin, Point3::new(1.0, 2.0, 3.0));
    }
}
