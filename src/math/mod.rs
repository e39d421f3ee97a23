pub mod color;
pub mod matrix;
pub mod transform;

pub use color::Color;
pub use matrix::Cofactor;
pub use transform::{
    rotation_x, rotation_y, rotation_z, scaling, shearing, translation, view_transform, Transform,
};

/// 3D point type (homogeneous `w = 1`).
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type (homogeneous `w = 0`).
pub type Vector3 = nalgebra::Vector3<f64>;

/// Homogeneous 4-component tuple.
pub type Vector4 = nalgebra::Vector4<f64>;

/// 2x2 matrix.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 3x3 matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global tolerance for floating-point comparisons and surface offsets.
pub const EPSILON: f64 = 1e-5;

/// Reflects `incoming` about `normal`: `d - 2 * dot(d, n) * n`.
#[must_use]
pub fn reflect(incoming: &Vector3, normal: &Vector3) -> Vector3 {
    incoming - normal * (2.0 * incoming.dot(normal))
}

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
#[must_use]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn point_minus_point_is_vector() {
        let d: Vector3 = Point3::new(3.0, 2.0, 1.0) - Point3::new(5.0, 6.0, 7.0);
        assert_abs_diff_eq!(d, Vector3::new(-2.0, -4.0, -6.0), epsilon = EPSILON);
    }

    #[test]
    fn point_plus_vector_is_point() {
        let p: Point3 = Point3::new(3.0, -2.0, 5.0) + Vector3::new(-2.0, 3.0, 1.0);
        assert_abs_diff_eq!(p, Point3::new(1.0, 1.0, 6.0), epsilon = EPSILON);
    }

    #[test]
    fn homogeneous_tags() {
        assert_abs_diff_eq!(Point3::new(4.0, -4.0, 3.0).to_homogeneous().w, 1.0);
        assert_abs_diff_eq!(Vector3::new(4.0, -4.0, 3.0).to_homogeneous().w, 0.0);
    }

    #[test]
    fn cross_product() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(2.0, 3.0, 4.0);
        assert_abs_diff_eq!(a.cross(&b), Vector3::new(-1.0, 2.0, -1.0), epsilon = EPSILON);
        assert_abs_diff_eq!(b.cross(&a), Vector3::new(1.0, -2.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn reflect_at_45_degrees() {
        let v = Vector3::new(1.0, -1.0, 0.0);
        let n = Vector3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(reflect(&v, &n), Vector3::new(1.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn reflect_off_slanted_surface() {
        let v = Vector3::new(0.0, -1.0, 0.0);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let n = Vector3::new(h, h, 0.0);
        assert_abs_diff_eq!(reflect(&v, &n), Vector3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn nearly_equal_within_tolerance() {
        assert!(nearly_equal(1.0, 1.0 + EPSILON / 2.0));
        assert!(!nearly_equal(1.0, 1.0 + EPSILON * 2.0));
    }
}
