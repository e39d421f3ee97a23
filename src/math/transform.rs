use crate::error::Result;
use crate::geometry::{BoundingBox, Ray};

use super::{Cofactor, Matrix4, Point3, Vector3};

/// An object-to-parent transformation with its inverse cached.
///
/// Shapes, patterns and the camera store one of these so that no inverse is
/// recomputed per ray. Construction fails for singular matrices, which makes a
/// bad transform a scene-setup error rather than a render-time one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix4,
    inverse: Matrix4,
    inverse_transpose: Matrix4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
            inverse: Matrix4::identity(),
            inverse_transpose: Matrix4::identity(),
        }
    }

    /// Creates a transform from a matrix, computing its inverse.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not invertible.
    pub fn new(matrix: Matrix4) -> Result<Self> {
        let inverse = Cofactor::inverse(&matrix)?;
        Ok(Self {
            matrix,
            inverse,
            inverse_transpose: inverse.transpose(),
        })
    }

    /// Returns the object-to-parent matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Returns the parent-to-object matrix.
    #[must_use]
    pub fn inverse(&self) -> &Matrix4 {
        &self.inverse
    }

    /// Maps a parent-space point into object space.
    #[must_use]
    pub fn to_local_point(&self, point: &Point3) -> Point3 {
        self.inverse.transform_point(point)
    }

    /// Maps a parent-space ray into object space.
    #[must_use]
    pub fn to_local_ray(&self, ray: &Ray) -> Ray {
        ray.transform(&self.inverse)
    }

    /// Maps an object-space normal into parent space and normalizes it.
    ///
    /// Uses the inverse-transpose with the `w` component dropped. The
    /// translation column of the inverse lands in the bottom row here, so the
    /// homogeneous divide of `transform_vector` must not be applied.
    #[must_use]
    pub fn normal_to_parent(&self, normal: &Vector3) -> Vector3 {
        (self.inverse_transpose * normal.to_homogeneous())
            .xyz()
            .normalize()
    }

    /// Maps an object-space bounding box into parent space.
    #[must_use]
    pub fn bounds_to_parent(&self, bounds: &BoundingBox) -> BoundingBox {
        bounds.transform(&self.matrix)
    }
}

/// Translation by `(x, y, z)`. Vectors are unaffected.
#[must_use]
pub fn translation(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::new(
        1.0, 0.0, 0.0, x, //
        0.0, 1.0, 0.0, y, //
        0.0, 0.0, 1.0, z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Non-uniform scaling. A negative factor reflects across that axis.
#[must_use]
pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::new(
        x, 0.0, 0.0, 0.0, //
        0.0, y, 0.0, 0.0, //
        0.0, 0.0, z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the x axis by `radians`.
#[must_use]
pub fn rotation_x(radians: f64) -> Matrix4 {
    let (sin, cos) = radians.sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, cos, -sin, 0.0, //
        0.0, sin, cos, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the y axis by `radians`.
#[must_use]
pub fn rotation_y(radians: f64) -> Matrix4 {
    let (sin, cos) = radians.sin_cos();
    Matrix4::new(
        cos, 0.0, sin, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        -sin, 0.0, cos, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the z axis by `radians`.
#[must_use]
pub fn rotation_z(radians: f64) -> Matrix4 {
    let (sin, cos) = radians.sin_cos();
    Matrix4::new(
        cos, -sin, 0.0, 0.0, //
        sin, cos, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Shearing: each component moves in proportion to the other two.
///
/// `x_y` is "x moved in proportion to y", and so on.
#[must_use]
pub fn shearing(x_y: f64, x_z: f64, y_x: f64, y_z: f64, z_x: f64, z_y: f64) -> Matrix4 {
    Matrix4::new(
        1.0, x_y, x_z, 0.0, //
        y_x, 1.0, y_z, 0.0, //
        z_x, z_y, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Orients the world relative to an eye at `from` looking at `to`.
///
/// The result maps world space into camera space (camera looking down -z).
#[must_use]
pub fn view_transform(from: &Point3, to: &Point3, up: &Vector3) -> Matrix4 {
    let forward = (to - from).normalize();
    let left = forward.cross(&up.normalize());
    let true_up = left.cross(&forward);
    let orientation = Matrix4::new(
        left.x, left.y, left.z, 0.0, //
        true_up.x, true_up.y, true_up.z, 0.0, //
        -forward.x, -forward.y, -forward.z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    );
    orientation * translation(-from.x, -from.y, -from.z)
}
