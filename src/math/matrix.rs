//! Determinants and inverses by cofactor expansion.
//!
//! `nalgebra` supplies storage, multiplication and transposition; this module
//! adds the submatrix/minor/cofactor machinery for the 2x2, 3x3 and 4x4 sizes
//! used by the transform pipeline.

use crate::error::{GeometryError, Result};

use super::{Matrix2, Matrix3, Matrix4};

/// Cofactor-based determinant and inverse for small square matrices.
pub trait Cofactor: Sized {
    /// Number of rows (and columns).
    const SIZE: usize;

    /// Returns the element at `(row, col)`.
    fn element(&self, row: usize, col: usize) -> f64;

    /// Determinant of the submatrix obtained by deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> f64;

    /// Builds a matrix of this size from a per-element function.
    fn build(f: impl FnMut(usize, usize) -> f64) -> Self;

    /// The minor at `(row, col)`, negated when `row + col` is odd.
    fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 {
            -minor
        } else {
            minor
        }
    }

    /// Determinant by cofactor expansion along row 0.
    fn determinant_by_cofactors(&self) -> f64 {
        (0..Self::SIZE)
            .map(|col| self.element(0, col) * self.cofactor(0, col))
            .sum()
    }

    /// Returns `true` when the determinant is non-zero.
    fn is_invertible(&self) -> bool {
        self.determinant_by_cofactors() != 0.0
    }

    /// Inverse via the adjugate divided by the determinant.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonInvertible`] when the determinant is zero.
    fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant_by_cofactors();
        if determinant == 0.0 {
            return Err(GeometryError::NonInvertible { determinant }.into());
        }
        Ok(Self::build(|row, col| self.cofactor(col, row) / determinant))
    }
}

/// Index into the parent matrix for `index` of a submatrix that skips `removed`.
fn skip(index: usize, removed: usize) -> usize {
    if index < removed {
        index
    } else {
        index + 1
    }
}

/// Returns the 2x2 matrix left after deleting `row` and `col` from `m`.
#[must_use]
pub fn submatrix3(m: &Matrix3, row: usize, col: usize) -> Matrix2 {
    Matrix2::from_fn(|r, c| m[(skip(r, row), skip(c, col))])
}

/// Returns the 3x3 matrix left after deleting `row` and `col` from `m`.
#[must_use]
pub fn submatrix4(m: &Matrix4, row: usize, col: usize) -> Matrix3 {
    Matrix3::from_fn(|r, c| m[(skip(r, row), skip(c, col))])
}

impl Cofactor for Matrix2 {
    const SIZE: usize = 2;

    fn element(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }

    fn minor(&self, row: usize, col: usize) -> f64 {
        self[(1 - row, 1 - col)]
    }

    fn build(mut f: impl FnMut(usize, usize) -> f64) -> Self {
        Matrix2::from_fn(|r, c| f(r, c))
    }
}

impl Cofactor for Matrix3 {
    const SIZE: usize = 3;

    fn element(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }

    fn minor(&self, row: usize, col: usize) -> f64 {
        submatrix3(self, row, col).determinant_by_cofactors()
    }

    fn build(mut f: impl FnMut(usize, usize) -> f64) -> Self {
        Matrix3::from_fn(|r, c| f(r, c))
    }
}

impl Cofactor for Matrix4 {
    const SIZE: usize = 4;

    fn element(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }

    fn minor(&self, row: usize, col: usize) -> f64 {
        submatrix4(self, row, col).determinant_by_cofactors()
    }

    fn build(mut f: impl FnMut(usize, usize) -> f64) -> Self {
        Matrix4::from_fn(|r, c| f(r, c))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LumenError;
    use crate::math::{Point3, EPSILON};
    use approx::assert_abs_diff_eq;

    fn m4(rows: [[f64; 4]; 4]) -> Matrix4 {
        Matrix4::from_fn(|r, c| rows[r][c])
    }

    #[test]
    fn determinant_2x2() {
        let m = Matrix2::new(1.0, 5.0, -3.0, 2.0);
        assert_abs_diff_eq!(m.determinant_by_cofactors(), 17.0);
    }

    #[test]
    fn submatrix_of_3x3_is_2x2() {
        let m = Matrix3::new(1.0, 5.0, 0.0, -3.0, 2.0, 7.0, 0.0, 6.0, -3.0);
        assert_eq!(submatrix3(&m, 0, 2), Matrix2::new(-3.0, 2.0, 0.0, 6.0));
    }

    #[test]
    fn submatrix_of_4x4_is_3x3() {
        let m = m4([
            [-6.0, 1.0, 1.0, 6.0],
            [-8.0, 5.0, 8.0, 6.0],
            [-1.0, 0.0, 8.0, 2.0],
            [-7.0, 1.0, -1.0, 1.0],
        ]);
        let expected = Matrix3::new(-6.0, 1.0, 6.0, -8.0, 8.0, 6.0, -7.0, -1.0, 1.0);
        assert_eq!(submatrix4(&m, 2, 1), expected);
    }

    #[test]
    fn minor_and_cofactor_of_3x3() {
        let m = Matrix3::new(3.0, 5.0, 0.0, 2.0, -1.0, -7.0, 6.0, -1.0, 5.0);
        assert_abs_diff_eq!(m.minor(0, 0), -12.0);
        assert_abs_diff_eq!(m.cofactor(0, 0), -12.0);
        assert_abs_diff_eq!(m.minor(1, 0), 25.0);
        assert_abs_diff_eq!(m.cofactor(1, 0), -25.0);
    }

    #[test]
    fn determinant_3x3() {
        let m = Matrix3::new(1.0, 2.0, 6.0, -5.0, 8.0, -4.0, 2.0, 6.0, 4.0);
        assert_abs_diff_eq!(m.cofactor(0, 0), 56.0);
        assert_abs_diff_eq!(m.cofactor(0, 1), 12.0);
        assert_abs_diff_eq!(m.cofactor(0, 2), -46.0);
        assert_abs_diff_eq!(m.determinant_by_cofactors(), -196.0);
    }

    #[test]
    fn determinant_4x4_matches_nalgebra() {
        let m = m4([
            [-2.0, -8.0, 3.0, 5.0],
            [-3.0, 1.0, 7.0, 3.0],
            [1.0, 2.0, -9.0, 6.0],
            [-6.0, 7.0, 7.0, -9.0],
        ]);
        assert_abs_diff_eq!(m.cofactor(0, 0), 690.0);
        assert_abs_diff_eq!(m.cofactor(0, 3), 51.0);
        assert_abs_diff_eq!(m.determinant_by_cofactors(), -4071.0);
        assert_abs_diff_eq!(m.determinant_by_cofactors(), m.determinant(), epsilon = 1e-6);
    }

    #[test]
    fn singular_matrix_is_not_invertible() {
        let m = m4([
            [-4.0, 2.0, -2.0, -3.0],
            [9.0, 6.0, 2.0, 6.0],
            [0.0, -5.0, 1.0, -5.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        assert!(!Cofactor::is_invertible(&m));
        assert!(matches!(
            Cofactor::inverse(&m),
            Err(LumenError::Geometry(GeometryError::NonInvertible { .. }))
        ));
    }

    #[test]
    fn inverse_4x4() {
        let m = m4([
            [-5.0, 2.0, 6.0, -8.0],
            [1.0, -5.0, 1.0, 8.0],
            [7.0, 7.0, -6.0, -7.0],
            [1.0, -3.0, 7.0, 4.0],
        ]);
        let inv = Cofactor::inverse(&m).unwrap();
        assert_abs_diff_eq!(m.determinant_by_cofactors(), 532.0);
        assert_abs_diff_eq!(inv[(3, 2)], -160.0 / 532.0, epsilon = EPSILON);
        assert_abs_diff_eq!(inv[(2, 3)], 105.0 / 532.0, epsilon = EPSILON);
        assert_abs_diff_eq!(inv[(0, 0)], 0.21805, epsilon = EPSILON);
        assert_abs_diff_eq!(m * inv, Matrix4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn product_times_inverse_restores_original() {
        let a = m4([
            [3.0, -9.0, 7.0, 3.0],
            [3.0, -8.0, 2.0, -9.0],
            [-4.0, 4.0, 4.0, 1.0],
            [-6.0, 5.0, -1.0, 1.0],
        ]);
        let b = m4([
            [8.0, 2.0, 2.0, 2.0],
            [3.0, -1.0, 7.0, 0.0],
            [7.0, 0.0, 5.0, 4.0],
            [6.0, -2.0, 0.0, 5.0],
        ]);
        let c = a * b;
        assert_abs_diff_eq!(c * Cofactor::inverse(&b).unwrap(), a, epsilon = EPSILON);
    }

    #[test]
    fn inverse_round_trips_a_point() {
        let m = m4([
            [9.0, 3.0, 0.0, 9.0],
            [-5.0, -2.0, -6.0, -3.0],
            [-4.0, 9.0, 6.0, 4.0],
            [-7.0, 6.0, 6.0, 2.0],
        ]);
        let p = Point3::new(1.0, -2.0, 3.5).to_homogeneous();
        let inv = Cofactor::inverse(&m).unwrap();
        assert_abs_diff_eq!(inv * (m * p), p, epsilon = 1e-4);
    }
}
