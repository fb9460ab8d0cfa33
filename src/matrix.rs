//! Small dense linear-algebra helpers used at setup time.
//!
//! These work on arbitrary dimensions and report shape problems as
//! [`PhysicsError::DimensionMismatch`] instead of truncating. The per-tick
//! hot path uses [`Vec2`] directly and never touches this module.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Euclidean distance between two points of any (equal) dimension.
pub fn distance<F: Float>(p: &[F], q: &[F]) -> Result<F, PhysicsError> {
    if p.len() != q.len() {
        return Err(PhysicsError::DimensionMismatch { expected: p.len(), found: q.len() });
    }
    let sum = p
        .iter()
        .zip(q)
        .fold(F::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b));
    Ok(sum.sqrt())
}

/// Row-major dense matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<F: Float> {
    rows: usize,
    cols: usize,
    data: AllocVec<F>,
}

impl<F: Float> Matrix<F> {
    /// Wrap row-major `data` as a `rows` x `cols` matrix.
    pub fn new(rows: usize, cols: usize, data: AllocVec<F>) -> Result<Self, PhysicsError> {
        if data.len() != rows * cols {
            return Err(PhysicsError::DimensionMismatch {
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Build from a list of rows. Ragged input is rejected.
    pub fn from_rows(rows: &[&[F]]) -> Result<Self, PhysicsError> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = AllocVec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(PhysicsError::DimensionMismatch { expected: cols, found: row.len() });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix { rows: rows.len(), cols, data })
    }

    /// 2x2 counter-clockwise rotation `[[cos, -sin], [sin, cos]]`.
    pub fn rotation(angle: F) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Matrix { rows: 2, cols: 2, data: alloc::vec![c, -s, s, c] }
    }

    /// One row per point: an `n` x 2 matrix.
    pub fn from_points(points: &[Vec2<F>]) -> Self {
        let data = points.iter().flat_map(|p| p.to_array()).collect();
        Matrix { rows: points.len(), cols: 2, data }
    }

    /// Read an `n` x 2 matrix back as points.
    pub fn to_points(&self) -> Result<AllocVec<Vec2<F>>, PhysicsError> {
        if self.cols != 2 {
            return Err(PhysicsError::DimensionMismatch { expected: 2, found: self.cols });
        }
        Ok(self.data.chunks_exact(2).map(|r| Vec2::new(r[0], r[1])).collect())
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    /// Element at (`row`, `col`), if in range.
    pub fn get(&self, row: usize, col: usize) -> Option<F> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// `self * other`. Fails unless `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Matrix<F>) -> Result<Matrix<F>, PhysicsError> {
        if self.cols != other.rows {
            return Err(PhysicsError::DimensionMismatch { expected: self.cols, found: other.rows });
        }
        let mut data = alloc::vec![F::zero(); self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = F::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = sum;
            }
        }
        Ok(Matrix { rows: self.rows, cols: other.cols, data })
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Matrix<F> {
        let mut data = AllocVec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Matrix { rows: self.cols, cols: self.rows, data }
    }
}

/// Rotate every row of an `n` x 2 point matrix about the origin.
///
/// Computed as `(R * Pᵀ)ᵀ`; any other column count is a dimension mismatch.
pub fn rotate_2d<F: Float>(points: &Matrix<F>, angle: F) -> Result<Matrix<F>, PhysicsError> {
    Ok(Matrix::rotation(angle).multiply(&points.transpose())?.transpose())
}

/// [`rotate_2d`] over a point slice.
pub fn rotate_points<F: Float>(points: &[Vec2<F>], angle: F) -> Result<AllocVec<Vec2<F>>, PhysicsError> {
    rotate_2d(&Matrix::from_points(points), angle)?.to_points()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_in_three_dimensions() {
        let d = distance(&[0.0f64, 0.0, 0.0], &[1.0, 2.0, 2.0]).unwrap();
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn distance_rejects_mismatched_lengths() {
        let err = distance(&[0.0f32, 0.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, PhysicsError::DimensionMismatch { expected: 2, found: 3 });
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows: [&[f32]; 2] = [&[1.0, 2.0], &[3.0]];
        assert_eq!(
            Matrix::from_rows(&rows),
            Err(PhysicsError::DimensionMismatch { expected: 2, found: 1 })
        );
    }

    #[test]
    fn multiply_checks_inner_dimension() {
        let a = Matrix::new(2, 3, alloc::vec![1.0f32; 6]).unwrap();
        let b = Matrix::new(2, 2, alloc::vec![1.0f32; 4]).unwrap();
        assert_eq!(
            a.multiply(&b),
            Err(PhysicsError::DimensionMismatch { expected: 3, found: 2 })
        );
    }

    #[test]
    fn multiply_small() {
        let a_rows: [&[f64]; 2] = [&[1.0, 2.0], &[3.0, 4.0]];
        let b_rows: [&[f64]; 2] = [&[5.0], &[6.0]];
        let a = Matrix::from_rows(&a_rows).unwrap();
        let b = Matrix::from_rows(&b_rows).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!((c.rows(), c.cols()), (2, 1));
        assert_eq!(c.get(0, 0), Some(17.0));
        assert_eq!(c.get(1, 0), Some(39.0));
    }

    #[test]
    fn transpose_swaps_shape() {
        let rows: [&[f32]; 2] = [&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]];
        let m = Matrix::from_rows(&rows).unwrap();
        let t = m.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.get(2, 0), Some(3.0));
        assert_eq!(t.get(0, 1), Some(4.0));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn rotate_2d_rejects_three_columns() {
        let m = Matrix::new(1, 3, alloc::vec![1.0f32, 0.0, 0.0]).unwrap();
        assert_eq!(
            rotate_2d(&m, 0.5),
            Err(PhysicsError::DimensionMismatch { expected: 2, found: 3 })
        );
    }

    #[test]
    fn rotate_points_matches_vec2_rotate() {
        let pts = [Vec2::new(1.0f64, 0.0), Vec2::new(2.5, -1.0)];
        let rotated = rotate_points(&pts, 1.2).unwrap();
        for (r, p) in rotated.iter().zip(pts.iter()) {
            let expected = p.rotate(1.2);
            assert!((r.x - expected.x).abs() < 1e-12);
            assert!((r.y - expected.y).abs() < 1e-12);
        }
    }

    #[test]
    fn rotation_preserves_distances() {
        let pts = [Vec2::new(0.0f64, 0.0), Vec2::new(5.0, 0.0), Vec2::new(2.5, 2.5)];
        let rotated = rotate_points(&pts, 2.0).unwrap();
        let before = pts[1].distance(pts[2]);
        let after = rotated[1].distance(rotated[2]);
        assert!((before - after).abs() < 1e-12);
    }
}
