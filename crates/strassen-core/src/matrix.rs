//! Dense row-major matrix type and element-wise utilities.
//!
//! A [`Matrix`] can only be built through validating constructors, so every
//! live value is non-empty and rectangular. All operations borrow their
//! operands and return fresh matrices; nothing here mutates a caller's value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::ShapeError;

/// Row and column count of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Largest of the two dimensions.
    #[must_use]
    pub fn max_side(&self) -> usize {
        self.rows.max(self.cols)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Dimensions of a nested-row matrix: row count and first-row length.
///
/// # Errors
///
/// Returns [`ShapeError::Empty`] if there are no rows.
pub fn dimensions<T>(rows: &[Vec<T>]) -> Result<Dimensions, ShapeError> {
    let first = rows.first().ok_or(ShapeError::Empty)?;
    Ok(Dimensions::new(rows.len(), first.len()))
}

/// Dense matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(
        serialize = "T: Element + Serialize",
        deserialize = "T: Element + Deserialize<'de>"
    )
)]
pub struct Matrix<T> {
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Build a matrix from nested rows, copying the elements.
    ///
    /// # Errors
    ///
    /// [`ShapeError::Empty`] for no rows or zero-length rows,
    /// [`ShapeError::Ragged`] when a row's length differs from the first.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, ShapeError> {
        let dims = dimensions(rows)?;
        if dims.cols == 0 {
            return Err(ShapeError::Empty);
        }

        let mut data = Vec::with_capacity(dims.rows * dims.cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dims.cols {
                return Err(ShapeError::Ragged {
                    row: i,
                    expected: dims.cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            cols: dims.cols,
            data,
        })
    }

    /// Build a `rows x cols` matrix whose element at `(r, c)` is `f(r, c)`.
    ///
    /// # Errors
    ///
    /// [`ShapeError::Empty`] if either dimension is zero.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, ShapeError> {
        if rows == 0 || cols == 0 {
            return Err(ShapeError::Empty);
        }
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { cols, data })
    }

    /// Zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }

    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, ShapeError> {
        Self::from_fn(n, n, |r, c| if r == c { T::one() } else { T::zero() })
    }

    /// Crate-internal constructor; callers guarantee `cols > 0` and
    /// `data.len()` a non-zero multiple of `cols`.
    pub(crate) fn from_parts(cols: usize, data: Vec<T>) -> Self {
        debug_assert!(cols > 0 && !data.is_empty() && data.len() % cols == 0);
        Self { cols, data }
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.data.len() / self.cols, self.cols)
    }

    #[must_use]
    pub fn nrows(&self) -> usize {
        self.data.len() / self.cols
    }

    #[must_use]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.dimensions().is_square()
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Copy of the `rows x cols` block whose top-left corner is `(row0, col0)`.
    pub(crate) fn block(&self, row0: usize, col0: usize, rows: usize, cols: usize) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in self.rows().skip(row0).take(rows) {
            data.extend_from_slice(&row[col0..col0 + cols]);
        }
        Self::from_parts(cols, data)
    }

    /// Whether `other` has the same shape and every element is within
    /// `tolerance` of the corresponding one here. NaN never compares equal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a.distance(b) <= tolerance)
    }

    /// Largest element-wise distance to `other`, or `None` if shapes differ.
    #[must_use]
    pub fn max_distance(&self, other: &Self) -> Option<f64> {
        if self.dimensions() != other.dimensions() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a.distance(b))
                .fold(0.0, f64::max),
        )
    }

    fn zip_with(
        &self,
        other: &Self,
        op: impl Fn(T, T) -> T,
    ) -> Result<Self, ShapeError> {
        let (left, right) = (self.dimensions(), other.dimensions());
        if left != right {
            return Err(ShapeError::Mismatched { left, right });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self::from_parts(self.cols, data))
    }
}

/// Element-wise sum.
///
/// # Errors
///
/// [`ShapeError::Mismatched`] if the shapes differ.
pub fn add<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
    a.zip_with(b, T::plus)
}

/// Element-wise difference `a - b`.
///
/// # Errors
///
/// [`ShapeError::Mismatched`] if the shapes differ.
pub fn subtract<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
    a.zip_with(b, T::minus)
}

impl<T: Element> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl<T: Element> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.to_rows()
    }
}

/// One row per line, elements separated by a space.
impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{x}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[i64]]) -> Matrix<i64> {
        let rows: Vec<Vec<i64>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn dimensions_of_rows() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(dimensions(&rows).unwrap(), Dimensions::new(2, 3));
    }

    #[test]
    fn dimensions_of_no_rows_fails() {
        let rows: Vec<Vec<i64>> = Vec::new();
        assert_eq!(dimensions(&rows), Err(ShapeError::Empty));
    }

    #[test]
    fn from_rows_rejects_empty() {
        let none: Vec<Vec<f64>> = Vec::new();
        assert_eq!(Matrix::from_rows(&none), Err(ShapeError::Empty));
        assert_eq!(Matrix::<f64>::from_rows(&[vec![]]), Err(ShapeError::Empty));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![vec![1, 2], vec![3], vec![4, 5]];
        assert_eq!(
            Matrix::<i64>::from_rows(&rows),
            Err(ShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn from_rows_roundtrips_to_rows() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let a = Matrix::<i64>::from_rows(&rows).unwrap();
        assert_eq!(a.dimensions(), Dimensions::new(2, 3));
        assert_eq!(a.nrows(), 2);
        assert_eq!(a.ncols(), 3);
        assert_eq!(a.to_rows(), rows);
        assert_eq!(a.get(1, 2), Some(6));
        assert_eq!(a.get(0, 3), None);
        assert_eq!(a.get(2, 0), None);
    }

    #[test]
    fn identity_and_zeros() {
        let id = Matrix::<i64>::identity(3).unwrap();
        assert_eq!(id, m(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]));
        let z = Matrix::<f64>::zeros(2, 3).unwrap();
        assert!(z.rows().flatten().all(|&x| x == 0.0));
        assert_eq!(Matrix::<i64>::identity(0), Err(ShapeError::Empty));
        assert_eq!(Matrix::<i64>::zeros(3, 0), Err(ShapeError::Empty));
    }

    #[test]
    fn add_and_subtract() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let b = m(&[&[10, 20], &[30, 40]]);
        assert_eq!(add(&a, &b).unwrap(), m(&[&[11, 22], &[33, 44]]));
        assert_eq!(subtract(&a, &b).unwrap(), m(&[&[-9, -18], &[-27, -36]]));
    }

    #[test]
    fn add_shape_mismatch() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let b = m(&[&[1, 2, 3]]);
        assert_eq!(
            add(&a, &b),
            Err(ShapeError::Mismatched {
                left: Dimensions::new(2, 2),
                right: Dimensions::new(1, 3)
            })
        );
        assert!(subtract(&b, &a).is_err());
    }

    #[test]
    fn add_leaves_operands_untouched() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let b = m(&[&[5, 6], &[7, 8]]);
        let (a0, b0) = (a.clone(), b.clone());
        let _ = add(&a, &b).unwrap();
        let _ = subtract(&a, &b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn block_extracts_submatrix() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(a.block(1, 1, 2, 2), m(&[&[5, 6], &[8, 9]]));
        assert_eq!(a.block(0, 0, 1, 3), m(&[&[1, 2, 3]]));
    }

    #[test]
    fn approx_eq_with_tolerance() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![1.0 + 1e-12, 2.0]]).unwrap();
        let c = Matrix::from_rows(&[vec![1.1, 2.0]]).unwrap();
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&c, 1e-9));
        assert!((a.max_distance(&c).unwrap() - 0.1).abs() < 1e-9);

        let nan = Matrix::from_rows(&[vec![f64::NAN, 2.0]]).unwrap();
        assert!(!nan.approx_eq(&nan, 1.0));
    }

    #[test]
    fn display_one_row_per_line() {
        let a = m(&[&[1, 2], &[3, -4]]);
        assert_eq!(a.to_string(), "1 2\n3 -4");
    }

    #[test]
    fn serde_nested_rows() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
        let back: Matrix<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn serde_rejects_ragged() {
        let result: Result<Matrix<f64>, _> = serde_json::from_str("[[1.0, 2.0], [3.0]]");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("ragged"), "{err}");
    }
}
