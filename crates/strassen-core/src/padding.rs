//! Power-of-two padding and truncation.

use crate::constants::BASE_CASE_SIZE;
use crate::element::Element;
use crate::error::ShapeError;
use crate::matrix::{Dimensions, Matrix};

/// Smallest power of two covering every dimension of both operands, never
/// below the 2x2 base case.
#[must_use]
pub fn padded_side(left: Dimensions, right: Dimensions) -> usize {
    left.max_side()
        .max(right.max_side())
        .next_power_of_two()
        .max(BASE_CASE_SIZE)
}

/// Copy of `m` extended with zero columns on the right and zero rows at the
/// bottom to `side x side`. The input is never modified.
///
/// # Errors
///
/// [`ShapeError::WrongSize`] if `m` is larger than `side` in either dimension.
pub fn pad<T: Element>(m: &Matrix<T>, side: usize) -> Result<Matrix<T>, ShapeError> {
    let dims = m.dimensions();
    if dims.rows > side || dims.cols > side {
        return Err(ShapeError::WrongSize {
            expected: side,
            found: dims,
        });
    }

    let mut data = Vec::with_capacity(side * side);
    for row in m.rows() {
        data.extend_from_slice(row);
        data.resize(data.len() + side - dims.cols, T::zero());
    }
    data.resize(side * side, T::zero());
    Ok(Matrix::from_parts(side, data))
}

/// Top-left `dims` block of `m`, dropping trailing padding rows and columns.
///
/// # Errors
///
/// [`ShapeError::Mismatched`] if `dims` exceeds `m` or is empty.
pub fn truncate<T: Element>(m: &Matrix<T>, dims: Dimensions) -> Result<Matrix<T>, ShapeError> {
    let have = m.dimensions();
    if dims.rows == 0 || dims.cols == 0 || dims.rows > have.rows || dims.cols > have.cols {
        return Err(ShapeError::Mismatched {
            left: have,
            right: dims,
        });
    }
    Ok(m.block(0, 0, dims.rows, dims.cols))
}
