//! Direct 2x2 product, the terminal case of the recursion.

use crate::constants::BASE_CASE_SIZE;
use crate::element::Element;
use crate::error::ShapeError;
use crate::matrix::Matrix;

/// Multiply two 2x2 matrices with the four dot-product formula.
///
/// # Errors
///
/// [`ShapeError::WrongSize`] unless both operands are 2x2.
pub fn multiply_2x2<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
    for m in [a, b] {
        let dims = m.dimensions();
        if dims.rows != BASE_CASE_SIZE || dims.cols != BASE_CASE_SIZE {
            return Err(ShapeError::WrongSize {
                expected: BASE_CASE_SIZE,
                found: dims,
            });
        }
    }

    let [a00, a01, a10, a11] = corners(a);
    let [b00, b01, b10, b11] = corners(b);

    Ok(Matrix::from_parts(
        2,
        vec![
            a00.times(b00).plus(a01.times(b10)),
            a00.times(b01).plus(a01.times(b11)),
            a10.times(b00).plus(a11.times(b10)),
            a10.times(b01).plus(a11.times(b11)),
        ],
    ))
}

fn corners<T: Element>(m: &Matrix<T>) -> [T; 4] {
    let mut out = [T::zero(); 4];
    for (slot, x) in out.iter_mut().zip(m.rows().flatten()) {
        *slot = *x;
    }
    out
}
