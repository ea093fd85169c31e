//! Triple-loop reference multiplication.

use crate::element::Element;
use crate::error::StrassenError;
use crate::matrix::Matrix;

/// Check that `a` and `b` can be multiplied.
pub(crate) fn check_multiplicable<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<(), StrassenError> {
    let (left, right) = (a.dimensions(), b.dimensions());
    if left.cols != right.rows {
        return Err(StrassenError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Product `a * b` by the textbook `O(n^3)` loop (i-k-j order).
///
/// # Errors
///
/// [`StrassenError::DimensionMismatch`] if `cols(a) != rows(b)`.
pub fn naive_multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, StrassenError> {
    check_multiplicable(a, b)?;
    Ok(naive_kernel(a, b))
}

/// Unchecked kernel; the caller has verified `cols(a) == rows(b)`.
pub(crate) fn naive_kernel<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let n = b.ncols();
    let mut data = vec![T::zero(); a.nrows() * n];
    for (out_row, a_row) in data.chunks_exact_mut(n).zip(a.rows()) {
        for (&a_ik, b_row) in a_row.iter().zip(b.rows()) {
            for (out, &b_kj) in out_row.iter_mut().zip(b_row) {
                *out = out.plus(a_ik.times(b_kj));
            }
        }
    }
    Matrix::from_parts(n, data)
}
