//! Public multiplication entry points: validation, padding, recursion and
//! truncation.

use tracing::debug;

use crate::element::Element;
use crate::error::StrassenError;
use crate::matrix::{Dimensions, Matrix};
use crate::naive::check_multiplicable;
use crate::options::Options;
use crate::padding::{pad, padded_side, truncate};
use crate::recursive::strassen_recursive;

/// Multiply `m1 * m2` with Strassen's algorithm and default options.
///
/// # Errors
///
/// [`StrassenError::DimensionMismatch`] if `cols(m1) != rows(m2)`.
///
/// # Example
/// ```
/// use strassen_core::{strassen, Matrix};
///
/// let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn strassen<T: Element>(m1: &Matrix<T>, m2: &Matrix<T>) -> Result<Matrix<T>, StrassenError> {
    strassen_with_options(m1, m2, &Options::default())
}

/// Multiply `m1 * m2` with Strassen's algorithm.
///
/// Operands are padded (as copies) to the smallest common power-of-two square
/// side, multiplied recursively, and the result is cut back to
/// `(rows(m1), cols(m2))`. Operands that are already equal power-of-two
/// squares skip the padding step.
pub fn strassen_with_options<T: Element>(
    m1: &Matrix<T>,
    m2: &Matrix<T>,
    opts: &Options,
) -> Result<Matrix<T>, StrassenError> {
    check_multiplicable(m1, m2)?;

    let (left, right) = (m1.dimensions(), m2.dimensions());
    let side = padded_side(left, right);
    let canonical = left.is_square() && left == right && left.rows == side;
    debug!(%left, %right, side, canonical, parallel = opts.parallel, "strassen multiply");

    let product = if canonical {
        strassen_recursive(m1, m2, opts)?
    } else {
        let a = pad(m1, side)?;
        let b = pad(m2, side)?;
        strassen_recursive(&a, &b, opts)?
    };

    let out = Dimensions::new(left.rows, right.cols);
    if product.dimensions() == out {
        return Ok(product);
    }
    Ok(truncate(&product, out)?)
}

/// Multiply two matrices given as nested rows.
///
/// # Errors
///
/// [`StrassenError::Shape`] if either input is empty or ragged, otherwise as
/// [`strassen`].
pub fn strassen_rows<T: Element>(
    rows1: &[Vec<T>],
    rows2: &[Vec<T>],
) -> Result<Vec<Vec<T>>, StrassenError> {
    let m1 = Matrix::from_rows(rows1)?;
    let m2 = Matrix::from_rows(rows2)?;
    Ok(strassen(&m1, &m2)?.to_rows())
}
