//! Quadrant split and join.

use crate::element::Element;
use crate::error::ShapeError;
use crate::matrix::Matrix;

/// The four equal blocks of a matrix split at the midpoint of each dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants<T> {
    pub top_left: Matrix<T>,
    pub top_right: Matrix<T>,
    pub bottom_left: Matrix<T>,
    pub bottom_right: Matrix<T>,
}

/// Split `a` into four `(rows/2, cols/2)` quadrants.
///
/// # Errors
///
/// [`ShapeError::OddDimension`] unless both dimensions are even.
pub fn split_quadrants<T: Element>(a: &Matrix<T>) -> Result<Quadrants<T>, ShapeError> {
    let dims = a.dimensions();
    if dims.rows % 2 != 0 || dims.cols % 2 != 0 {
        return Err(ShapeError::OddDimension(dims));
    }
    let (h, w) = (dims.rows / 2, dims.cols / 2);
    Ok(Quadrants {
        top_left: a.block(0, 0, h, w),
        top_right: a.block(0, w, h, w),
        bottom_left: a.block(h, 0, h, w),
        bottom_right: a.block(h, w, h, w),
    })
}

/// Reassemble `[TL TR; BL BR]`.
///
/// # Errors
///
/// [`ShapeError::QuadrantMismatch`] when rows of the left and right halves or
/// columns of the top and bottom halves disagree.
pub fn join_quadrants<T: Element>(q: &Quadrants<T>) -> Result<Matrix<T>, ShapeError> {
    let tl = q.top_left.dimensions();
    let tr = q.top_right.dimensions();
    let bl = q.bottom_left.dimensions();
    let br = q.bottom_right.dimensions();

    if tl.rows != tr.rows || bl.rows != br.rows || tl.cols != bl.cols || tr.cols != br.cols {
        return Err(ShapeError::QuadrantMismatch {
            top_left: tl,
            top_right: tr,
            bottom_left: bl,
            bottom_right: br,
        });
    }

    let cols = tl.cols + tr.cols;
    let mut data = Vec::with_capacity((tl.rows + bl.rows) * cols);
    for (left, right) in q.top_left.rows().zip(q.top_right.rows()) {
        data.extend_from_slice(left);
        data.extend_from_slice(right);
    }
    for (left, right) in q.bottom_left.rows().zip(q.bottom_right.rows()) {
        data.extend_from_slice(left);
        data.extend_from_slice(right);
    }
    Ok(Matrix::from_parts(cols, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Dimensions;

    fn m(rows: &[&[i64]]) -> Matrix<i64> {
        let rows: Vec<Vec<i64>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn split_4x4() {
        let a = Matrix::from_fn(4, 4, |r, c| (r * 4 + c) as i64).unwrap();
        let q = split_quadrants(&a).unwrap();
        assert_eq!(q.top_left, m(&[&[0, 1], &[4, 5]]));
        assert_eq!(q.top_right, m(&[&[2, 3], &[6, 7]]));
        assert_eq!(q.bottom_left, m(&[&[8, 9], &[12, 13]]));
        assert_eq!(q.bottom_right, m(&[&[10, 11], &[14, 15]]));
    }

    #[test]
    fn split_rectangular() {
        let a = m(&[&[1, 2, 3, 4], &[5, 6, 7, 8]]);
        let q = split_quadrants(&a).unwrap();
        assert_eq!(q.top_left, m(&[&[1, 2]]));
        assert_eq!(q.top_right, m(&[&[3, 4]]));
        assert_eq!(q.bottom_left, m(&[&[5, 6]]));
        assert_eq!(q.bottom_right, m(&[&[7, 8]]));
    }

    #[test]
    fn split_odd_fails() {
        let a = Matrix::<i64>::identity(3).unwrap();
        assert_eq!(
            split_quadrants(&a),
            Err(ShapeError::OddDimension(Dimensions::new(3, 3)))
        );
        let b = m(&[&[1, 2, 3], &[4, 5, 6]]);
        assert!(matches!(
            split_quadrants(&b),
            Err(ShapeError::OddDimension(_))
        ));
    }

    #[test]
    fn join_inverts_split() {
        let a = Matrix::from_fn(6, 4, |r, c| (r as i64) - 2 * (c as i64)).unwrap();
        let q = split_quadrants(&a).unwrap();
        assert_eq!(join_quadrants(&q).unwrap(), a);
    }

    #[test]
    fn join_mismatched_fails() {
        let q = Quadrants {
            top_left: m(&[&[1]]),
            top_right: m(&[&[2], &[3]]),
            bottom_left: m(&[&[4]]),
            bottom_right: m(&[&[5]]),
        };
        assert!(matches!(
            join_quadrants(&q),
            Err(ShapeError::QuadrantMismatch { .. })
        ));
    }
}
