//! Recursive Strassen engine on square power-of-two operands.
//!
//! Each level splits both operands into quadrants, forms seven products of
//! sums/differences, and recombines them into the four quadrants of the
//! result. Seven products per level instead of eight gives the
//! `O(n^log2(7))` bound.

use crate::base_case::multiply_2x2;
use crate::constants::{BASE_CASE_SIZE, PRODUCTS_PER_LEVEL};
use crate::element::Element;
use crate::error::{ShapeError, StrassenError};
use crate::matrix::{add, subtract, Matrix};
use crate::naive::naive_kernel;
use crate::options::Options;
use crate::quadrant::{join_quadrants, split_quadrants, Quadrants};

/// Multiply two square matrices of equal power-of-two side.
///
/// # Errors
///
/// [`ShapeError::NotPowerOfTwoSquare`] if the operands are not square, not
/// the same size, or their side is not a power of two.
pub fn strassen_recursive<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    opts: &Options,
) -> Result<Matrix<T>, StrassenError> {
    let (left, right) = (a.dimensions(), b.dimensions());
    if !left.is_square() || left != right || !left.rows.is_power_of_two() {
        return Err(ShapeError::NotPowerOfTwoSquare { left, right }.into());
    }
    Ok(recurse(a, b, opts)?)
}

fn recurse<T: Element>(a: &Matrix<T>, b: &Matrix<T>, opts: &Options) -> Result<Matrix<T>, ShapeError> {
    let side = a.nrows();
    if side == BASE_CASE_SIZE {
        return multiply_2x2(a, b);
    }
    if side < BASE_CASE_SIZE || side <= opts.strassen_threshold {
        return Ok(naive_kernel(a, b));
    }

    let Quadrants {
        top_left: qa,
        top_right: qb,
        bottom_left: qc,
        bottom_right: qd,
    } = split_quadrants(a)?;
    let Quadrants {
        top_left: qe,
        top_right: qf,
        bottom_left: qg,
        bottom_right: qh,
    } = split_quadrants(b)?;

    let f_minus_h = subtract(&qf, &qh)?;
    let a_plus_b = add(&qa, &qb)?;
    let c_plus_d = add(&qc, &qd)?;
    let g_minus_e = subtract(&qg, &qe)?;
    let a_plus_d = add(&qa, &qd)?;
    let e_plus_h = add(&qe, &qh)?;
    let b_minus_d = subtract(&qb, &qd)?;
    let g_plus_h = add(&qg, &qh)?;
    let a_minus_c = subtract(&qa, &qc)?;
    let e_plus_f = add(&qe, &qf)?;

    let operands: [(&Matrix<T>, &Matrix<T>); 7] = [
        (&qa, &f_minus_h),
        (&a_plus_b, &qh),
        (&c_plus_d, &qe),
        (&qd, &g_minus_e),
        (&a_plus_d, &e_plus_h),
        (&b_minus_d, &g_plus_h),
        (&a_minus_c, &e_plus_f),
    ];
    let product = |i: usize| recurse(operands[i].0, operands[i].1, opts);

    let parallel = opts.forks_at(side);
    tracing::trace!(side, parallel, "strassen level");

    let [t1, t2, t3, t4, t5, t6, t7] = if parallel {
        fork_seven(&product)
    } else {
        std::array::from_fn(product)
    };
    let (t1, t2, t3, t4, t5, t6, t7) = (&t1?, &t2?, &t3?, &t4?, &t5?, &t6?, &t7?);

    join_quadrants(&Quadrants {
        top_left: add(&subtract(&add(t5, t4)?, t2)?, t6)?,
        top_right: add(t1, t2)?,
        bottom_left: add(t3, t4)?,
        bottom_right: subtract(&subtract(&add(t1, t5)?, t3)?, t7)?,
    })
}

/// Evaluate `f(0)..f(6)` as nested `rayon::join` pairs.
fn fork_seven<R: Send>(f: &(impl Fn(usize) -> R + Sync)) -> [R; 7] {
    let (((r0, r1), (r2, r3)), ((r4, r5), r6)) = rayon::join(
        || rayon::join(|| rayon::join(|| f(0), || f(1)), || rayon::join(|| f(2), || f(3))),
        || rayon::join(|| rayon::join(|| f(4), || f(5)), || f(6)),
    );
    [r0, r1, r2, r3, r4, r5, r6]
}

/// Number of scalar multiplications the engine performs for a padded
/// `side x side` product under `opts`.
#[must_use]
pub fn scalar_multiplications(side: usize, opts: &Options) -> u64 {
    let side_u64 = side as u64;
    if side <= BASE_CASE_SIZE.max(opts.strassen_threshold) {
        return side_u64.saturating_pow(3);
    }
    PRODUCTS_PER_LEVEL.saturating_mul(scalar_multiplications(side / 2, opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Dimensions;
    use crate::naive::naive_multiply;

    fn sample(side: usize, seed: i64) -> Matrix<i64> {
        Matrix::from_fn(side, side, |r, c| {
            ((r as i64 * 31 + c as i64 * 17 + seed) % 19) - 9
        })
        .unwrap()
    }

    #[test]
    fn two_by_two_uses_base_case() {
        let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
        let c = strassen_recursive(&a, &b, &Options::default()).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn matches_naive_up_to_32() {
        let opts = Options::default();
        for side in [1, 2, 4, 8, 16, 32] {
            let a = sample(side, 3);
            let b = sample(side, 11);
            let expected = naive_multiply(&a, &b).unwrap();
            assert_eq!(strassen_recursive(&a, &b, &opts).unwrap(), expected, "side {side}");
        }
    }

    #[test]
    fn leaf_threshold_does_not_change_result() {
        let a = sample(16, 1);
        let b = sample(16, 2);
        let pure = strassen_recursive(&a, &b, &Options::default()).unwrap();
        let leafy = Options {
            strassen_threshold: 8,
            ..Default::default()
        };
        assert_eq!(strassen_recursive(&a, &b, &leafy).unwrap(), pure);
    }

    #[test]
    fn parallel_matches_sequential() {
        let a = sample(32, 5);
        let b = sample(32, 7);
        let seq = strassen_recursive(&a, &b, &Options::default()).unwrap();
        let par_opts = Options {
            parallel_threshold: 4,
            ..Default::default()
        }
        .with_parallel(true);
        assert_eq!(strassen_recursive(&a, &b, &par_opts).unwrap(), seq);
    }

    #[test]
    fn fork_seven_keeps_order() {
        assert_eq!(fork_seven(&|i| i * 10), [0, 10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn rejects_non_power_of_two() {
        let a = Matrix::<i64>::identity(3).unwrap();
        assert_eq!(
            strassen_recursive(&a, &a, &Options::default()),
            Err(StrassenError::Shape(ShapeError::NotPowerOfTwoSquare {
                left: Dimensions::new(3, 3),
                right: Dimensions::new(3, 3),
            }))
        );
    }

    #[test]
    fn rejects_unequal_sides() {
        let a = Matrix::<i64>::identity(2).unwrap();
        let b = Matrix::<i64>::identity(4).unwrap();
        assert!(strassen_recursive(&a, &b, &Options::default()).is_err());
    }

    #[test]
    fn multiplication_count() {
        let opts = Options::default();
        assert_eq!(scalar_multiplications(2, &opts), 8);
        assert_eq!(scalar_multiplications(4, &opts), 56);
        assert_eq!(scalar_multiplications(8, &opts), 392);
        let leafy = Options {
            strassen_threshold: 4,
            ..Default::default()
        };
        assert_eq!(scalar_multiplications(8, &leafy), 7 * 64);
    }
}
