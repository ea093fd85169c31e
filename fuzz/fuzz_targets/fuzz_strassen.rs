#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{naive_multiply, strassen, Matrix, StrassenError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Shapes capped at 16 for speed; the inner dimension may disagree
    let m = usize::from(data[0] % 16) + 1;
    let k = usize::from(data[1] % 16) + 1;
    let n = usize::from(data[2] % 16) + 1;
    let b_rows = if data[3] & 1 == 0 { k } else { usize::from(data[3] % 16) + 1 };
    let values = &data[4..];
    let value = |i: usize| -> i64 {
        values
            .get(i % values.len().max(1))
            .map_or(1, |&b| i64::from(b as i8))
    };

    let a = Matrix::from_fn(m, k, |r, c| value(r * k + c)).unwrap();
    let b = Matrix::from_fn(b_rows, n, |r, c| value(m * k + r * n + c)).unwrap();

    match (strassen(&a, &b), naive_multiply(&a, &b)) {
        (Ok(fast), Ok(slow)) => assert_eq!(fast, slow),
        (
            Err(StrassenError::DimensionMismatch { .. }),
            Err(StrassenError::DimensionMismatch { .. }),
        ) => {}
        (fast, slow) => panic!("strassen {fast:?} vs naive {slow:?}"),
    }
});
