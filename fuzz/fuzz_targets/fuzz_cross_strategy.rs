#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::registry::{DefaultFactory, StrategyFactory};
use strassen_core::{Matrix, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let side = usize::from(data[0] % 24) + 1;
    let opts = Options {
        strassen_threshold: usize::from(data[1] % 9),
        parallel_threshold: 1 << (data[2] % 6),
        ..Options::default()
    }
    .normalize();
    let values = &data[3..];
    let at = |i: usize| i64::from(values[i % values.len()] as i8);
    let a = Matrix::from_fn(side, side, |r, c| at(r * side + c)).unwrap();
    let b = Matrix::from_fn(side, side, |r, c| at(c * side + r)).unwrap();

    let factory = DefaultFactory::<i64>::new(opts);
    let reference = factory.get("naive").unwrap().multiply(&a, &b).unwrap();
    for name in factory.available() {
        let product = factory.get(name).unwrap().multiply(&a, &b).unwrap();
        assert_eq!(product, reference, "{name} disagrees with naive");
    }
});
