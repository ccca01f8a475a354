//! Every parallel strategy must reproduce the serial product exactly.

use foundation::ChunkSize;
use parbench_matmul::{multiply, Matrix, Strategy};
use proptest::prelude::*;
use rng::OperandSource;

fn all_strategies(kernels: usize) -> Vec<Strategy> {
    let mut v = vec![Strategy::Serial];
    v.extend(Strategy::parallel(kernels));
    v
}

fn serial_product(a: &Matrix, b: &Matrix) -> Matrix {
    let mut c = Matrix::zeros(a.rows(), a.rows()).unwrap();
    multiply(Strategy::Serial, a, b, &mut c, 1).unwrap();
    c
}

#[test]
fn four_by_four_sequence_operands() {
    let a = Matrix::from_vec(4, 4, (1..=16).collect()).unwrap();
    let b = Matrix::from_vec(4, 4, (1..=16).collect()).unwrap();
    let expected = serial_product(&a, &b);
    assert_eq!(expected.as_slice()[..4], [90, 100, 110, 120]);
    assert_eq!(expected.as_slice()[12..], [426, 484, 542, 600]);

    for threads in 1..=4 {
        for strategy in Strategy::parallel(6) {
            let mut c = Matrix::zeros(4, 4).unwrap();
            multiply(strategy, &a, &b, &mut c, threads).unwrap();
            assert_eq!(c, expected, "{} with {threads} threads", strategy.label());
        }
    }
}

#[test]
fn repeated_runs_are_idempotent() {
    let mut src = OperandSource::seeded(11);
    let (a, b) = src.operands(37, 37);
    let a = Matrix::from_vec(37, 37, a).unwrap();
    let b = Matrix::from_vec(37, 37, b).unwrap();

    for strategy in all_strategies(6) {
        let mut c = Matrix::zeros(37, 37).unwrap();
        multiply(strategy, &a, &b, &mut c, 5).unwrap();
        let first = c.clone();
        c.reset();
        multiply(strategy, &a, &b, &mut c, 5).unwrap();
        assert_eq!(c, first, "{}", strategy.label());
    }
}

#[test]
fn more_threads_than_rows() {
    let mut src = OperandSource::seeded(2);
    let (a, b) = src.operands(3, 8);
    let a = Matrix::from_vec(3, 8, a).unwrap();
    let b = Matrix::from_vec(8, 3, b).unwrap();
    let expected = serial_product(&a, &b);

    for strategy in Strategy::parallel(16) {
        let mut c = Matrix::zeros(3, 3).unwrap();
        multiply(strategy, &a, &b, &mut c, 12).unwrap();
        assert_eq!(c, expected, "{}", strategy.label());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parallel_matches_serial(
        m in 1usize..24,
        n in 1usize..24,
        threads in 1usize..9,
        kernels in 1usize..8,
        seed in any::<u64>(),
    ) {
        let mut src = OperandSource::seeded(seed);
        let (a, b) = src.operands(m, n);
        let a = Matrix::from_vec(m, n, a).unwrap();
        let b = Matrix::from_vec(n, m, b).unwrap();
        let expected = serial_product(&a, &b);

        for strategy in [
            Strategy::Block,
            Strategy::Chunked(ChunkSize::Unit),
            Strategy::Chunked(ChunkSize::PerKernel(kernels)),
        ] {
            let mut c = Matrix::zeros(m, m).unwrap();
            multiply(strategy, &a, &b, &mut c, threads).unwrap();
            prop_assert_eq!(&c, &expected);
        }
    }
}
