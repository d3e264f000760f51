//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation pipeline (randomized fill plus
//! uniqueness-preserving removal) for each supported board size.
//!
//! # Test Data
//!
//! Uses three fixed seeds per size so repeated runs measure the same
//! puzzles while still covering several cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use multidoku_core::BoardSize;
use multidoku_generator::PuzzleGenerator;

const SEEDS: [u64; 3] = [42, 1_000_003, 0xDEAD_BEEF];

fn bench_generate(c: &mut Criterion) {
    for (size, clues) in [
        (BoardSize::Six, 16),
        (BoardSize::Eight, 25),
        (BoardSize::Nine, 30),
    ] {
        for seed in SEEDS {
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{size}"), format!("seed_{seed}")),
                &seed,
                |b, &seed| {
                    b.iter(|| {
                        let mut generator = PuzzleGenerator::from_seed(seed);
                        generator.generate(size, clues).unwrap()
                    });
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(12));
    targets = bench_generate
);
criterion_main!(benches);
