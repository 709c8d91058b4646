use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};

use ndarray::{Array2, Array3};
use rand::Rng;

use sofa2wav::layout::Direction;
use sofa2wav::reader::Sofa;

fn bench_nearest(b: &mut Bencher, rows: usize) {
    let mut rng = rand::thread_rng();

    let mut positions = Array2::zeros((rows, 3));
    for mut row in positions.rows_mut() {
        row[0] = rng.gen_range(0.0..360.0);
        row[1] = rng.gen_range(-90.0..90.0);
        row[2] = 1.5;
    }

    let irs = Array3::zeros((rows, 2, 256));
    let sofa = Sofa::from_parts(positions, irs).unwrap();

    b.iter(|| sofa.nearest(Direction::new(123.4, 12.3)));
}

fn bench_table_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Nearest direction");
    for i in [64, 512, 2048, 8192].iter() {
        group.bench_with_input(BenchmarkId::new("rows", i), i, |b, i| bench_nearest(b, *i));
    }
    group.finish();
}

criterion_group!(benches, bench_table_sizes);
criterion_main!(benches);
