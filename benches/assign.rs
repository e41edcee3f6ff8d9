use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use edit_delta::{assign, Options};

const MAX: i64 = 1 << 31;

// Source `i` is cheaply updated into target `i`, anything else is much more expensive.
fn diagonal(s: Option<&usize>, t: Option<&usize>) -> i64 {
    match (s, t) {
        (Some(i), Some(j)) if i == j => 1,
        (Some(_), Some(_)) => MAX,
        _ => MAX - 1,
    }
}

fn bench(c: &mut Criterion) {
    let options = Options::new(diagonal, MAX);

    let mut group = c.benchmark_group("assign");
    group.sample_size(10);

    for n in [10, 20, 50, 100, 200, 500, 1000] {
        let nodes: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &nodes, |b, nodes| {
            b.iter(|| assign(nodes, nodes, &options))
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
