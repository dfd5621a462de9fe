use criterion::{Criterion, black_box, criterion_group, criterion_main};
use newton_explorer::{parse_polynomial, solve_roots};
use std::collections::HashMap;

fn bench_solve_roots(c: &mut Criterion) {
    let no_bindings = HashMap::new();

    let cubic = parse_polynomial("z^3 - 1", &no_bindings).unwrap();
    c.bench_function("solve_roots_cubic", |b| {
        b.iter(|| solve_roots(black_box(&cubic)));
    });

    let degree_twelve = parse_polynomial("z^12 - z^5 + 3*z - 1", &no_bindings).unwrap();
    c.bench_function("solve_roots_degree_12", |b| {
        b.iter(|| solve_roots(black_box(&degree_twelve)));
    });
}

criterion_group!(benches, bench_solve_roots);
criterion_main!(benches);
