use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metonic_core::athens;
use metonic_cycles::{combinations, cycle_set, in_cycle, segments_of_all, Rules};

fn generation_bench(c: &mut Criterion) {
    let rules = Rules::default().with_max_ordinary(4);

    c.bench_function("combinations_relaxed", |b| {
        b.iter(|| black_box(combinations(black_box(rules.clone())).unwrap()));
    });

    let raw = combinations(rules.clone()).unwrap();
    c.bench_function("cycle_set_relaxed", |b| {
        b.iter(|| black_box(cycle_set(black_box(raw.clone())).unwrap()));
    });

    let classes = cycle_set(rules).unwrap();
    let probe = athens().as_segment();
    c.bench_function("segments_and_membership", |b| {
        b.iter(|| {
            black_box(segments_of_all(&classes, 7).unwrap());
            black_box(in_cycle(&probe, &classes));
        });
    });
}

criterion_group!(benches, generation_bench);
criterion_main!(benches);
