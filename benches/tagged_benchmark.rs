use ballast::{Optional, Outcome, Variant};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_variant_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("variant_dispatch");

    group.bench_function("variant_emplace_cycle", |b| {
        let mut v: Variant<u32, f64, [u8; 16]> = Variant::new();
        b.iter(|| {
            v.emplace(black_box(7u32));
            v.emplace(black_box(1.5f64));
            v.emplace(black_box([3u8; 16]));
            black_box(v.index());
        });
    });

    group.bench_function("variant_get_if_hit_and_miss", |b| {
        let v: Variant<u32, f64, [u8; 16]> = Variant::from_alternative(2.5f64);
        b.iter(|| {
            black_box(black_box(&v).get_if::<f64, _>());
            black_box(black_box(&v).get_if::<u32, _>());
        });
    });

    group.finish();
}

fn bench_optional_outcome(c: &mut Criterion) {
    let mut group = c.benchmark_group("optional_outcome");

    group.bench_function("optional_map_unwrap_or", |b| {
        b.iter(|| {
            let some = Optional::some(black_box(21u64)).map(|v| v * 2).unwrap_or(0);
            let none = Optional::<u64>::none().map(|v| v * 2).unwrap_or(0);
            black_box(some + none)
        });
    });

    group.bench_function("outcome_and_then_chain", |b| {
        b.iter(|| {
            let res: Outcome<u32, u8> = Outcome::ok_value(black_box(3))
                .and_then(|v| if v > 1 { Outcome::ok_value(v * 10) } else { Outcome::err_value(1) })
                .map_err(|e| e + 1);
            black_box(res.unwrap_or(0))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_variant_dispatch, bench_optional_outcome);
criterion_main!(benches);
