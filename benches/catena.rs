use catena::{Catena, CatenaParams};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn params(lambda: u8, garlic: u8) -> CatenaParams {
    CatenaParams {
        lambda,
        min_garlic: garlic,
        garlic,
        hashlen: 64,
    }
}

pub fn bench_dragonfly(c: &mut Criterion) {
    let mut group = c.benchmark_group("dragonfly");

    for (name, mut catena) in [
        ("fast g=14", Catena::dragonfly()),
        ("full g=14", Catena::dragonfly_full()),
    ] {
        let p = params(2, 14);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut password = *b"password";
                catena.hash_password(black_box(&mut password), black_box(b"saltsaltsaltsalt"), None, &p)
            })
        });
    }

    group.finish();
}

pub fn bench_butterfly(c: &mut Criterion) {
    let mut group = c.benchmark_group("butterfly");

    for (name, mut catena) in [
        ("fast g=12", Catena::butterfly()),
        ("full g=12", Catena::butterfly_full()),
    ] {
        let p = params(4, 12);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut password = *b"password";
                catena.hash_password(black_box(&mut password), black_box(b"saltsaltsaltsalt"), None, &p)
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_dragonfly, bench_butterfly
}
criterion_main!(benches);
