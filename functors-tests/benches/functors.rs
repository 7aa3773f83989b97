use criterion::{black_box, criterion_group, criterion_main, Criterion};
use functors::{Action, Collection, Repeat, Transformed, While};
use functors_tests::{Double, Increment, LessThan};

fn bench_repeat(c: &mut Criterion) {
    let action = Repeat::new(1024, Increment);
    c.bench_function("repeat 1024 increments", |b| {
        b.iter(|| {
            let mut n = 0i64;
            action.execute(&mut n);
            black_box(n)
        })
    });
}

fn bench_while(c: &mut Criterion) {
    let action = While::new(LessThan(1024), Increment, false);
    c.bench_function("while loop to 1024", |b| {
        b.iter(|| {
            let mut n = 0i64;
            action.execute(&mut n);
            black_box(n)
        })
    });
}

fn bench_transformed_add(c: &mut Criterion) {
    c.bench_function("transformed vec, 1024 adds", |b| {
        b.iter(|| {
            let mut decorated = Transformed::new(Vec::with_capacity(1024), Double);
            for i in 0..1024i64 {
                decorated.add(black_box(i));
            }
            black_box(decorated.into_inner())
        })
    });
}

criterion_group!(benches, bench_repeat, bench_while, bench_transformed_add);
criterion_main!(benches);
