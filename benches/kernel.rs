use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pivot_lattice::{BoundingBox, Point, Transform};
use rand::prelude::*;
use rand::rngs::StdRng;

fn random_boxes(n: usize) -> Vec<BoundingBox<2>> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n)
        .map(|_| {
            let a = Point::new([rng.gen_range(-1000..1000), rng.gen_range(-1000..1000)]);
            let b = Point::new([rng.gen_range(-1000..1000), rng.gen_range(-1000..1000)]);
            BoundingBox::hull(&[a, b]).unwrap()
        })
        .collect()
}

fn benchmark_box_ops(c: &mut Criterion) {
    let boxes = random_boxes(1024);

    c.bench_function("box_union_1024", |b| {
        b.iter(|| boxes.iter().fold(boxes[0], |acc, x| acc | *x))
    });

    c.bench_function("box_intersects_1024", |b| {
        b.iter(|| boxes.windows(2).filter(|w| w[0].intersects(&w[1])).count())
    });
}

fn benchmark_transform_ops(c: &mut Criterion) {
    let boxes = random_boxes(1024);
    let transforms = Transform::<2>::all();

    c.bench_function("transform_apply_box_1024", |b| {
        b.iter(|| {
            for (i, x) in boxes.iter().enumerate() {
                black_box(transforms[i % transforms.len()] * *x);
            }
        })
    });

    c.bench_function("transform_compose_inverse", |b| {
        b.iter(|| {
            let mut acc = Transform::<2>::identity();
            for t in &transforms {
                acc = acc * t.inverse();
            }
            black_box(acc)
        })
    });
}

fn benchmark_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &size in &[1_000usize, 100_000] {
        let mut rng = StdRng::seed_from_u64(1);
        let points: Vec<Point<2>> = (0..size)
            .map(|_| Point::new([rng.gen_range(-10_000..10_000), rng.gen_range(-10_000..10_000)]))
            .collect();

        group.bench_with_input(BenchmarkId::new("serial", size), &points, |b, pts| {
            b.iter(|| BoundingBox::hull(pts).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &points, |b, pts| {
            b.iter(|| BoundingBox::par_hull(pts).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_box_ops, benchmark_transform_ops, benchmark_hull);
criterion_main!(benches);
