use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prim_maze::{render, MazeGenerator, Prim, Sampling};

const SIZE: (usize, usize) = (100, 100);

pub fn prim_uniform(c: &mut Criterion) {
    let prim = Prim::new(Sampling::Uniform);
    c.bench_function("prim_uniform", |b| {
        b.iter(|| prim.generate(black_box(SIZE.0), black_box(SIZE.1), black_box(0)).unwrap())
    });
}

pub fn prim_skip_last(c: &mut Criterion) {
    let prim = Prim::new(Sampling::SkipLast);
    c.bench_function("prim_skip_last", |b| {
        b.iter(|| prim.generate(black_box(SIZE.0), black_box(SIZE.1), black_box(0)).unwrap())
    });
}

pub fn render_text(c: &mut Criterion) {
    let maze = Prim::default().generate(SIZE.0, SIZE.1, 0).unwrap();
    c.bench_function("render", |b| b.iter(|| render(black_box(&maze))));
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = prim_uniform, prim_skip_last, render_text}
criterion_main!(benches);
