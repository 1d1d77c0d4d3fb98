extern crate speedpunk;
extern crate speedpunk_tests;
#[macro_use]
extern crate criterion;

use criterion::Criterion;
use speedpunk::comb::{CombDirection, CombGenerator, CombOptions};
use speedpunk::extra::parse_path_data;
use speedpunk::path::math::point;
use speedpunk::path::Path;
use speedpunk_tests::*;

const N: usize = 10;

fn circles() -> Vec<Path> {
    (0..N)
        .map(|i| circle(point(i as f64 * 20.0, 0.0), 5.0 + i as f64))
        .collect()
}

fn comb_circles(bench: &mut Criterion) {
    let paths = circles();
    let options = CombOptions::DEFAULT.with_direction(CombDirection::Both);
    let mut generator = CombGenerator::new();
    let mut output = Vec::new();

    bench.bench_function("comb circles", |b| {
        b.iter(|| {
            output.clear();
            generator.generate(&paths, &options, &mut output).unwrap();
            std::hint::black_box(&output);
        })
    });
}

fn comb_glyph_fine_step(bench: &mut Criterion) {
    let outline = parse_path_data(GLYPH).unwrap();
    let options = CombOptions::DEFAULT.with_step(0.005).with_tick_spacing(2.0);
    let mut generator = CombGenerator::new();
    let mut output = Vec::new();

    bench.bench_function("comb glyph fine step", |b| {
        b.iter(|| {
            output.clear();
            generator.generate(&outline, &options, &mut output).unwrap();
            std::hint::black_box(&output);
        })
    });
}

fn parse_glyph(bench: &mut Criterion) {
    bench.bench_function("parse glyph", |b| {
        b.iter(|| {
            std::hint::black_box(parse_path_data(GLYPH).unwrap());
        })
    });
}

criterion_group!(combs, comb_circles, comb_glyph_fine_step, parse_glyph);
criterion_main!(combs);
