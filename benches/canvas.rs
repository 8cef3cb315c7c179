// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! Benchmarks for the canvas primitives

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use draw_bench::canvas::{Canvas, WHITE};
use draw_bench::font::{self, Font};
use draw_bench::workload::PARAGRAPHS;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 675;

pub fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fill Implementations");
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    group.bench_function("set_pixel", |bencher| {
        bencher.iter(|| {
            for y in 0..HEIGHT as i32 {
                for x in 0..WIDTH as i32 {
                    canvas.set_pixel(black_box(x), black_box(y), WHITE);
                }
            }
        })
    });

    group.bench_function("fill_rect", |bencher| {
        bencher.iter(|| canvas.fill_rect(0, 0, black_box(WIDTH), black_box(HEIGHT), WHITE))
    });

    group.bench_function("fill", |bencher| bencher.iter(|| canvas.fill(black_box(WHITE))));

    group.finish();
}

pub fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shapes");
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    for radius in [4, 32, 168] {
        group.bench_with_input(BenchmarkId::new("fill_circle", radius), &radius, |bencher, radius| {
            bencher.iter(|| canvas.fill_circle(600, 337, black_box(*radius), WHITE))
        });
    }

    group.bench_function("draw_line diagonal", |bencher| {
        bencher.iter(|| canvas.draw_line(0, 0, black_box(WIDTH as i32 - 1), black_box(HEIGHT as i32 - 1), WHITE))
    });

    group.finish();
}

pub fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("Text");
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    for scale in [1, 2] {
        let font = Font::new(scale);
        group.bench_with_input(BenchmarkId::new("draw_text", scale), &font, |bencher, font| {
            bencher.iter(|| canvas.draw_text(0, 0, black_box(PARAGRAPHS[0]), font, WHITE, None))
        });
    }

    group.bench_function("wrap", |bencher| {
        bencher.iter(|| font::wrap(black_box(PARAGRAPHS[2]), black_box(150)))
    });

    group.finish();
}
