use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::{Criterion, criterion_group, criterion_main};
use mandelbrot_explorer::{
    ExplorerConfig, MandelbrotConfig, ViewState, Viewport, render_frame_serial,
};

fn bench_render_pipeline(c: &mut Criterion) {
    let config = ExplorerConfig {
        mandelbrot: MandelbrotConfig { max_iterations: 256 },
        ..ExplorerConfig::default()
    };
    let mut renderer = config
        .build_renderer()
        .expect("default renderer should build");
    let view = ViewState::default();

    c.bench_function("render_frame_parallel_800x600", |b| {
        b.iter(|| black_box(renderer.render(black_box(view))))
    });

    let single = ExplorerConfig {
        worker_count: NonZeroUsize::new(1),
        ..config.clone()
    };
    let mut single_renderer = single
        .build_renderer()
        .expect("single worker renderer should build");

    c.bench_function("render_frame_single_worker_800x600", |b| {
        b.iter(|| black_box(single_renderer.render(black_box(view))))
    });

    let viewport = Viewport::new(800, 600).expect("viewport should be valid");
    let algorithm = config
        .mandelbrot
        .build_algorithm()
        .expect("algorithm should build");
    let colour_map = config.mandelbrot.build_colour_map();

    c.bench_function("render_frame_serial_800x600", |b| {
        b.iter(|| black_box(render_frame_serial(viewport, black_box(view), &algorithm, &colour_map)))
    });
}

criterion_group!(benches, bench_render_pipeline);
criterion_main!(benches);
