//! Benchmarks for backdrop rendering and event routing.
//!
//! Run with: cargo bench -p scrim-widgets --bench backdrop_bench

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use scrim_core::event::Event;
use scrim_core::geometry::Rect;
use scrim_render::frame::{Frame, HitId};
use scrim_render::grapheme_pool::GraphemePool;
use scrim_widgets::{
    BACKDROP_HIT, Backdrop, BackdropAnimation, BackdropState, FadeConfig, Label, StatefulWidget,
    Widget,
};

fn bench_dimmed_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("backdrop/dimmed_render");

    for (w, h) in [(80, 24), (120, 40), (200, 60)] {
        group.throughput(Throughput::Elements(w as u64 * h as u64));

        let backdrop = Backdrop::new().hit_id(HitId::new(1));
        let mut state = BackdropState::shown();
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(w, h, &mut pool);
        let area = Rect::new(0, 0, w, h);

        group.bench_with_input(
            BenchmarkId::new("full_area", format!("{w}x{h}")),
            &(),
            |b, _| {
                b.iter(|| {
                    frame.clear();
                    StatefulWidget::render(&backdrop, area, &mut frame, &mut state);
                    black_box(&frame);
                })
            },
        );
    }

    group.finish();
}

fn bench_custom_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("backdrop/custom_render");

    for (w, h) in [(80, 24), (200, 60)] {
        group.throughput(Throughput::Elements(w as u64 * h as u64));

        let backdrop = Backdrop::custom(Label::new("Loading, please wait"));
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(w, h, &mut pool);
        let area = Rect::new(0, 0, w, h);

        group.bench_with_input(
            BenchmarkId::new("label_content", format!("{w}x{h}")),
            &(),
            |b, _| {
                b.iter(|| {
                    frame.clear();
                    Widget::render(&backdrop, area, &mut frame);
                    black_box(&frame);
                })
            },
        );
    }

    group.finish();
}

fn bench_fade_playback(c: &mut Criterion) {
    let mut group = c.benchmark_group("backdrop/fade_playback");

    let config = FadeConfig::default();
    group.bench_function("full_fade_in_16ms_ticks", |b| {
        b.iter(|| {
            let mut anim = BackdropAnimation::new();
            anim.show();
            while !anim.tick(Duration::from_millis(16), &config) {}
            black_box(anim)
        })
    });

    group.bench_function("reversal_mid_flight", |b| {
        b.iter(|| {
            let mut anim = BackdropAnimation::new();
            anim.show();
            anim.tick(Duration::from_millis(100), &config);
            anim.hide();
            while !anim.tick(Duration::from_millis(16), &config) {}
            black_box(anim)
        })
    });

    group.finish();
}

fn bench_handle_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("backdrop/handle_event");

    let backdrop = Backdrop::new().hit_id(HitId::new(1));
    let mut state = BackdropState::shown();
    let hit = Some((HitId::new(1), BACKDROP_HIT, 0));
    let down = Event::left_down(5, 2);
    let up = Event::left_up(5, 2);

    group.bench_function("press_pair", |b| {
        b.iter(|| {
            backdrop.handle_event(&mut state, &down, hit);
            black_box(backdrop.handle_event(&mut state, &up, hit))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dimmed_render,
    bench_custom_render,
    bench_fade_playback,
    bench_handle_event,
);

criterion_main!(benches);
