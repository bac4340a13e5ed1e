// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the bubble lifecycle.
//!
//! Measures the performance of:
//! - A single fade sample (the per-frame cost while animating)
//! - A full show/auto-hide cycle driven at 60 ticks per second
//! - Restyling a bubble with a new configuration

use criterion::{criterion_group, criterion_main, Criterion};
use info_bubble::config::ANIMATION_TICK_MS;
use info_bubble::ui::bubble::animation::{Fade, FadeKind};
use info_bubble::ui::bubble::{Configuration, Easing, InfoBubble, Timing};
use iced::Color;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark sampling an in-flight fade.
fn bench_fade_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble_lifecycle");

    let start = Instant::now();
    let mut fade = Fade::new(FadeKind::In, 0.0, Timing::default());
    fade.sample(start);
    let midway = start + Duration::from_millis(150);

    group.bench_function("fade_sample", |b| {
        b.iter(|| black_box(fade.sample(black_box(midway))));
    });

    for easing in [Easing::Linear, Easing::EaseInOut] {
        group.bench_function(format!("easing_{easing:?}"), |b| {
            b.iter(|| black_box(easing.apply(black_box(0.42))));
        });
    }

    group.finish();
}

/// Benchmark a complete show and auto-hide cycle.
///
/// The bubble is ticked every frame, as the demo's subscription does.
fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble_lifecycle");
    let frame = Duration::from_millis(ANIMATION_TICK_MS);
    let config = Configuration {
        number_of_seconds_to_auto_hide: Duration::from_millis(500),
        ..Configuration::default()
    };

    group.bench_function("show_auto_hide_cycle", |b| {
        b.iter(|| {
            let mut bubble = InfoBubble::with_config(config);
            bubble.set_label_text("Hello World");
            bubble.show();

            let mut now = Instant::now();
            while bubble.is_animating() {
                bubble.tick(now);
                now += frame;
            }
            black_box(&bubble);
        });
    });

    group.finish();
}

/// Benchmark restyling.
fn bench_set_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble_lifecycle");
    let mut bubble = InfoBubble::new();
    bubble.set_label_text("Hello very big big big big big big big world");
    let configured = Configuration {
        background_color: Color::from_rgb8(92, 184, 92),
        ..Configuration::default()
    };

    group.bench_function("set_config", |b| {
        b.iter(|| bubble.set_config(black_box(configured)));
    });

    group.finish();
}

criterion_group!(benches, bench_fade_sample, bench_full_cycle, bench_set_config);
criterion_main!(benches);
