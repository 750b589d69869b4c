// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_slider::gesture::GestureEvent;
use understory_slider::{Slider, SliderConfig, SliderListener, snap};

#[derive(Default)]
struct Count {
    changes: u64,
    confirms: u64,
}

impl SliderListener for Count {
    fn on_change(&mut self, _value: f64) {
        self.changes += 1;
    }

    fn on_confirm(&mut self, _value: f64) {
        self.confirms += 1;
    }
}

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/snap");
    let xs: Vec<f64> = (0..4_096).map(|i| f64::from(i) * 0.37).collect();
    group.throughput(Throughput::Elements(xs.len() as u64));

    for inc in [1.0_f64, 3.6, 25.0] {
        group.bench_with_input(BenchmarkId::from_parameter(inc), &xs, |b, xs| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in xs {
                    acc += snap(black_box(x), inc);
                }
                acc
            });
        });
    }
    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/drag_session");

    for moves in [16_u32, 256, 4_096] {
        group.throughput(Throughput::Elements(u64::from(moves) + 2));
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            let config = SliderConfig::default().with_range(0.0, 1_000.0, 5.0);
            let mut slider = Slider::new(config, (), Count::default()).unwrap();
            slider.set_track_size(Size::new(800.0, 24.0));

            b.iter(|| {
                slider.handle_gesture(GestureEvent::Down { offset: 10.0 });
                for i in 0..moves {
                    let delta = f64::from(i % 800);
                    slider.handle_gesture(GestureEvent::Move {
                        delta: black_box(delta),
                    });
                }
                slider.handle_gesture(GestureEvent::Up { delta: 400.0 });
                let count = slider.listener();
                black_box((slider.value(), count.changes, count.confirms))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_snap, bench_drag_session);
criterion_main!(benches);
