// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast store churn.
//!
//! Measures the cost of adding toasts past the registry bound and of firing
//! timers through `tick`, with and without attached listeners.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;
use toastline::config::Config;
use toastline::notifications::{ManualClock, NewToast, ToastFeed, ToastKind, ToastStore};

fn bench_add_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_with_eviction");
    for listeners in [0usize, 1, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(listeners),
            &listeners,
            |b, &listeners| {
                let store = ToastStore::new(&Config::default());
                let _feeds: Vec<_> = (0..listeners).map(|_| ToastFeed::attach(&store)).collect();
                b.iter(|| black_box(store.add(NewToast::new(ToastKind::Info, "bench"))));
            },
        );
    }
    group.finish();
}

fn bench_tick_expiry(c: &mut Criterion) {
    c.bench_function("tick_expire_and_remove", |b| {
        let clock = ManualClock::new();
        let config = Config {
            max_visible: Some(20),
            ..Config::default()
        };
        let store = ToastStore::with_clock(&config, clock.clone());
        b.iter(|| {
            for _ in 0..20 {
                store.add(NewToast::new(ToastKind::Success, "bench"));
            }
            clock.advance(Duration::from_secs(60));
            black_box(store.tick());
            clock.advance(Duration::from_secs(60));
            black_box(store.tick());
        });
    });
}

criterion_group!(benches, bench_add_with_eviction, bench_tick_expiry);
criterion_main!(benches);
