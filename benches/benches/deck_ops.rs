// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carddeck_drag::{DragController, DragEvent, Viewport};
use carddeck_state::DeckState;
use carddeck_sync::{CardDeck, SlidePolicy, TagSynchronizer};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};

const START: Point = Point::new(200.0, 600.0);

fn tags(n: usize) -> Vec<Option<u32>> {
    (0..n as u32).map(Some).collect()
}

fn deck(n: usize) -> DeckState {
    let mut s = DeckState::new();
    s.initialize(n);
    s
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    let viewport = Viewport::from_height(800.0, 44.0, 34.0);
    let controller = DragController::default();
    for &n in &[8usize, 64, 512] {
        group.throughput(Throughput::Elements(n as u64));
        // Fling every card up, then pull them all back down.
        group.bench_function(format!("fling_round_trip_n{}", n), |b| {
            b.iter_batched(
                || deck(n),
                |mut s| {
                    let up_end = DragEvent::ended(START, Vec2::new(0.0, -40.0), Vec2::new(0.0, -200.0));
                    let down_end = DragEvent::ended(START, Vec2::new(0.0, 40.0), Vec2::new(0.0, 200.0));
                    for _ in 0..n {
                        controller.handle(&mut s, &DragEvent::changed(START, Vec2::new(0.0, -10.0)), &viewport);
                        black_box(controller.handle(&mut s, &up_end, &viewport));
                    }
                    for _ in 0..n {
                        controller.handle(&mut s, &DragEvent::changed(START, Vec2::new(0.0, 10.0)), &viewport);
                        black_box(controller.handle(&mut s, &down_end, &viewport));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_slide(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide");
    for &n in &[8usize, 64, 512] {
        let tags = tags(n);
        for policy in [SlidePolicy::Reorganize, SlidePolicy::Restack] {
            group.throughput(Throughput::Elements(n as u64));
            group.bench_function(format!("{:?}_sweep_n{}", policy, n), |b| {
                b.iter_batched(
                    || (deck(n), TagSynchronizer::<u32>::new(policy, Default::default())),
                    |(mut s, mut sync)| {
                        // Back to front, then front to back.
                        for t in (0..n as u32).rev().chain(0..n as u32) {
                            black_box(sync.slide_to(&mut s, &tags, &t));
                        }
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    for &n in &[8usize, 64, 512] {
        let tags = tags(n);
        group.bench_function(format!("card_deck_set_items_n{}", n), |b| {
            let mut deck: CardDeck<u32> = CardDeck::default();
            b.iter(|| black_box(deck.set_items(n, &tags)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag, bench_slide, bench_recompute);
criterion_main!(benches);
