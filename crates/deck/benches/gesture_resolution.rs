//! Benchmarks for gesture resolution and deck advancement
//!
//! Run with: cargo bench --package deck

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deck::{card_opacity, card_rotation, resolve_offset, CoinFlipOracle, Decision, SwipeDeck};

fn bench_offset_resolution(c: &mut Criterion) {
    c.bench_function("resolve_offset", |b| {
        b.iter(|| {
            for offset in [-250.0, -150.0, -100.0, 0.0, 100.0, 150.0, 250.0] {
                black_box(resolve_offset(black_box(offset)));
            }
        })
    });
}

fn bench_card_transforms(c: &mut Criterion) {
    c.bench_function("card_transforms", |b| {
        b.iter(|| {
            let mut offset = -200.0f32;
            while offset <= 200.0 {
                black_box(card_rotation(black_box(offset)));
                black_box(card_opacity(black_box(offset)));
                offset += 5.0;
            }
        })
    });
}

fn bench_full_deck_run(c: &mut Criterion) {
    let candidates: Vec<_> = (0..1_000)
        .map(|i| {
            let mut profile = profiles::sample_profiles().remove(0);
            profile.id = format!("{i}");
            profile
        })
        .collect();

    c.bench_function("swipe_through_1000_candidates", |b| {
        b.iter(|| {
            let mut deck = SwipeDeck::new(candidates.clone());
            let mut oracle = CoinFlipOracle::with_seed(7, 0.5);
            while !deck.is_exhausted() {
                deck.decide(black_box(Decision::Connect)).unwrap();
                black_box(deck.resolve_with(&mut oracle).unwrap());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_offset_resolution,
    bench_card_transforms,
    bench_full_deck_run
);
criterion_main!(benches);
