//! Benchmarks for the simulation core hot paths.
//!
//! The board is tiny, so these mostly guard against accidental allocation
//! or quadratic scans creeping into the round and mission paths.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hegemon::game::{apply_round, resolve_attack};
use hegemon::{Board, DiceRoll, Faction, Mission, TerritoryId};

fn bench_attack_round(c: &mut Criterion) {
    let brazil = TerritoryId::ALL[0];
    let india = TerritoryId::ALL[2];

    c.bench_function("attack_round", |b| {
        b.iter(|| {
            let mut board = Board::new(Faction::Yellow);
            let outcome = apply_round(
                &mut board,
                black_box(brazil),
                black_box(india),
                Faction::Yellow,
                DiceRoll {
                    attack: 6,
                    defense: 1,
                },
            );
            black_box(outcome)
        });
    });
}

fn bench_mission_check(c: &mut Criterion) {
    let board = Board::new(Faction::Yellow);

    c.bench_function("mission_check", |b| {
        b.iter(|| {
            let eliminate = Mission::EliminateGreen.accomplished(black_box(&board), Faction::Yellow);
            let conquer = Mission::ConquerThree.accomplished(black_box(&board), Faction::Yellow);
            black_box((eliminate, conquer))
        });
    });
}

fn bench_seeded_rounds(c: &mut Criterion) {
    let brazil = TerritoryId::ALL[0];
    let india = TerritoryId::ALL[2];

    c.bench_function("seeded_rounds_10", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(black_box(42));
            let mut board = Board::new(Faction::Yellow);
            for _ in 0..10 {
                if resolve_attack(&mut board, brazil, india, Faction::Yellow, &mut rng).is_err() {
                    break;
                }
            }
            black_box(board)
        });
    });
}

criterion_group!(
    benches,
    bench_attack_round,
    bench_mission_check,
    bench_seeded_rounds
);
criterion_main!(benches);
