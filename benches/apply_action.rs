//! Benchmarks for the turn engine hot path.
//!
//! Search-style callers clone a manager, apply an action and inspect the
//! result, so both the clone and the staged apply are measured.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use santorini_rules::core::{GameConfig, Phase};
use santorini_rules::game::GameManager;

/// Standard opening: four placements, then one full turn each.
const OPENING: [(Phase, &[i32]); 8] = [
    (Phase::Place, &[0, 0]),
    (Phase::Place, &[4, 4]),
    (Phase::Place, &[4, 0]),
    (Phase::Place, &[0, 4]),
    (Phase::Move, &[0, 0, 1, 1]),
    (Phase::Build, &[1, 1, 2, 2]),
    (Phase::Move, &[4, 4, 3, 3]),
    (Phase::Build, &[3, 3, 2, 2]),
];

fn opened() -> GameManager {
    let mut game = GameManager::new(GameConfig::default()).unwrap();
    for (phase, coordinates) in OPENING {
        game.apply_action(phase, coordinates, None).unwrap();
    }
    game
}

fn bench_opening(c: &mut Criterion) {
    let fresh = GameManager::new(GameConfig::default()).unwrap();

    c.bench_function("scripted_opening", |b| {
        b.iter(|| {
            let mut game = fresh.clone();
            for (phase, coordinates) in OPENING {
                black_box(game.apply_action(phase, black_box(coordinates), None).unwrap());
            }
            game
        });
    });
}

fn bench_clone_and_apply(c: &mut Criterion) {
    let game = opened();

    c.bench_function("clone_manager", |b| b.iter(|| black_box(&game).clone()));

    c.bench_function("legal_actions", |b| b.iter(|| black_box(&game).legal_actions()));

    c.bench_function("clone_and_apply_each_legal", |b| {
        b.iter(|| {
            for action in game.legal_actions() {
                let mut next = game.clone();
                black_box(next.apply(&action).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_opening, bench_clone_and_apply);
criterion_main!(benches);
