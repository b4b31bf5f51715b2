use connect_four_minimax::ai::{evaluate, Searcher};
use connect_four_minimax::game::{Board, GameState, Player};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn corpus() -> Vec<(Board, Player)> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut positions = vec![(Board::new(), Player::A)];
    // Derive a variety of densities deterministically
    while positions.len() < 16 {
        let mut state = GameState::initial();
        for _ in 0..rng.random_range(2..24) {
            let legal = state.legal_actions();
            if legal.is_empty() {
                break;
            }
            let _ = state.play(legal[rng.random_range(0..legal.len())]);
        }
        if !state.is_terminal() {
            positions.push((*state.board(), state.current_player()));
        }
    }
    positions
}

fn bench_heuristic(c: &mut Criterion) {
    let positions = corpus();
    c.bench_function("heuristic/evaluate", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for (board, player) in &positions {
                acc += evaluate(black_box(board), *player) as i64;
            }
            black_box(acc)
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let positions = corpus();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for depth in [4, 6] {
        let searcher = Searcher::new(depth);
        group.bench_function(format!("alpha_beta/depth{depth}"), |b| {
            b.iter(|| {
                for (board, player) in &positions {
                    black_box(searcher.best_move(black_box(board), *player));
                }
            })
        });
    }
    let plain = Searcher::new(4).with_alpha_beta(false);
    group.bench_function("plain/depth4", |b| {
        b.iter(|| {
            for (board, player) in &positions {
                black_box(plain.best_move(black_box(board), *player));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_heuristic, bench_search);
criterion_main!(benches);
