use std::sync::Arc;

use cozy_chess::Board;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evaluation::{Evaluator, PawnCache, HCE};
use search::{static_exchange, SearchConfig};
use utils::{legal_moves, AttackTables, Position};

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = Evaluator::with_defaults(
        Arc::new(AttackTables::build()),
        Arc::new(PawnCache::default()),
    );
    let mut group = c.benchmark_group("evaluate");

    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();
        let position = evaluator.snapshot(&board);

        group.bench_with_input(BenchmarkId::from_parameter(fen), &position, |b, position| {
            b.iter(|| black_box(evaluator.evaluate(black_box(position))))
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let evaluator = Evaluator::with_defaults(
        Arc::new(AttackTables::build()),
        Arc::new(PawnCache::default()),
    );
    let board: Board = POSITIONS[1].parse().unwrap();

    c.bench_function("snapshot", |b| {
        b.iter(|| black_box(evaluator.snapshot(black_box(&board))))
    });
}

fn bench_see(c: &mut Criterion) {
    let tables = AttackTables::build();
    let values = SearchConfig::default().see_values();
    let board: Board = POSITIONS[1].parse().unwrap();
    let position = Position::from_board(&board, |_, _, _| Default::default());
    let moves = legal_moves(&board);

    c.bench_function("see/kiwipete_all_moves", |b| {
        b.iter(|| {
            moves
                .iter()
                .filter(|&&mv| static_exchange(&tables, &position, mv, 0, &values))
                .count()
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_snapshot, bench_see);
criterion_main!(benches);
