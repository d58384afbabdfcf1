use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

use cozy_chess::{Board, Piece};
use evaluation::{Evaluator, PawnCache, HCE};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use search::{history_bonus, static_exchange, QuietHistory, SearchConfig, SearchStackEntry, TTMoveHistory};
use utils::attacks::pawn_attacks_set;
use utils::{AttackTables, Move, MoveList};

pub struct BenchOptions {
    pub threads: usize,
    pub games: usize,
    pub plies: usize,
    pub seed: u64,
}

#[derive(Default)]
struct WorkerStats {
    positions: u64,
    exchanges: u64,
    winning_exchanges: u64,
    checksum: i64,
}

impl WorkerStats {
    fn merge(mut self, other: WorkerStats) -> Self {
        self.positions += other.positions;
        self.exchanges += other.exchanges;
        self.winning_exchanges += other.winning_exchanges;
        self.checksum = self.checksum.wrapping_add(other.checksum);
        self
    }
}

pub fn run(options: &BenchOptions, config: &SearchConfig) -> Result<(), Box<dyn Error>> {
    let tables = Arc::new(AttackTables::build());
    let pawn_cache = Arc::new(PawnCache::default());
    let evaluator = Evaluator::with_defaults(tables, pawn_cache);

    println!(
        "Running benchmark: {} threads, {} games of {} plies\n",
        options.threads, options.games, options.plies
    );
    info!("Bench: {} threads, seed {}", options.threads, options.seed);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()?;

    let start = Instant::now();
    let stats = pool.install(|| {
        (0..options.threads)
            .into_par_iter()
            .map(|tid| {
                // Games are split evenly, the first workers take the remainder
                let games = options.games / options.threads
                    + usize::from(tid < options.games % options.threads);
                let seed = options.seed.wrapping_add(tid as u64);
                let mut worker = Worker::new(evaluator.clone(), config, seed);
                worker.play(games, options.plies)
            })
            .reduce(WorkerStats::default, WorkerStats::merge)
    });

    print_summary(&stats, start.elapsed());
    Ok(())
}

fn print_summary(stats: &WorkerStats, elapsed: Duration) {
    let seconds = elapsed.as_secs_f64().max(1e-9);

    println!("=== Benchmark Summary ===");
    println!("Positions: {}", stats.positions);
    println!(
        "Exchanges: {} ({} winning)",
        stats.exchanges, stats.winning_exchanges
    );
    println!("Checksum: {}", stats.checksum);
    println!("Time: {} ms", elapsed.as_millis());
    println!("Positions/s: {:.0}", stats.positions as f64 / seconds);
}

/// Plays random games, scoring every position and running the move-ordering
/// work a search would do on it.
struct Worker {
    evaluator: Evaluator,
    config: SearchConfig,
    see_values: [i32; 6],
    quiet_history: QuietHistory,
    tt_move_history: TTMoveHistory,
    rng: StdRng,
    stats: WorkerStats,
}

impl Worker {
    fn new(evaluator: Evaluator, config: &SearchConfig, seed: u64) -> Self {
        Self {
            evaluator,
            config: config.clone(),
            see_values: config.see_values(),
            quiet_history: QuietHistory::new(config),
            tt_move_history: TTMoveHistory::new(config),
            rng: StdRng::seed_from_u64(seed),
            stats: WorkerStats::default(),
        }
    }

    fn play(&mut self, games: usize, plies: usize) -> WorkerStats {
        for _ in 0..games {
            self.quiet_history.reset();
            self.tt_move_history.reset();

            let mut board = Board::default();
            for ply in 0..plies {
                if !self.step(&mut board, ply) {
                    break;
                }
            }
        }

        std::mem::take(&mut self.stats)
    }

    /// Returns false once the game is over.
    fn step(&mut self, board: &mut Board, ply: usize) -> bool {
        let mut cozy_moves = Vec::new();
        board.generate_moves(|piece_moves| {
            cozy_moves.extend(piece_moves);
            false
        });
        if cozy_moves.is_empty() {
            return false;
        }

        let position = self.evaluator.snapshot(board);
        let score = self.evaluator.evaluate(&position);
        self.stats.positions += 1;
        self.stats.checksum = self.stats.checksum.wrapping_add(score as i64);

        let moves: MoveList = cozy_moves
            .iter()
            .map(|&mv| Move::from_board(board, mv))
            .collect();

        let them = !position.side_to_move();
        let captures = position.colors(them);
        let mut quiets = MoveList::new();
        for &mv in &moves {
            if captures.is_set(mv.to) || position.en_passant() == Some(mv.to) {
                self.stats.exchanges += 1;
                if static_exchange(self.evaluator.tables(), &position, mv, 0, &self.see_values) {
                    self.stats.winning_exchanges += 1;
                }
            } else if mv.promotion.is_none() {
                quiets.push(mv);
            }
        }

        let choice = self.rng.gen_range(0..moves.len());
        let chosen = moves[choice];

        // Treat the played move as a cutoff and every quiet before it as tried
        if let Some(idx) = quiets.iter().position(|&mv| mv == chosen) {
            let threats = pawn_attacks_set(position.pieces(them, Piece::Pawn), them);
            let depth = 1 + (ply % 8) as i32;
            self.quiet_history.update_score(
                &position,
                &SearchStackEntry::with_move(chosen),
                depth,
                threats,
                &quiets[..idx],
            );

            let bonus = history_bonus(depth, &self.config);
            let bonus = if score >= 0 { bonus } else { -bonus };
            self.tt_move_history.update_table_score(&position, bonus);
        }

        board.play_unchecked(cozy_moves[choice]);
        true
    }
}
