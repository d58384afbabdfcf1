mod config;
mod context;
mod eval_bishops;
mod eval_king;
mod eval_knights;
mod eval_pawns;
mod eval_queens;
mod eval_rooks;
mod eval_threats;
mod masks;
mod pawn_cache;
mod pst;

use std::sync::Arc;

pub use config::HCEConfig;
use context::EvalContext;
pub use pawn_cache::{PawnCache, PawnStructure, DEFAULT_PAWN_CACHE_ENTRIES};
pub use pst::piece_square;

use crate::def::HCE;
use crate::piece_values::PieceValues;
use cozy_chess::{Board, Color, Piece};
use utils::{AttackTables, Position, ScorePair, Square};

pub const MAX_PHASE: i32 = 24;

/// Tapered hand-crafted evaluator. Cheap to clone: the attack tables and the
/// pawn cache are shared between clones.
#[derive(Clone)]
pub struct Evaluator {
    piece_values: PieceValues,
    config: HCEConfig,
    tables: Arc<AttackTables>,
    pawn_cache: Arc<PawnCache>,
}

impl Evaluator {
    pub fn new(
        tables: Arc<AttackTables>,
        pawn_cache: Arc<PawnCache>,
        piece_values: PieceValues,
        config: HCEConfig,
    ) -> Self {
        Self {
            piece_values,
            config,
            tables,
            pawn_cache,
        }
    }

    pub fn with_defaults(tables: Arc<AttackTables>, pawn_cache: Arc<PawnCache>) -> Self {
        Self::new(tables, pawn_cache, PieceValues::default(), HCEConfig::default())
    }

    pub fn config(&self) -> &HCEConfig {
        &self.config
    }

    pub fn tables(&self) -> &Arc<AttackTables> {
        &self.tables
    }

    /// Material plus square bonus for one piece.
    #[inline(always)]
    pub fn piece_square_score(&self, color: Color, piece: Piece, square: Square) -> ScorePair {
        self.piece_values.get(piece) + piece_square(color, piece, square)
    }

    /// Builds the snapshot this evaluator reads, with piece scores filled in.
    pub fn snapshot(&self, board: &Board) -> Position {
        Position::from_board(board, |color, piece, square| {
            self.piece_square_score(color, piece, square)
        })
    }

    pub fn evaluate_board(&self, board: &Board) -> i16 {
        self.evaluate(&self.snapshot(board))
    }

    fn pawn_structure(&self, ctx: &EvalContext) -> PawnStructure {
        if let Some(cached) = ctx.pawn_structure {
            return cached;
        }

        let (white_score, white_passed) = eval_pawns::structure(ctx, Color::White, &self.config);
        let (black_score, black_passed) = eval_pawns::structure(ctx, Color::Black, &self.config);
        let entry = PawnStructure {
            score: [white_score, black_score],
            passed: [white_passed, black_passed],
        };

        // Tuning scores every position fresh
        if !cfg!(feature = "tuning") {
            self.pawn_cache.store(ctx.position.pawn_key(), &entry);
        }

        entry
    }
}

/// Blends middlegame and endgame by game phase.
#[inline(always)]
pub fn interpolate(score: ScorePair, phase: u8) -> i16 {
    let phase = (phase as i32).min(MAX_PHASE);
    let mg = score.mg() as i32;
    let eg = score.eg() as i32;
    ((mg * phase + eg * (MAX_PHASE - phase)) / MAX_PHASE) as i16
}

impl HCE for Evaluator {
    fn name(&self) -> String {
        "HCE".to_string()
    }

    fn evaluate(&self, position: &Position) -> i16 {
        let cached = self.pawn_cache.probe(position.pawn_key());
        let mut ctx = EvalContext::new(position, &self.tables, cached);

        let mut score = position.piece_scores(Color::White) - position.piece_scores(Color::Black);

        let pawns = self.pawn_structure(&ctx);
        score += pawns.score[Color::White as usize] - pawns.score[Color::Black as usize];
        score += eval_pawns::evaluate(&ctx, Color::White, pawns.passed[Color::White as usize], &self.config);
        score -= eval_pawns::evaluate(&ctx, Color::Black, pawns.passed[Color::Black as usize], &self.config);

        score += eval_knights::evaluate(&mut ctx, Color::White, &self.config);
        score -= eval_knights::evaluate(&mut ctx, Color::Black, &self.config);

        score += eval_bishops::evaluate(&mut ctx, Color::White, &self.config);
        score -= eval_bishops::evaluate(&mut ctx, Color::Black, &self.config);

        score += eval_rooks::evaluate(&mut ctx, Color::White, &self.config);
        score -= eval_rooks::evaluate(&mut ctx, Color::Black, &self.config);

        score += eval_queens::evaluate(&mut ctx, Color::White, &self.config);
        score -= eval_queens::evaluate(&mut ctx, Color::Black, &self.config);

        score += eval_king::evaluate(&ctx, Color::White, &self.config);
        score -= eval_king::evaluate(&ctx, Color::Black, &self.config);

        score += eval_threats::evaluate(&ctx, Color::White, &self.config);
        score -= eval_threats::evaluate(&ctx, Color::Black, &self.config);

        if position.side_to_move() == Color::Black {
            score = -score;
        }

        // Tempo bonus
        score += self.config.tempo_bonus;

        interpolate(score, position.phase())
    }
}
