use super::context::EvalContext;
use super::masks::{ADJACENT_FILES, FORWARD_FILE, FORWARD_FILE_ADJACENT};
use super::HCEConfig;
use cozy_chess::{Color, Piece};
use utils::{Bitboard, ScorePair};

/// Pawn-only terms: phalanxes, passers, defended, doubled and isolated pawns.
/// The result depends on nothing but pawn placement and goes in the pawn cache.
pub(super) fn structure(ctx: &EvalContext, color: Color, config: &HCEConfig) -> (ScorePair, Bitboard) {
    let position = ctx.position;
    let our_pawns = position.pieces(color, Piece::Pawn);
    let their_pawns = position.pieces(!color, Piece::Pawn);

    let mut score = ScorePair::ZERO;
    let mut passed = Bitboard::EMPTY;

    // Pawns with a friendly pawn directly beside them on the west
    for square in our_pawns.east() & our_pawns {
        score += config.pawn_phalanx_bonus[square.relative_rank(color) as usize];
    }

    for square in our_pawns {
        let file = square.file() as usize;
        let rank = square.relative_rank(color) as usize;

        if (FORWARD_FILE_ADJACENT[color as usize][square.index()] & their_pawns).is_empty() {
            passed.set(square);
            score += config.passed_pawn_bonus[rank];
        }

        if ctx.is_defended_by_pawn(square, color) {
            score += config.defended_pawn_bonus[rank];
        }

        if !(FORWARD_FILE[color as usize][square.index()] & our_pawns).is_empty() {
            score += config.doubled_pawn_penalty[file];
        }

        if (ADJACENT_FILES[square.index()] & our_pawns).is_empty() {
            score += config.isolated_pawn_penalty[file];
        }
    }

    (score, passed)
}

/// Passed-pawn terms that depend on king placement, never cached.
pub(super) fn evaluate(ctx: &EvalContext, color: Color, passed: Bitboard, config: &HCEConfig) -> ScorePair {
    let position = ctx.position;
    let them = !color;
    let king = position.king(color);
    let enemy_king = position.king(them);

    let enemy_pieces = position.colors(them)
        & !position.pieces(them, Piece::Pawn)
        & !position.pieces(them, Piece::King);
    let enemy_to_move = (position.side_to_move() == them) as i32;

    let mut score = ScorePair::ZERO;
    for square in passed {
        score += config.king_passed_pawn_distance[square.distance(king) as usize];

        let enemy_distance = square.distance(enemy_king);
        score += config.enemy_king_passed_pawn_distance[enemy_distance as usize];

        // Rule of the square: the enemy king can no longer catch the pawn
        let to_promotion = 7 - square.relative_rank(color) as i32;
        if enemy_pieces.is_empty() && to_promotion < enemy_distance as i32 - enemy_to_move {
            score += config.king_cant_reach_passed_pawn_bonus;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::super::pawn_cache::PawnStructure;
    use super::*;
    use crate::hce::pst::piece_square;
    use cozy_chess::Board;
    use utils::{AttackTables, Position, Square};

    fn position(fen: &str) -> Position {
        let board: Board = fen.parse().unwrap();
        Position::from_board(&board, piece_square)
    }

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_passed_pawns_detected() {
        let tables = AttackTables::build();
        let pos = position("4k3/1p6/8/P2p4/8/8/7P/4K3 w - - 0 1");
        let ctx = EvalContext::new(&pos, &tables, None);
        let config = HCEConfig::default();

        let (_, white_passed) = structure(&ctx, Color::White, &config);
        let (_, black_passed) = structure(&ctx, Color::Black, &config);

        // a5 is stopped by b7, and a5 in turn stops b7
        assert_eq!(white_passed, sq("h2").bitboard());
        assert_eq!(black_passed, sq("d5").bitboard());
    }

    #[test]
    fn test_doubled_and_isolated_penalties() {
        let tables = AttackTables::build();
        let config = HCEConfig::default();

        let healthy = position("4k3/8/8/8/8/8/3PP3/4K3 w - - 0 1");
        let doubled = position("4k3/8/8/8/8/3P4/3P4/4K3 w - - 0 1");

        let ctx = EvalContext::new(&healthy, &tables, None);
        let (healthy_score, _) = structure(&ctx, Color::White, &config);
        let ctx = EvalContext::new(&doubled, &tables, None);
        let (doubled_score, _) = structure(&ctx, Color::White, &config);

        let expected_doubled = config.passed_pawn_bonus[1]
            + config.passed_pawn_bonus[2]
            + config.doubled_pawn_penalty[3]
            + config.isolated_pawn_penalty[3] * 2;
        assert_eq!(doubled_score, expected_doubled);

        let expected_healthy = config.passed_pawn_bonus[1] * 2 + config.pawn_phalanx_bonus[1];
        assert_eq!(healthy_score, expected_healthy);
    }

    #[test]
    fn test_square_rule() {
        let tables = AttackTables::build();
        let config = HCEConfig::default();
        let passer = PawnStructure {
            score: [ScorePair::ZERO; 2],
            passed: [sq("a5").bitboard(), Bitboard::EMPTY],
        };

        // Black king on e5 is four files away: out of the square with White to move.
        let pos = position("8/8/8/P3k3/8/8/8/4K3 w - - 0 1");
        let ctx = EvalContext::new(&pos, &tables, Some(passer));
        let free = evaluate(&ctx, Color::White, passer.passed[0], &config);

        // Black to move: the king steps into the square.
        let pos = position("8/8/8/P3k3/8/8/8/4K3 b - - 0 1");
        let ctx = EvalContext::new(&pos, &tables, Some(passer));
        let caught = evaluate(&ctx, Color::White, passer.passed[0], &config);

        assert_eq!(free - caught, config.king_cant_reach_passed_pawn_bonus);
    }
}
