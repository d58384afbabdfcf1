use super::context::EvalContext;
use super::HCEConfig;
use cozy_chess::{Color, Piece};
use utils::attacks::{king_attacks, knight_attacks, pawn_attacks_set, pawn_pushes};
use utils::{Bitboard, Position, ScorePair};

#[inline(always)]
fn threatened(
    position: &Position,
    color: Color,
    attacks: Bitboard,
    our_attacks: Bitboard,
    penalty: &[[ScorePair; 2]; 6],
) -> ScorePair {
    let mut score = ScorePair::ZERO;
    for piece in Piece::ALL {
        for square in attacks & position.pieces(color, piece) {
            let defended = our_attacks.is_set(square) as usize;
            score += penalty[piece as usize][defended];
        }
    }
    score
}

// Pieces hanging to cheaper attackers, pawn pushes that would fork or chase
// a piece, and checks the enemy cannot punish.
#[inline(always)]
pub(super) fn evaluate(ctx: &EvalContext, color: Color, config: &HCEConfig) -> ScorePair {
    let position = ctx.position;
    let us = color as usize;
    let them = !color;
    let th = them as usize;

    let our_attacks = ctx.attacked_by(color);

    let mut score = ScorePair::ZERO;
    score += threatened(position, color, ctx.knight_attacks[th], our_attacks, &config.threatened_by_knight);
    score += threatened(position, color, ctx.bishop_attacks[th], our_attacks, &config.threatened_by_bishop);
    score += threatened(position, color, ctx.rook_attacks[th], our_attacks, &config.threatened_by_rook);
    score += threatened(position, color, ctx.pawn_attacks[th], our_attacks, &config.threatened_by_pawn);

    // Squares the enemy holds, except where only pieces guard a square our pawns cover
    let enemy_piece_attacks =
        ctx.knight_attacks[th] | ctx.bishop_attacks[th] | ctx.rook_attacks[th] | ctx.queen_attacks[th];
    let enemy_defended = ctx.pawn_attacks[th] | (enemy_piece_attacks & !ctx.pawn_attacks[us]);

    let safe_pushes = pawn_pushes(position.pieces(color, Piece::Pawn), color)
        & !position.occupied()
        & !enemy_defended;
    let push_attacks = pawn_attacks_set(safe_pushes, color);
    for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King] {
        let targets = push_attacks & position.pieces(them, piece);
        score += config.pawn_push_threat[piece as usize] * targets.popcount() as i32;
    }

    // Checking squares the enemy does not cover
    let occupied = position.occupied();
    let their_king = position.king(them);
    let rook_lines = ctx.tables.rook_attacks(their_king, occupied);
    let bishop_lines = ctx.tables.bishop_attacks(their_king, occupied);

    let safe = !(ctx.pawn_attacks[th]
        | ctx.knight_attacks[th]
        | ctx.bishop_attacks[th]
        | ctx.rook_attacks[th]
        | king_attacks(their_king));

    let knight_checks = safe & ctx.knight_attacks[us] & knight_attacks(their_king);
    let bishop_checks = safe & ctx.bishop_attacks[us] & bishop_lines;
    let rook_checks = safe & ctx.rook_attacks[us] & rook_lines;
    let queen_checks = safe & ctx.queen_attacks[us] & (bishop_lines | rook_lines);

    score += config.safe_check_bonus[0] * knight_checks.popcount() as i32;
    score += config.safe_check_bonus[1] * bishop_checks.popcount() as i32;
    score += config.safe_check_bonus[2] * rook_checks.popcount() as i32;
    score += config.safe_check_bonus[3] * queen_checks.popcount() as i32;

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hce::pst::piece_square;
    use cozy_chess::Board;

    #[test]
    fn test_threatened_penalty_by_piece_and_defence() {
        let board: Board = "4k3/8/8/3p4/4N3/8/8/4K3 w - - 0 1".parse().unwrap();
        let position = Position::from_board(&board, piece_square);
        let config = HCEConfig::default();
        let black_pawn_attacks = pawn_attacks_set(position.pieces(Color::Black, Piece::Pawn), Color::Black);
        let e4 = position.pieces(Color::White, Piece::Knight);

        let hanging = threatened(&position, Color::White, black_pawn_attacks, Bitboard::EMPTY, &config.threatened_by_pawn);
        let defended = threatened(&position, Color::White, black_pawn_attacks, e4, &config.threatened_by_pawn);

        assert_eq!(hanging, config.threatened_by_pawn[Piece::Knight as usize][0]);
        assert_eq!(defended, config.threatened_by_pawn[Piece::Knight as usize][1]);
        assert_eq!(
            threatened(&position, Color::Black, black_pawn_attacks, Bitboard::EMPTY, &config.threatened_by_pawn),
            ScorePair::ZERO
        );
    }
}
