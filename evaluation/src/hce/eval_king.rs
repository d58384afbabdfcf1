use super::context::EvalContext;
use super::masks::file_of;
use super::HCEConfig;
use cozy_chess::{Color, Piece};
use utils::ScorePair;

const SHELTER_KING_INDEX: i32 = 7;
const STORM_KING_INDEX: i32 = 19;
const ZONE_WIDTH: i32 = 3;

// Shelter and storm tables are laid out from White's side, three squares per
// rank. Black walks them in the opposite direction.
#[inline(always)]
fn zone_index(king_index: i32, rank_diff: i32, file_diff: i32, king_color: Color) -> usize {
    let sign = if king_color == Color::Black { -1 } else { 1 };
    (king_index - (rank_diff * ZONE_WIDTH + file_diff) * sign) as usize
}

// Shelter from own pawns, pressure from own storming pawns, open files next
// to the king, and the attack power the enemy pieces built up.
#[inline(always)]
pub(super) fn evaluate(ctx: &EvalContext, color: Color, config: &HCEConfig) -> ScorePair {
    let position = ctx.position;
    let them = !color;
    let our_pawns = position.pieces(color, Piece::Pawn);
    let their_pawns = position.pieces(them, Piece::Pawn);

    let king = position.king(color);
    let mut score = ScorePair::ZERO;

    for pawn in our_pawns & ctx.king_zone[color as usize] {
        let rank_diff = pawn.rank() as i32 - king.rank() as i32;
        let file_diff = pawn.file() as i32 - king.file() as i32;
        score += config.pawn_shelter[zone_index(SHELTER_KING_INDEX, rank_diff, file_diff, color)];
    }

    let their_king = position.king(them);
    for pawn in our_pawns & ctx.pawn_storm_zone[them as usize] {
        let rank_diff = pawn.rank() as i32 - their_king.rank() as i32;
        let file_diff = pawn.file() as i32 - their_king.file() as i32;
        score += config.pawn_storm[zone_index(STORM_KING_INDEX, rank_diff, file_diff, them)];
    }

    let file = file_of(king);
    if (our_pawns & file).is_empty() {
        let semi_open = !(their_pawns & file).is_empty();
        score += config.king_on_file_penalty[semi_open as usize][king.file() as usize];
    }

    score - ctx.attack_power[them as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_index_mirrors_for_black() {
        // Pawn straight in front of the king
        assert_eq!(zone_index(SHELTER_KING_INDEX, 1, 0, Color::White), 4);
        assert_eq!(zone_index(SHELTER_KING_INDEX, -1, 0, Color::Black), 4);

        // Two ranks ahead, one file to the right
        assert_eq!(zone_index(SHELTER_KING_INDEX, 2, 1, Color::White), 0);
        assert_eq!(zone_index(SHELTER_KING_INDEX, -2, 1, Color::Black), 2);

        // Farthest storming pawn
        assert_eq!(zone_index(STORM_KING_INDEX, 6, 1, Color::White), 0);
        assert_eq!(zone_index(STORM_KING_INDEX, -6, -1, Color::Black), 0);
    }
}
