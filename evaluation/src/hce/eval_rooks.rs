use super::context::EvalContext;
use super::masks::file_of;
use super::HCEConfig;
use cozy_chess::{Color, Piece};
use utils::ScorePair;

#[inline(always)]
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color, config: &HCEConfig) -> ScorePair {
    let position = ctx.position;
    let rooks = position.pieces(color, Piece::Rook);
    let our_pawns = position.pieces(color, Piece::Pawn);
    let their_pawns = position.pieces(!color, Piece::Pawn);

    // Rooks see through their own queens and rooks
    let occupied = position.occupied() ^ position.pieces(color, Piece::Queen) ^ rooks;

    let mut score = ScorePair::ZERO;
    for square in rooks {
        let moves = ctx.tables.rook_attacks(square, occupied);
        let moves = ctx.legalize(Piece::Rook, square, moves, color);
        let mobility = ctx.record_attacks(Piece::Rook, color, moves, &config.attack_power[2]);
        score += config.rook_mobility[mobility.popcount() as usize];

        let file = file_of(square);
        if (our_pawns & file).is_empty() {
            let semi_open = !(their_pawns & file).is_empty();
            score += config.rook_on_file_bonus[semi_open as usize][square.file() as usize];
        }
    }

    score
}
