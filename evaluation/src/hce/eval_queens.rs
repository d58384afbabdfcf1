use super::context::EvalContext;
use super::HCEConfig;
use cozy_chess::{Color, Piece};
use utils::ScorePair;

#[inline(always)]
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color, config: &HCEConfig) -> ScorePair {
    let position = ctx.position;

    // Queens see through their own bishops and rooks
    let occupied = position.occupied()
        ^ position.pieces(color, Piece::Bishop)
        ^ position.pieces(color, Piece::Rook);

    let mut score = ScorePair::ZERO;
    for square in position.pieces(color, Piece::Queen) {
        let moves = ctx.tables.queen_attacks(square, occupied);
        let moves = ctx.legalize(Piece::Queen, square, moves, color);
        let mobility = ctx.record_attacks(Piece::Queen, color, moves, &config.attack_power[3]);
        score += config.queen_mobility[mobility.popcount() as usize];
    }

    score
}
