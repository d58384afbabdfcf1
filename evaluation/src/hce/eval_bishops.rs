use super::context::EvalContext;
use super::eval_knights::outpost_index;
use super::HCEConfig;
use cozy_chess::{Color, Piece};
use utils::ScorePair;

#[inline(always)]
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color, config: &HCEConfig) -> ScorePair {
    let position = ctx.position;
    let bishops = position.pieces(color, Piece::Bishop);

    // Bishops see through their own queens and bishops
    let occupied = position.occupied() ^ position.pieces(color, Piece::Queen) ^ bishops;

    let mut score = ScorePair::ZERO;
    if bishops.more_than_one() {
        score += config.bishop_pair_bonus;
    }

    for square in bishops {
        let moves = ctx.tables.bishop_attacks(square, occupied);
        let moves = ctx.legalize(Piece::Bishop, square, moves, color);
        let mobility = ctx.record_attacks(Piece::Bishop, color, moves, &config.attack_power[1]);
        score += config.bishop_mobility[mobility.popcount() as usize];

        if ctx.is_outpost(square, color) {
            score += config.bishop_outpost[outpost_index(square, color)];
        }
    }

    score
}
