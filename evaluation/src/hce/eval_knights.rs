use super::context::EvalContext;
use super::HCEConfig;
use cozy_chess::{Color, Piece};
use utils::attacks::knight_attacks;
use utils::ScorePair;

#[inline(always)]
pub(super) fn evaluate(ctx: &mut EvalContext, color: Color, config: &HCEConfig) -> ScorePair {
    let knights = ctx.position.pieces(color, Piece::Knight);

    let mut score = ScorePair::ZERO;
    for square in knights {
        let moves = ctx.legalize(Piece::Knight, square, knight_attacks(square), color);
        let mobility = ctx.record_attacks(Piece::Knight, color, moves, &config.attack_power[0]);
        score += config.knight_mobility[mobility.popcount() as usize];

        if ctx.is_outpost(square, color) {
            score += config.knight_outpost[outpost_index(square, color)];
        }
    }

    score
}

/// Index into the 24-entry outpost tables: three ranks of eight files.
#[inline(always)]
pub(super) fn outpost_index(square: utils::Square, color: Color) -> usize {
    (square.relative_rank(color) as usize - 3) * 8 + square.file() as usize
}
