use cozy_chess::Piece;
use utils::ScorePair;

/// Material values for middlegame (mg) and endgame (eg), interpolated by game phase.
///
/// <https://www.chessprogramming.org/Tapered_Eval>
#[derive(Debug, Clone, Copy)]
pub struct PieceValues {
    pub pawn: ScorePair,
    pub knight: ScorePair,
    pub bishop: ScorePair,
    pub rook: ScorePair,
    pub queen: ScorePair,
}

impl PieceValues {
    #[inline(always)]
    pub fn get(&self, piece: Piece) -> ScorePair {
        match piece {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => ScorePair::ZERO,
        }
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: ScorePair::new(82, 104),
            knight: ScorePair::new(337, 298),
            bishop: ScorePair::new(363, 316),
            rook: ScorePair::new(478, 532),
            queen: ScorePair::new(1012, 958),
        }
    }
}
