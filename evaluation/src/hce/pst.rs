use cozy_chess::{Color, Piece};
use utils::{ScorePair, Square};

/// Piece-Square Tables, one packed (mg, eg) bonus per square.
///
/// Tables are written from White's side with a1 at index 0. Black looks up
/// the vertically flipped square, so the tables themselves are never mirrored.
///
/// <https://www.chessprogramming.org/Piece-Square_Tables>
#[allow(clippy::upper_case_acronyms)]
pub type PST = [ScorePair; 64];

#[inline(always)]
pub fn piece_square(color: Color, piece: Piece, square: Square) -> ScorePair {
    PST_TABLE[piece as usize][square.relative_to(color).index()]
}

static PST_TABLE: [PST; 6] = [
    pack(&PAWN_MG, &PAWN_EG),
    pack(&KNIGHT_MG, &KNIGHT_EG),
    pack(&BISHOP_MG, &BISHOP_EG),
    pack(&ROOK_MG, &ROOK_EG),
    pack(&QUEEN_MG, &QUEEN_EG),
    pack(&KING_MG, &KING_EG),
];

const fn pack(mg: &[i16; 64], eg: &[i16; 64]) -> PST {
    let mut table = [ScorePair::ZERO; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = ScorePair::new(mg[i], eg[i]);
        i += 1;
    }
    table
}

// Pawns MG: central pawns pushed to the fourth and fifth rank hold space.
#[rustfmt::skip]
const PAWN_MG: [i16; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0, // rank 1
     -6,  -2,  -8, -14, -14,   4,   8,  -8, // rank 2
     -6,  -4,   2,   6,   6,   0,   4,  -6, // rank 3
     -8,   0,   8,  18,  18,   6,   0, -10, // rank 4
     -2,   6,  12,  22,  22,  12,   6,  -2, // rank 5
     10,  18,  26,  30,  30,  26,  18,  10, // rank 6
     40,  44,  48,  52,  52,  48,  44,  40, // rank 7
      0,   0,   0,   0,   0,   0,   0,   0, // rank 8
];

// Pawns EG: advancement dominates everything else.
#[rustfmt::skip]
const PAWN_EG: [i16; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0, // rank 1
      6,   4,   2,   0,   0,   2,   4,   6, // rank 2
      4,   2,   0,  -2,  -2,   0,   2,   4, // rank 3
     12,   8,   4,   2,   2,   4,   8,  12, // rank 4
     26,  22,  18,  14,  14,  18,  22,  26, // rank 5
     56,  52,  48,  44,  44,  48,  52,  56, // rank 6
     92,  90,  86,  84,  84,  86,  90,  92, // rank 7
      0,   0,   0,   0,   0,   0,   0,   0, // rank 8
];

// Knights MG: a knight on the rim is dim.
#[rustfmt::skip]
const KNIGHT_MG: [i16; 64] = [
    -52, -24, -30, -20, -18, -26, -22, -50, // rank 1
    -30, -22,  -4,   2,   4,  -2, -18, -26, // rank 2
    -22,  -2,   8,  12,  14,  10,   2, -18, // rank 3
    -12,   6,  14,  18,  20,  16,  10,  -8, // rank 4
     -8,  10,  20,  30,  28,  26,  12,  -2, // rank 5
    -14,   8,  24,  26,  30,  34,  16,  -6, // rank 6
    -24, -12,   6,  14,  12,  20,  -8, -16, // rank 7
    -70, -40, -24, -16, -14, -28, -36, -64, // rank 8
];

// Knights EG: centralisation still pays, less sharply.
#[rustfmt::skip]
const KNIGHT_EG: [i16; 64] = [
    -40, -30, -18, -12, -12, -18, -30, -40, // rank 1
    -28, -14,  -4,   2,   2,  -4, -14, -28, // rank 2
    -18,  -2,   8,  14,  14,   8,  -2, -18, // rank 3
    -12,   4,  16,  22,  22,  16,   4, -12, // rank 4
    -12,   4,  16,  22,  22,  16,   4, -12, // rank 5
    -18,  -2,   8,  14,  14,   8,  -2, -18, // rank 6
    -28, -14,  -4,   2,   2,  -4, -14, -28, // rank 7
    -44, -32, -20, -14, -14, -20, -32, -44, // rank 8
];

// Bishops MG: long diagonals and the fianchetto squares.
#[rustfmt::skip]
const BISHOP_MG: [i16; 64] = [
    -18,  -4, -10, -14, -12, -10,  -6, -16, // rank 1
     -2,  10,   6,   0,   2,   6,  14,  -2, // rank 2
     -6,   6,   8,   6,   6,  10,   6,  -4, // rank 3
     -8,   2,   6,  14,  14,   4,   2,  -6, // rank 4
     -8,   4,   6,  16,  14,   8,   4,  -6, // rank 5
    -10,   6,   8,   8,   8,  12,   8,  -6, // rank 6
    -14,  -2,  -4,  -8,  -8,  -4,  -2, -14, // rank 7
    -22, -12, -14, -16, -16, -14, -12, -22, // rank 8
];

#[rustfmt::skip]
const BISHOP_EG: [i16; 64] = [
    -14,  -8, -12,  -6,  -6, -12,  -8, -14, // rank 1
     -8,  -6,  -2,   0,   0,  -2,  -6,  -8, // rank 2
     -6,   0,   6,   6,   6,   6,   0,  -6, // rank 3
     -4,   2,   8,  12,  12,   8,   2,  -4, // rank 4
     -4,   2,   8,  12,  12,   8,   2,  -4, // rank 5
     -6,   0,   6,   6,   6,   6,   0,  -6, // rank 6
     -8,  -6,  -2,   0,   0,  -2,  -6,  -8, // rank 7
    -14,  -8, -12,  -6,  -6, -12,  -8, -14, // rank 8
];

// Rooks MG: central back-rank files and the seventh rank.
#[rustfmt::skip]
const ROOK_MG: [i16; 64] = [
     -6,  -4,   2,   8,   8,   4,  -8,  -6, // rank 1
    -20, -10,  -8,  -4,  -4,  -6, -10, -24, // rank 2
    -18, -10,  -8,  -6,  -6,  -8, -10, -18, // rank 3
    -14,  -8,  -6,  -2,  -2,  -6,  -8, -14, // rank 4
     -8,  -2,   2,   6,   6,   2,  -2,  -8, // rank 5
     -2,   6,   8,  12,  12,   8,   6,  -2, // rank 6
     12,  16,  20,  22,  22,  20,  16,  12, // rank 7
      6,   8,  10,  12,  12,  10,   8,   6, // rank 8
];

#[rustfmt::skip]
const ROOK_EG: [i16; 64] = [
     -6,  -4,  -2,  -4,  -4,  -2,  -4,  -6, // rank 1
     -8,  -6,  -4,  -4,  -4,  -4,  -6,  -8, // rank 2
     -4,  -2,  -2,  -2,  -2,  -2,  -2,  -4, // rank 3
      0,   2,   2,   0,   0,   2,   2,   0, // rank 4
      4,   4,   4,   2,   2,   4,   4,   4, // rank 5
      6,   6,   4,   4,   4,   4,   6,   6, // rank 6
     10,  12,  12,  10,  10,  12,  12,  10, // rank 7
      8,   8,   8,   6,   6,   8,   8,   8, // rank 8
];

// Queens MG: early sorties are punished by tempo-gaining attacks.
#[rustfmt::skip]
const QUEEN_MG: [i16; 64] = [
    -10, -14,  -8,   2,  -4, -16, -20, -24, // rank 1
    -18,  -6,   4,   0,   2,   4,  -8, -16, // rank 2
    -12,   0,   2,   0,   0,   4,   2,  -6, // rank 3
     -8,  -6,  -2,  -2,  -2,   0,  -2,  -4, // rank 4
    -10,  -8,  -4,  -4,  -4,  -2,  -4,  -6, // rank 5
    -10,  -6,   0,   0,   2,   6,   4,   0, // rank 6
    -14, -20,  -4,  -2,  -2,   8,  -2,   4, // rank 7
    -20, -10,  -2,   0,   4,   8,   6,   6, // rank 8
];

#[rustfmt::skip]
const QUEEN_EG: [i16; 64] = [
    -24, -20, -16, -10, -10, -16, -20, -24, // rank 1
    -18, -12,  -8,  -2,  -2,  -8, -12, -18, // rank 2
    -12,  -4,   4,   8,   8,   4,  -4, -12, // rank 3
     -6,   2,  10,  16,  16,  10,   2,  -6, // rank 4
     -4,   6,  14,  20,  20,  14,   6,  -4, // rank 5
     -6,   4,  12,  16,  16,  12,   4,  -6, // rank 6
    -10,   0,   6,  10,  10,   6,   0, -10, // rank 7
    -16,  -8,  -2,   2,   2,  -2,  -8, -16, // rank 8
];

// Kings MG: castled corners are safest, the centre is exposed.
#[rustfmt::skip]
const KING_MG: [i16; 64] = [
     18,  34,  12, -28,   0, -16,  30,  20, // rank 1
      6,   8,  -6, -34, -26, -12,  10,  10, // rank 2
    -16, -14, -24, -38, -38, -26, -16, -22, // rank 3
    -30, -28, -36, -48, -48, -36, -30, -36, // rank 4
    -36, -36, -44, -56, -56, -44, -36, -38, // rank 5
    -40, -40, -48, -60, -60, -48, -40, -40, // rank 6
    -44, -44, -52, -64, -64, -52, -44, -44, // rank 7
    -48, -48, -56, -68, -68, -56, -48, -48, // rank 8
];

// Kings EG: an active, central king wins endgames.
#[rustfmt::skip]
const KING_EG: [i16; 64] = [
    -52, -34, -22, -18, -26, -16, -30, -50, // rank 1
    -28, -14,  -2,   4,   4,  -2, -12, -26, // rank 2
    -18,   0,  12,  20,  20,  14,   2, -16, // rank 3
    -12,   8,  22,  30,  30,  22,   8, -12, // rank 4
     -8,  14,  26,  32,  32,  26,  14,  -8, // rank 5
     -6,  16,  24,  24,  24,  24,  16,  -6, // rank 6
    -14,  10,  14,  12,  12,  14,  10, -14, // rank 7
    -40, -20, -12,  -6,  -6, -12, -20, -40, // rank 8
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_reads_flipped_square() {
        let e2: Square = "e2".parse().unwrap();
        let e7: Square = "e7".parse().unwrap();

        for piece in Piece::ALL {
            assert_eq!(
                piece_square(Color::White, piece, e2),
                piece_square(Color::Black, piece, e7)
            );
        }
    }

    #[test]
    fn test_pawn_table_rewards_advancement() {
        let a2: Square = "a2".parse().unwrap();
        let a7: Square = "a7".parse().unwrap();
        let advanced = piece_square(Color::White, Piece::Pawn, a7);
        let home = piece_square(Color::White, Piece::Pawn, a2);
        assert!(advanced.eg() > home.eg());
    }
}
