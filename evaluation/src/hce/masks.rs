use utils::Bitboard;

const FILE_A: u64 = 0x0101_0101_0101_0101;
const NOT_FILE_A: u64 = !FILE_A;
const NOT_FILE_H: u64 = !(FILE_A << 7);

const fn east_west(bb: u64) -> u64 {
    ((bb << 1) & NOT_FILE_A) | ((bb >> 1) & NOT_FILE_H)
}

/// Squares strictly ahead of a square on its file, `[color][square]`.
pub static FORWARD_FILE: [[Bitboard; 64]; 2] = {
    let mut masks = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let file = FILE_A << (sq % 8);
        let rank = sq / 8;
        // Ranks above `rank`, and ranks below it.
        let above = if rank == 7 { 0 } else { !0u64 << ((rank + 1) * 8) };
        let below = (1u64 << (rank * 8)) - 1;
        masks[0][sq] = Bitboard(file & above);
        masks[1][sq] = Bitboard(file & below);
        sq += 1;
    }
    masks
};

/// Forward file plus both adjacent forward files: the squares an enemy pawn
/// would need to stop a passer.
pub static FORWARD_FILE_ADJACENT: [[Bitboard; 64]; 2] = {
    let mut masks = [[Bitboard::EMPTY; 64]; 2];
    let mut color = 0;
    while color < 2 {
        let mut sq = 0;
        while sq < 64 {
            let forward = FORWARD_FILE[color][sq].0;
            masks[color][sq] = Bitboard(forward | east_west(forward));
            sq += 1;
        }
        color += 1;
    }
    masks
};

/// Both files next to a square's file.
pub static ADJACENT_FILES: [Bitboard; 64] = {
    let mut masks = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        masks[sq] = Bitboard(east_west(FILE_A << (sq % 8)));
        sq += 1;
    }
    masks
};

/// Outpost band: ranks 4 to 6 for White, ranks 3 to 5 for Black.
pub const OUTPOSTS: [Bitboard; 2] = [
    Bitboard(0x0000_FFFF_FF00_0000),
    Bitboard(0x0000_00FF_FFFF_0000),
];

#[inline(always)]
pub fn file_of(square: utils::Square) -> Bitboard {
    Bitboard::FILES[square.file() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::Square;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_forward_file() {
        let white = FORWARD_FILE[0][sq("e6").index()];
        assert_eq!(white, sq("e7").bitboard() | sq("e8").bitboard());

        let black = FORWARD_FILE[1][sq("e3").index()];
        assert_eq!(black, sq("e2").bitboard() | sq("e1").bitboard());

        assert!(FORWARD_FILE[0][sq("a8").index()].is_empty());
    }

    #[test]
    fn test_forward_file_adjacent_on_edge() {
        let mask = FORWARD_FILE_ADJACENT[0][sq("a6").index()];
        assert_eq!(mask.popcount(), 4);
        assert!(mask.is_set(sq("b7")));
        assert!(!mask.is_set(sq("a6")));
    }

    #[test]
    fn test_outpost_bands() {
        assert!(OUTPOSTS[0].is_set(sq("d4")));
        assert!(OUTPOSTS[0].is_set(sq("d6")));
        assert!(!OUTPOSTS[0].is_set(sq("d3")));
        assert!(OUTPOSTS[1].is_set(sq("d3")));
        assert!(OUTPOSTS[1].is_set(sq("d5")));
        assert!(!OUTPOSTS[1].is_set(sq("d6")));
    }
}
